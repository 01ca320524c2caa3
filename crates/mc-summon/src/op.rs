//! Attribute operations produced by extraction.
//!
//! An operation names one property of the target and the value to give it.
//! Operations are applied strictly in order; a later write to the same
//! property wins.

use bitflags::bitflags;
use serde::Serialize;

use crate::alias::Enchantment;
use crate::text::StyledText;

/// Boolean properties of entities and items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BoolFlag {
    CustomNameVisible,
    Glowing,
    Gravity,
    Silent,
    Invulnerable,
    Unbreakable,
    HideEnchants,
    HideAttributes,
    HideUnbreakable,
    HideDestroys,
    HidePlacedOn,
    HideDye,
}

impl BoolFlag {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CustomNameVisible => "custom_name_visible",
            Self::Glowing => "glowing",
            Self::Gravity => "gravity",
            Self::Silent => "silent",
            Self::Invulnerable => "invulnerable",
            Self::Unbreakable => "unbreakable",
            Self::HideEnchants => "hide_enchants",
            Self::HideAttributes => "hide_attributes",
            Self::HideUnbreakable => "hide_unbreakable",
            Self::HideDestroys => "hide_destroys",
            Self::HidePlacedOn => "hide_placed_on",
            Self::HideDye => "hide_dye",
        }
    }

    /// Whether this flag is one of the tooltip-hiding item flags.
    #[must_use]
    pub const fn is_hide_flag(self) -> bool {
        matches!(
            self,
            Self::HideEnchants
                | Self::HideAttributes
                | Self::HideUnbreakable
                | Self::HideDestroys
                | Self::HidePlacedOn
                | Self::HideDye
        )
    }
}

/// Integer properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IntProperty {
    FireTicks,
}

bitflags! {
    /// Legacy `HideFlags` bitmask.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
    pub struct HideFlags: u8 {
        const ENCHANTS = 1;
        const ATTRIBUTES = 1 << 1;
        const UNBREAKABLE = 1 << 2;
        const DESTROYS = 1 << 3;
        const PLACED_ON = 1 << 4;
        const DYE = 1 << 5;
    }
}

const HIDE_FLAG_BITS: [(HideFlags, BoolFlag); 6] = [
    (HideFlags::ENCHANTS, BoolFlag::HideEnchants),
    (HideFlags::ATTRIBUTES, BoolFlag::HideAttributes),
    (HideFlags::UNBREAKABLE, BoolFlag::HideUnbreakable),
    (HideFlags::DESTROYS, BoolFlag::HideDestroys),
    (HideFlags::PLACED_ON, BoolFlag::HidePlacedOn),
    (HideFlags::DYE, BoolFlag::HideDye),
];

impl HideFlags {
    /// Decode the raw NBT integer. Bits above bit 5 are ignored.
    #[must_use]
    pub const fn from_raw(raw: i32) -> Self {
        Self::from_bits_truncate((raw & 0x3F) as u8)
    }

    /// One item flag per set bit, lowest bit first.
    pub fn flags(self) -> impl Iterator<Item = BoolFlag> {
        HIDE_FLAG_BITS
            .into_iter()
            .filter(move |(bit, _)| self.contains(*bit))
            .map(|(_, flag)| flag)
    }

    /// The bit for a hide flag, if it is one.
    #[must_use]
    pub fn from_flag(flag: BoolFlag) -> Option<Self> {
        HIDE_FLAG_BITS
            .into_iter()
            .find(|(_, f)| *f == flag)
            .map(|(bit, _)| bit)
    }
}

/// A single property write against an entity or item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", content = "value", rename_all = "snake_case")]
pub enum AttributeOp {
    SetDisplayName(StyledText),
    SetLore(Vec<StyledText>),
    SetEnchantment {
        enchantment: Enchantment,
        level: i32,
        allow_unsafe: bool,
    },
    SetBoolFlag {
        flag: BoolFlag,
        value: bool,
    },
    SetIntProperty {
        property: IntProperty,
        value: i32,
    },
    SetHideFlagsBitmask(HideFlags),
    SetCustomModelData(i32),
}

impl AttributeOp {
    /// Enchantment op as the game applies it: level limits are not enforced.
    #[must_use]
    pub const fn enchant(enchantment: Enchantment, level: i32) -> Self {
        Self::SetEnchantment {
            enchantment,
            level,
            allow_unsafe: true,
        }
    }

    #[must_use]
    pub const fn flag(flag: BoolFlag, value: bool) -> Self {
        Self::SetBoolFlag { flag, value }
    }

    /// Short attribute name, used in logs and reports.
    #[must_use]
    pub const fn attribute(&self) -> &'static str {
        match self {
            Self::SetDisplayName(_) => "display_name",
            Self::SetLore(_) => "lore",
            Self::SetEnchantment { .. } => "enchantment",
            Self::SetBoolFlag { flag, .. } => flag.name(),
            Self::SetIntProperty {
                property: IntProperty::FireTicks,
                ..
            } => "fire_ticks",
            Self::SetHideFlagsBitmask(_) => "hide_flags",
            Self::SetCustomModelData(_) => "custom_model_data",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hide_flags_decode() {
        let flags: Vec<_> = HideFlags::from_raw(3).flags().collect();
        assert_eq!(flags, vec![BoolFlag::HideEnchants, BoolFlag::HideAttributes]);

        let all: Vec<_> = HideFlags::from_raw(63).flags().collect();
        assert_eq!(all.len(), 6);

        assert!(HideFlags::from_raw(64).is_empty());
        assert_eq!(HideFlags::from_raw(0).flags().count(), 0);
    }

    #[test]
    fn test_hide_flag_roundtrip() {
        for (bit, flag) in HIDE_FLAG_BITS {
            assert!(flag.is_hide_flag());
            assert_eq!(HideFlags::from_flag(flag), Some(bit));
        }
        assert_eq!(HideFlags::from_flag(BoolFlag::Glowing), None);
    }

    #[test]
    fn test_op_serializes_tagged() {
        let op = AttributeOp::enchant(Enchantment::Sharpness, 5);
        let json = serde_json::to_value(&op).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "op": "set_enchantment",
                "value": {"enchantment": "SHARPNESS", "level": 5, "allow_unsafe": true}
            })
        );

        let op = AttributeOp::flag(BoolFlag::Gravity, false);
        assert_eq!(op.attribute(), "gravity");
    }
}
