//! Applying operations to a target.
//!
//! [`AttributeSink`] is the seam between extraction and whatever owns the
//! real entity or item. [`EntityProperties`] and [`ItemMeta`] are plain
//! in-memory targets with the game's last-write-wins semantics.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use crate::alias::Enchantment;
use crate::op::{AttributeOp, BoolFlag, HideFlags, IntProperty};
use crate::text::StyledText;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApplyError {
    #[error("{target} does not support {attribute}")]
    Unsupported {
        target: &'static str,
        attribute: &'static str,
    },
}

/// Something operations can be applied to.
pub trait AttributeSink {
    fn apply(&mut self, op: &AttributeOp) -> Result<(), ApplyError>;
}

/// Apply `ops` in order. A rejected op does not stop the rest.
pub fn apply_all<'a, S>(sink: &mut S, ops: impl IntoIterator<Item = &'a AttributeOp>) -> Vec<ApplyError>
where
    S: AttributeSink + ?Sized,
{
    ops.into_iter()
        .filter_map(|op| sink.apply(op).err())
        .collect()
}

/// Entity state touched by summon payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityProperties {
    pub custom_name: Option<StyledText>,
    pub custom_name_visible: bool,
    pub glowing: bool,
    pub gravity: bool,
    pub silent: bool,
    pub invulnerable: bool,
    pub fire_ticks: i32,
}

impl Default for EntityProperties {
    fn default() -> Self {
        Self {
            custom_name: None,
            custom_name_visible: false,
            glowing: false,
            gravity: true,
            silent: false,
            invulnerable: false,
            fire_ticks: 0,
        }
    }
}

impl AttributeSink for EntityProperties {
    fn apply(&mut self, op: &AttributeOp) -> Result<(), ApplyError> {
        match op {
            AttributeOp::SetDisplayName(name) => self.custom_name = Some(name.clone()),
            AttributeOp::SetBoolFlag { flag, value } => {
                let slot = match flag {
                    BoolFlag::CustomNameVisible => &mut self.custom_name_visible,
                    BoolFlag::Glowing => &mut self.glowing,
                    BoolFlag::Gravity => &mut self.gravity,
                    BoolFlag::Silent => &mut self.silent,
                    BoolFlag::Invulnerable => &mut self.invulnerable,
                    _ => return Err(unsupported("entity", op)),
                };
                *slot = *value;
            }
            AttributeOp::SetIntProperty {
                property: IntProperty::FireTicks,
                value,
            } => self.fire_ticks = *value,
            AttributeOp::SetLore(_)
            | AttributeOp::SetEnchantment { .. }
            | AttributeOp::SetHideFlagsBitmask(_)
            | AttributeOp::SetCustomModelData(_) => return Err(unsupported("entity", op)),
        }
        Ok(())
    }
}

/// Item metadata touched by summon payloads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ItemMeta {
    pub display_name: Option<StyledText>,
    pub lore: Vec<StyledText>,
    pub enchantments: BTreeMap<Enchantment, i32>,
    pub hide_flags: HideFlags,
    pub unbreakable: bool,
    pub custom_model_data: Option<i32>,
}

impl ItemMeta {
    #[must_use]
    pub fn enchantment_level(&self, enchantment: Enchantment) -> Option<i32> {
        self.enchantments.get(&enchantment).copied()
    }
}

impl AttributeSink for ItemMeta {
    fn apply(&mut self, op: &AttributeOp) -> Result<(), ApplyError> {
        match op {
            AttributeOp::SetDisplayName(name) => self.display_name = Some(name.clone()),
            AttributeOp::SetLore(lines) => self.lore.clone_from(lines),
            AttributeOp::SetEnchantment {
                enchantment, level, ..
            } => {
                self.enchantments.insert(*enchantment, *level);
            }
            AttributeOp::SetBoolFlag {
                flag: BoolFlag::Unbreakable,
                value,
            } => self.unbreakable = *value,
            AttributeOp::SetBoolFlag { flag, value } => {
                let bit = HideFlags::from_flag(*flag).ok_or_else(|| unsupported("item", op))?;
                self.hide_flags.set(bit, *value);
            }
            // replaces every hide flag, matching the legacy NBT field
            AttributeOp::SetHideFlagsBitmask(flags) => self.hide_flags = *flags,
            AttributeOp::SetCustomModelData(data) => self.custom_model_data = Some(*data),
            AttributeOp::SetIntProperty { .. } => return Err(unsupported("item", op)),
        }
        Ok(())
    }
}

fn unsupported(target: &'static str, op: &AttributeOp) -> ApplyError {
    ApplyError::Unsupported {
        target,
        attribute: op.attribute(),
    }
}
