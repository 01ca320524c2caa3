//! Enchantment identifier aliases.
//!
//! Many spellings name the same enchantment: vanilla keys (`sharpness`),
//! short forms (`sweeping`), server API names (`DAMAGE_ALL`) and pre-1.13
//! numeric ids (`16`). Everything resolves to one [`Enchantment`]. Unknown
//! spellings resolve to `None`; callers skip the operation rather than guess.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;
use serde::Serialize;

/// Canonical enchantment id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Enchantment {
    // Armor
    Protection,
    FireProtection,
    FeatherFalling,
    BlastProtection,
    ProjectileProtection,
    Respiration,
    AquaAffinity,
    Thorns,
    DepthStrider,
    FrostWalker,
    BindingCurse,
    SoulSpeed,
    SwiftSneak,
    // Weapons
    Sharpness,
    Smite,
    BaneOfArthropods,
    Knockback,
    FireAspect,
    Looting,
    SweepingEdge,
    // Tools
    Efficiency,
    SilkTouch,
    Unbreaking,
    Fortune,
    // Bows
    Power,
    Punch,
    Flame,
    Infinity,
    // Fishing rods
    LuckOfTheSea,
    Lure,
    // Tridents
    Loyalty,
    Impaling,
    Riptide,
    Channeling,
    // Crossbows
    Multishot,
    QuickCharge,
    Piercing,
    // Maces
    Density,
    Breach,
    WindBurst,
    // Any
    Mending,
    VanishingCurse,
}

impl Enchantment {
    pub const ALL: [Self; 42] = [
        Self::Protection,
        Self::FireProtection,
        Self::FeatherFalling,
        Self::BlastProtection,
        Self::ProjectileProtection,
        Self::Respiration,
        Self::AquaAffinity,
        Self::Thorns,
        Self::DepthStrider,
        Self::FrostWalker,
        Self::BindingCurse,
        Self::SoulSpeed,
        Self::SwiftSneak,
        Self::Sharpness,
        Self::Smite,
        Self::BaneOfArthropods,
        Self::Knockback,
        Self::FireAspect,
        Self::Looting,
        Self::SweepingEdge,
        Self::Efficiency,
        Self::SilkTouch,
        Self::Unbreaking,
        Self::Fortune,
        Self::Power,
        Self::Punch,
        Self::Flame,
        Self::Infinity,
        Self::LuckOfTheSea,
        Self::Lure,
        Self::Loyalty,
        Self::Impaling,
        Self::Riptide,
        Self::Channeling,
        Self::Multishot,
        Self::QuickCharge,
        Self::Piercing,
        Self::Density,
        Self::Breach,
        Self::WindBurst,
        Self::Mending,
        Self::VanishingCurse,
    ];

    /// Stable upper-case id, independent of how the input spelled it.
    #[must_use]
    pub const fn canonical_name(self) -> &'static str {
        match self {
            Self::Protection => "PROTECTION",
            Self::FireProtection => "FIRE_PROTECTION",
            Self::FeatherFalling => "FEATHER_FALLING",
            Self::BlastProtection => "BLAST_PROTECTION",
            Self::ProjectileProtection => "PROJECTILE_PROTECTION",
            Self::Respiration => "RESPIRATION",
            Self::AquaAffinity => "AQUA_AFFINITY",
            Self::Thorns => "THORNS",
            Self::DepthStrider => "DEPTH_STRIDER",
            Self::FrostWalker => "FROST_WALKER",
            Self::BindingCurse => "BINDING_CURSE",
            Self::SoulSpeed => "SOUL_SPEED",
            Self::SwiftSneak => "SWIFT_SNEAK",
            Self::Sharpness => "SHARPNESS",
            Self::Smite => "SMITE",
            Self::BaneOfArthropods => "BANE_OF_ARTHROPODS",
            Self::Knockback => "KNOCKBACK",
            Self::FireAspect => "FIRE_ASPECT",
            Self::Looting => "LOOTING",
            Self::SweepingEdge => "SWEEPING_EDGE",
            Self::Efficiency => "EFFICIENCY",
            Self::SilkTouch => "SILK_TOUCH",
            Self::Unbreaking => "UNBREAKING",
            Self::Fortune => "FORTUNE",
            Self::Power => "POWER",
            Self::Punch => "PUNCH",
            Self::Flame => "FLAME",
            Self::Infinity => "INFINITY",
            Self::LuckOfTheSea => "LUCK_OF_THE_SEA",
            Self::Lure => "LURE",
            Self::Loyalty => "LOYALTY",
            Self::Impaling => "IMPALING",
            Self::Riptide => "RIPTIDE",
            Self::Channeling => "CHANNELING",
            Self::Multishot => "MULTISHOT",
            Self::QuickCharge => "QUICK_CHARGE",
            Self::Piercing => "PIERCING",
            Self::Density => "DENSITY",
            Self::Breach => "BREACH",
            Self::WindBurst => "WIND_BURST",
            Self::Mending => "MENDING",
            Self::VanishingCurse => "VANISHING_CURSE",
        }
    }
}

/// Lower-case short names accepted as-is.
const ALIASES: &[(&str, Enchantment)] = &[
    // Protection
    ("protection", Enchantment::Protection),
    ("fire_protection", Enchantment::FireProtection),
    ("feather_falling", Enchantment::FeatherFalling),
    ("blast_protection", Enchantment::BlastProtection),
    ("projectile_protection", Enchantment::ProjectileProtection),
    ("respiration", Enchantment::Respiration),
    ("aqua_affinity", Enchantment::AquaAffinity),
    ("thorns", Enchantment::Thorns),
    ("depth_strider", Enchantment::DepthStrider),
    ("frost_walker", Enchantment::FrostWalker),
    ("binding_curse", Enchantment::BindingCurse),
    // Weapon
    ("sharpness", Enchantment::Sharpness),
    ("smite", Enchantment::Smite),
    ("bane_of_arthropods", Enchantment::BaneOfArthropods),
    ("knockback", Enchantment::Knockback),
    ("fire_aspect", Enchantment::FireAspect),
    ("looting", Enchantment::Looting),
    ("sweeping", Enchantment::SweepingEdge),
    // Tool
    ("efficiency", Enchantment::Efficiency),
    ("silk_touch", Enchantment::SilkTouch),
    ("unbreaking", Enchantment::Unbreaking),
    ("fortune", Enchantment::Fortune),
    // Bow
    ("power", Enchantment::Power),
    ("punch", Enchantment::Punch),
    ("flame", Enchantment::Flame),
    ("infinity", Enchantment::Infinity),
    // Fishing rod
    ("luck_of_the_sea", Enchantment::LuckOfTheSea),
    ("lure", Enchantment::Lure),
    // Trident
    ("loyalty", Enchantment::Loyalty),
    ("impaling", Enchantment::Impaling),
    ("riptide", Enchantment::Riptide),
    ("channeling", Enchantment::Channeling),
    // Crossbow
    ("multishot", Enchantment::Multishot),
    ("quick_charge", Enchantment::QuickCharge),
    ("piercing", Enchantment::Piercing),
    // Other
    ("mending", Enchantment::Mending),
    ("vanishing_curse", Enchantment::VanishingCurse),
    ("soul_speed", Enchantment::SoulSpeed),
    ("swift_sneak", Enchantment::SwiftSneak),
];

/// Pre-1.13 server API names, still found in old plugin configs.
const LEGACY_API_NAMES: &[(&str, Enchantment)] = &[
    ("PROTECTION_ENVIRONMENTAL", Enchantment::Protection),
    ("PROTECTION_FIRE", Enchantment::FireProtection),
    ("PROTECTION_FALL", Enchantment::FeatherFalling),
    ("PROTECTION_EXPLOSIONS", Enchantment::BlastProtection),
    ("PROTECTION_PROJECTILE", Enchantment::ProjectileProtection),
    ("OXYGEN", Enchantment::Respiration),
    ("WATER_WORKER", Enchantment::AquaAffinity),
    ("DAMAGE_ALL", Enchantment::Sharpness),
    ("DAMAGE_UNDEAD", Enchantment::Smite),
    ("DAMAGE_ARTHROPODS", Enchantment::BaneOfArthropods),
    ("LOOT_BONUS_MOBS", Enchantment::Looting),
    ("DIG_SPEED", Enchantment::Efficiency),
    ("DURABILITY", Enchantment::Unbreaking),
    ("LOOT_BONUS_BLOCKS", Enchantment::Fortune),
    ("ARROW_DAMAGE", Enchantment::Power),
    ("ARROW_KNOCKBACK", Enchantment::Punch),
    ("ARROW_FIRE", Enchantment::Flame),
    ("ARROW_INFINITE", Enchantment::Infinity),
    ("LUCK", Enchantment::LuckOfTheSea),
];

/// Numeric ids used in `ench` lists before the flattening.
const LEGACY_NUMERIC_IDS: &[(i32, Enchantment)] = &[
    (0, Enchantment::Protection),
    (1, Enchantment::FireProtection),
    (2, Enchantment::FeatherFalling),
    (3, Enchantment::BlastProtection),
    (4, Enchantment::ProjectileProtection),
    (5, Enchantment::Respiration),
    (6, Enchantment::AquaAffinity),
    (7, Enchantment::Thorns),
    (8, Enchantment::DepthStrider),
    (9, Enchantment::FrostWalker),
    (10, Enchantment::BindingCurse),
    (16, Enchantment::Sharpness),
    (17, Enchantment::Smite),
    (18, Enchantment::BaneOfArthropods),
    (19, Enchantment::Knockback),
    (20, Enchantment::FireAspect),
    (21, Enchantment::Looting),
    (22, Enchantment::SweepingEdge),
    (32, Enchantment::Efficiency),
    (33, Enchantment::SilkTouch),
    (34, Enchantment::Unbreaking),
    (35, Enchantment::Fortune),
    (48, Enchantment::Power),
    (49, Enchantment::Punch),
    (50, Enchantment::Flame),
    (51, Enchantment::Infinity),
    (61, Enchantment::LuckOfTheSea),
    (62, Enchantment::Lure),
    (65, Enchantment::Loyalty),
    (66, Enchantment::Impaling),
    (67, Enchantment::Riptide),
    (68, Enchantment::Channeling),
    (70, Enchantment::Mending),
    (71, Enchantment::VanishingCurse),
];

static ALIAS_TABLE: LazyLock<FxHashMap<&'static str, Enchantment>> =
    LazyLock::new(|| ALIASES.iter().copied().collect());

/// Canonical names plus legacy API names.
static CANONICAL_TABLE: LazyLock<FxHashMap<&'static str, Enchantment>> = LazyLock::new(|| {
    Enchantment::ALL
        .iter()
        .map(|e| (e.canonical_name(), *e))
        .chain(LEGACY_API_NAMES.iter().copied())
        .collect()
});

static NUMERIC_TABLE: LazyLock<FxHashMap<i32, Enchantment>> =
    LazyLock::new(|| LEGACY_NUMERIC_IDS.iter().copied().collect());

/// Resolve an enchantment name.
///
/// The lower-cased name is looked up in the alias table first. Failing that,
/// the name is upper-cased with `:` replaced by `_` and matched against the
/// canonical id space.
#[must_use]
pub fn resolve_enchantment(name: &str) -> Option<Enchantment> {
    if let Some(enchantment) = ALIAS_TABLE.get(name.to_lowercase().as_str()) {
        return Some(*enchantment);
    }
    let fallback = name.to_uppercase().replace(':', "_");
    CANONICAL_TABLE.get(fallback.as_str()).copied()
}

/// Resolve a pre-1.13 numeric enchantment id.
#[must_use]
pub fn resolve_legacy_enchantment_id(id: i32) -> Option<Enchantment> {
    NUMERIC_TABLE.get(&id).copied()
}
