//! Extraction options.

use serde::Deserialize;

use crate::text::DEFAULT_MAX_REPARSE_DEPTH;

/// How a legacy `HideFlags` integer is turned into operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HideFlagsMode {
    /// One `SetBoolFlag` per set bit.
    #[default]
    Expand,
    /// A single `SetHideFlagsBitmask`.
    Bitmask,
}

impl std::str::FromStr for HideFlagsMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "expand" => Ok(Self::Expand),
            "bitmask" => Ok(Self::Bitmask),
            other => Err(format!("unknown hide flags mode: {other} (expected expand or bitmask)")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    pub hide_flags: HideFlagsMode,
    /// Resolve numeric `id`s in legacy enchantment lists (`16` -> sharpness).
    pub legacy_numeric_enchantments: bool,
    /// Levels of JSON-inside-a-string that text resolution will re-parse.
    pub max_reparse_depth: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            hide_flags: HideFlagsMode::Expand,
            legacy_numeric_enchantments: true,
            max_reparse_depth: DEFAULT_MAX_REPARSE_DEPTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ExtractOptions::default();
        assert_eq!(options.hide_flags, HideFlagsMode::Expand);
        assert!(options.legacy_numeric_enchantments);
        assert_eq!(options.max_reparse_depth, DEFAULT_MAX_REPARSE_DEPTH);
    }

    #[test]
    fn test_partial_deserialize_keeps_defaults() {
        let options: ExtractOptions =
            serde_json::from_str(r#"{"hide_flags": "bitmask"}"#).unwrap();
        assert_eq!(options.hide_flags, HideFlagsMode::Bitmask);
        assert!(options.legacy_numeric_enchantments);
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("BITMASK".parse::<HideFlagsMode>(), Ok(HideFlagsMode::Bitmask));
        assert_eq!("expand".parse::<HideFlagsMode>(), Ok(HideFlagsMode::Expand));
        assert!("both".parse::<HideFlagsMode>().is_err());
    }
}
