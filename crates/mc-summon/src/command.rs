//! `/esummon <entity> [world x y z] [json]` argument parsing.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::error::ExtractionError;
use crate::extract::{EntityExtraction, Extractor, ItemExtraction};
use crate::material::MaterialCatalog;

pub const USAGE: &str = "/esummon <entity> [world x y z] [json]";

const ITEM_ENTITY: &str = "ITEM";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommandError {
    #[error("usage: /esummon <entity> [world x y z] [json]")]
    Usage,

    #[error("invalid {axis} coordinate: {value}")]
    InvalidCoordinate { axis: char, value: String },
}

/// One coordinate, absolute or relative to the sender (`~`, `~-2`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordArg {
    Absolute(f64),
    Relative(f64),
}

impl CoordArg {
    #[must_use]
    pub fn resolve(self, base: f64) -> f64 {
        match self {
            Self::Absolute(v) => v,
            Self::Relative(offset) => base + offset,
        }
    }

    fn parse(axis: char, s: &str) -> Result<Self, CommandError> {
        let invalid = || CommandError::InvalidCoordinate {
            axis,
            value: s.to_string(),
        };
        match s.strip_prefix('~') {
            Some("") => Ok(Self::Relative(0.0)),
            Some(rest) => rest.parse().map(Self::Relative).map_err(|_| invalid()),
            None => s.parse().map(Self::Absolute).map_err(|_| invalid()),
        }
    }
}

impl fmt::Display for CoordArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absolute(v) => write!(f, "{v}"),
            Self::Relative(offset) if offset.abs() < f64::EPSILON => f.write_str("~"),
            Self::Relative(offset) => write!(f, "~{offset}"),
        }
    }
}

/// Where to summon.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LocationArg {
    /// The sender's own position.
    Sender,
    Explicit {
        world: String,
        x: CoordArg,
        y: CoordArg,
        z: CoordArg,
    },
}

impl LocationArg {
    #[must_use]
    pub fn world(&self) -> Option<&str> {
        match self {
            Self::Sender => None,
            Self::Explicit { world, .. } => Some(world),
        }
    }

    /// Absolute position given the sender's position.
    #[must_use]
    pub fn resolve(&self, base: [f64; 3]) -> [f64; 3] {
        match self {
            Self::Sender => base,
            Self::Explicit { x, y, z, .. } => [x.resolve(base[0]), y.resolve(base[1]), z.resolve(base[2])],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummonCommand {
    /// Upper-cased entity type, e.g. `ZOMBIE` or `ITEM`.
    pub entity: String,
    pub location: LocationArg,
    /// Remaining arguments re-joined with single spaces.
    pub json: Option<String>,
}

impl SummonCommand {
    #[must_use]
    pub fn is_item(&self) -> bool {
        self.entity == ITEM_ENTITY
    }

    /// Extract entity ops; no payload means no ops.
    pub fn extract_entity<C: MaterialCatalog>(
        &self,
        extractor: &Extractor<C>,
    ) -> Result<EntityExtraction, ExtractionError> {
        match &self.json {
            Some(json) => extractor.entity_from_str(json),
            None => Ok(EntityExtraction::default()),
        }
    }

    /// Extract the item stack; no payload means a single stone.
    pub fn extract_item<C: MaterialCatalog>(
        &self,
        extractor: &Extractor<C>,
    ) -> Result<ItemExtraction, ExtractionError> {
        match &self.json {
            Some(json) => extractor.item_from_str(json),
            None => Ok(ItemExtraction::stone()),
        }
    }
}

/// Parse already-split command arguments (without the command name).
pub fn parse_summon_args(args: &[&str]) -> Result<SummonCommand, CommandError> {
    let Some((entity, rest)) = args.split_first() else {
        return Err(CommandError::Usage);
    };

    let explicit = args.len() >= 5 && !rest[0].starts_with(['{', '[']);
    let (location, payload) = if explicit {
        let location = LocationArg::Explicit {
            world: rest[0].to_string(),
            x: CoordArg::parse('x', rest[1])?,
            y: CoordArg::parse('y', rest[2])?,
            z: CoordArg::parse('z', rest[3])?,
        };
        (location, &rest[4..])
    } else {
        (LocationArg::Sender, rest)
    };

    let json = payload.join(" ");
    let json = json.trim();

    Ok(SummonCommand {
        entity: entity.to_uppercase(),
        location,
        json: (!json.is_empty()).then(|| json.to_string()),
    })
}

/// Parse a whole argument line. A leading `/esummon` or `esummon` is skipped.
///
/// Arguments are split on single spaces and empty ones are kept, so runs of
/// spaces inside the JSON payload survive the re-join.
pub fn parse_summon_line(line: &str) -> Result<SummonCommand, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(CommandError::Usage);
    }
    let mut args: Vec<&str> = line.split(' ').collect();
    if args
        .first()
        .is_some_and(|first| first.trim_start_matches('/') == "esummon")
    {
        args.remove(0);
    }
    parse_summon_args(&args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage() {
        assert_eq!(parse_summon_args(&[]), Err(CommandError::Usage));
        assert_eq!(parse_summon_line("/esummon"), Err(CommandError::Usage));
        assert_eq!(parse_summon_line("   "), Err(CommandError::Usage));
    }

    #[test]
    fn test_sender_location() {
        let cmd = parse_summon_line(r#"zombie {"CustomName": "Bob"}"#).unwrap();
        assert_eq!(cmd.entity, "ZOMBIE");
        assert_eq!(cmd.location, LocationArg::Sender);
        assert_eq!(cmd.json.as_deref(), Some(r#"{"CustomName": "Bob"}"#));
        assert!(!cmd.is_item());
    }

    #[test]
    fn test_explicit_location() {
        let cmd = parse_summon_line(r#"/esummon item world 10 ~ ~-2.5 {"id": "apple"}"#).unwrap();
        assert!(cmd.is_item());
        assert_eq!(cmd.location.world(), Some("world"));
        assert_eq!(cmd.location.resolve([1.0, 64.0, 5.0]), [10.0, 64.0, 2.5]);
        assert_eq!(cmd.json.as_deref(), Some(r#"{"id": "apple"}"#));
    }

    #[test]
    fn test_payload_spacing_is_kept() {
        let cmd = parse_summon_line(r#"zombie {"CustomName":"Big  Bob"}"#).unwrap();
        assert_eq!(cmd.json.as_deref(), Some(r#"{"CustomName":"Big  Bob"}"#));

        let cmd = parse_summon_line(r#"  /esummon zombie world 0 64 0 {"CustomName":"a   b"}  "#).unwrap();
        assert_eq!(cmd.location.world(), Some("world"));
        assert_eq!(cmd.json.as_deref(), Some(r#"{"CustomName":"a   b"}"#));
    }

    #[test]
    fn test_long_json_is_not_a_location() {
        let cmd = parse_summon_line(r#"pig { "Glowing" : true }"#).unwrap();
        assert_eq!(cmd.location, LocationArg::Sender);
        assert_eq!(cmd.json.as_deref(), Some(r#"{ "Glowing" : true }"#));
    }

    #[test]
    fn test_no_payload() {
        let cmd = parse_summon_args(&["cow", "world", "0", "64", "0"]).unwrap();
        assert_eq!(cmd.json, None);

        let item = parse_summon_args(&["item"]).unwrap();
        let extraction = item.extract_item(&Extractor::new()).unwrap();
        assert_eq!(extraction, ItemExtraction::stone());
    }

    #[test]
    fn test_invalid_coordinate() {
        assert_eq!(
            parse_summon_args(&["cow", "world", "0", "up", "0"]),
            Err(CommandError::InvalidCoordinate {
                axis: 'y',
                value: "up".to_string()
            })
        );
        assert!(parse_summon_args(&["cow", "world", "~x", "0", "0"]).is_err());
    }

    #[test]
    fn test_coord_display() {
        assert_eq!(CoordArg::Relative(0.0).to_string(), "~");
        assert_eq!(CoordArg::Relative(-2.0).to_string(), "~-2");
        assert_eq!(CoordArg::Absolute(64.5).to_string(), "64.5");
    }
}
