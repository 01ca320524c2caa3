//! Summon payload normalization.
//!
//! Turns the JSON given to `/esummon` into an ordered list of
//! [`AttributeOp`]s for an entity or an item stack. Both the legacy
//! `tag`-based schema and the newer `components` schema are understood.
//!
//! # Architecture
//!
//! - [`alias`]: enchantment id lookup (aliases, canonical ids, legacy names)
//! - [`text`]: text component flattening into [`StyledText`]
//! - [`extract`]: the schema walk producing ops and per-field warnings
//! - [`apply`]: the [`AttributeSink`] seam plus in-memory targets
//! - [`command`]: `/esummon` argument parsing
//!
//! ```
//! use mc_summon::{AttributeOp, Enchantment, Extractor};
//!
//! let item = Extractor::new()
//!     .item_from_str(r#"{"id": "minecraft:diamond_sword",
//!         "components": {"enchantments": {"levels": {"minecraft:sharpness": 5}}}}"#)
//!     .unwrap();
//! assert_eq!(item.material.as_str(), "DIAMOND_SWORD");
//! assert_eq!(item.ops, vec![AttributeOp::enchant(Enchantment::Sharpness, 5)]);
//! ```

pub mod alias;
pub mod apply;
pub mod command;
pub mod config;
pub mod error;
pub mod extract;
pub mod format;
pub mod material;
pub mod op;
pub mod text;
pub mod value;

pub use alias::{Enchantment, resolve_enchantment};
pub use apply::{AttributeSink, EntityProperties, ItemMeta, apply_all};
pub use command::{SummonCommand, parse_summon_args, parse_summon_line};
pub use config::{ExtractOptions, HideFlagsMode};
pub use error::{ExtractionError, FieldError, FieldErrorKind};
pub use extract::{
    EntityExtraction, Extractor, ItemExtraction, extract_entity_ops, extract_item_ops,
    parse_document,
};
pub use material::{Material, MaterialCatalog, VanillaCatalog};
pub use op::{AttributeOp, BoolFlag, HideFlags, IntProperty};
pub use text::{StyledText, TextResolver};
