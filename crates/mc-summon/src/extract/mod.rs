//! Attribute extraction.
//!
//! Walks a parsed summon payload and produces the ordered [`AttributeOp`]s that
//! a host applies to the spawned entity or item stack. Text fields go through
//! [`TextResolver`], enchantment ids through [`crate::alias`].
//!
//! Extraction is fail-soft per field: a field with the wrong shape is recorded
//! as a [`FieldError`] and skipped. Only a non-object document and an unknown
//! item material abort the call.

mod entity;
mod item;

use serde_json::{Map, Value};
use tracing::warn;

pub use entity::EntityExtraction;
pub use item::ItemExtraction;

use crate::config::ExtractOptions;
use crate::error::{ExtractionError, FieldError, FieldErrorKind};
use crate::material::{MaterialCatalog, VanillaCatalog};
use crate::op::AttributeOp;
use crate::text::TextResolver;

/// Path used for the document root in errors.
pub const ROOT_PATH: &str = "$";

const COMPONENT_NAMESPACE: &str = "minecraft:";

/// Configured extractor. Stateless between calls and `Sync` whenever the
/// catalog is.
#[derive(Debug, Clone)]
pub struct Extractor<C = VanillaCatalog> {
    options: ExtractOptions,
    text: TextResolver,
    catalog: C,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor {
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(ExtractOptions::default())
    }

    #[must_use]
    pub fn with_options(options: ExtractOptions) -> Self {
        Self::with_catalog(options, VanillaCatalog)
    }
}

impl<C: MaterialCatalog> Extractor<C> {
    /// Use a host-provided material registry instead of the vanilla table.
    pub fn with_catalog(options: ExtractOptions, catalog: C) -> Self {
        let text = TextResolver::new(options.max_reparse_depth);
        Self {
            options,
            text,
            catalog,
        }
    }

    #[must_use]
    pub const fn options(&self) -> &ExtractOptions {
        &self.options
    }

    #[must_use]
    pub const fn text_resolver(&self) -> &TextResolver {
        &self.text
    }

    pub fn entity_from_str(&self, json: &str) -> Result<EntityExtraction, ExtractionError> {
        self.entity(&parse_document(json)?)
    }

    pub fn item_from_str(&self, json: &str) -> Result<ItemExtraction, ExtractionError> {
        self.item(&parse_document(json)?)
    }
}

/// Parse raw payload text. The top level must be an object.
pub fn parse_document(json: &str) -> Result<Value, ExtractionError> {
    let value: Value = serde_json::from_str(json)?;
    if !value.is_object() {
        return Err(ExtractionError::NotAnObject {
            path: ROOT_PATH.to_string(),
        });
    }
    Ok(value)
}

/// Entity extraction with default options.
pub fn extract_entity_ops(root: &Value) -> Result<EntityExtraction, ExtractionError> {
    Extractor::new().entity(root)
}

/// Item extraction with default options and the vanilla material table.
pub fn extract_item_ops(root: &Value) -> Result<ItemExtraction, ExtractionError> {
    Extractor::new().item(root)
}

// ════════════════════════════════════════════════════════════════════════════
// Shared helpers
// ════════════════════════════════════════════════════════════════════════════

/// Accumulates ops and skipped fields for one extraction call.
#[derive(Debug, Default)]
struct Collector {
    ops: Vec<AttributeOp>,
    warnings: Vec<FieldError>,
}

impl Collector {
    fn push(&mut self, op: AttributeOp) {
        self.ops.push(op);
    }

    fn skip(&mut self, path: impl Into<String>, kind: FieldErrorKind) {
        let error = FieldError::new(path, kind);
        warn!(path = %error.path, reason = %error.kind, "skipping field");
        self.warnings.push(error);
    }

    /// Unwrap a field read, recording a warning on failure.
    fn read<T>(&mut self, path: &str, result: Result<T, FieldErrorKind>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(kind) => {
                self.skip(path, kind);
                None
            }
        }
    }
}

/// Look up a component, accepting a `minecraft:` prefix on the key. The bare
/// key wins when both are present.
fn component<'a>(components: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    components
        .get(key)
        .or_else(|| components.get(&format!("{COMPONENT_NAMESPACE}{key}")))
}

fn child_path(parent: &str, key: &str) -> String {
    format!("{parent}.{key}")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_parse_document_rejects_non_objects() {
        assert!(parse_document(r#"{"id": "stone"}"#).is_ok());
        assert!(matches!(
            parse_document("[1, 2]"),
            Err(ExtractionError::NotAnObject { path }) if path == ROOT_PATH
        ));
        assert!(matches!(parse_document("{not json"), Err(ExtractionError::Json(_))));
    }

    #[test]
    fn test_component_key_namespace() {
        let components = json!({"minecraft:glowing": true, "silent": true});
        let map = components.as_object().unwrap();
        assert_eq!(component(map, "glowing"), Some(&json!(true)));
        assert_eq!(component(map, "silent"), Some(&json!(true)));
        assert_eq!(component(map, "fire"), None);

        let both = json!({"minecraft:glowing": false, "glowing": true});
        assert_eq!(component(both.as_object().unwrap(), "glowing"), Some(&json!(true)));
    }

    #[test]
    fn test_collector_records_warnings() {
        let mut collector = Collector::default();
        assert_eq!(collector.read("a", Ok::<_, FieldErrorKind>(1)), Some(1));
        assert_eq!(collector.read::<i32>("b.c", Err(FieldErrorKind::ExpectedInt)), None);
        assert_eq!(
            collector.warnings,
            vec![FieldError::new("b.c", FieldErrorKind::ExpectedInt)]
        );
    }
}
