use serde::Serialize;
use serde_json::Value;

use super::{Collector, Extractor, ROOT_PATH, child_path, component};
use crate::error::{ExtractionError, FieldError};
use crate::material::MaterialCatalog;
use crate::op::{AttributeOp, BoolFlag, IntProperty};
use crate::value::{as_bool, as_int, as_object};

/// Result of entity extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EntityExtraction {
    pub ops: Vec<AttributeOp>,
    pub warnings: Vec<FieldError>,
}

#[derive(Debug, Clone, Copy)]
enum EntityField {
    CustomName,
    CustomNameVisible,
    Glowing,
    NoGravity,
    Silent,
    Invulnerable,
    Fire,
}

/// (top-level key, component key, field), in extraction order.
const ENTITY_FIELDS: [(&str, &str, EntityField); 7] = [
    ("CustomName", "custom_name", EntityField::CustomName),
    ("CustomNameVisible", "custom_name_visible", EntityField::CustomNameVisible),
    ("Glowing", "glowing", EntityField::Glowing),
    ("NoGravity", "no_gravity", EntityField::NoGravity),
    ("Silent", "silent", EntityField::Silent),
    ("Invulnerable", "invulnerable", EntityField::Invulnerable),
    ("Fire", "fire", EntityField::Fire),
];

impl<C: MaterialCatalog> Extractor<C> {
    /// Extract entity operations.
    ///
    /// Top-level fields are read first, then `components`. Both contribute, so
    /// when ops are applied in order a component value overrides the top-level
    /// one.
    pub fn entity(&self, root: &Value) -> Result<EntityExtraction, ExtractionError> {
        let root = root.as_object().ok_or_else(|| ExtractionError::NotAnObject {
            path: ROOT_PATH.to_string(),
        })?;

        let mut out = Collector::default();

        for (key, _, field) in ENTITY_FIELDS {
            if let Some(value) = root.get(key) {
                self.entity_field(&mut out, field, value, key);
            }
        }

        if let Some(components) = root.get("components") {
            if let Some(components) = out.read("components", as_object(components)) {
                for (_, key, field) in ENTITY_FIELDS {
                    if let Some(value) = component(components, key) {
                        self.entity_field(&mut out, field, value, &child_path("components", key));
                    }
                }
            }
        }

        Ok(EntityExtraction {
            ops: out.ops,
            warnings: out.warnings,
        })
    }

    fn entity_field(&self, out: &mut Collector, field: EntityField, value: &Value, path: &str) {
        let flag = |flag: BoolFlag, out: &mut Collector, invert: bool| {
            if let Some(v) = out.read(path, as_bool(value)) {
                out.push(AttributeOp::flag(flag, v != invert));
            }
        };

        match field {
            EntityField::CustomName => {
                out.push(AttributeOp::SetDisplayName(self.text.flatten(value)));
                out.push(AttributeOp::flag(BoolFlag::CustomNameVisible, true));
            }
            EntityField::CustomNameVisible => flag(BoolFlag::CustomNameVisible, out, false),
            EntityField::Glowing => flag(BoolFlag::Glowing, out, false),
            EntityField::NoGravity => flag(BoolFlag::Gravity, out, true),
            EntityField::Silent => flag(BoolFlag::Silent, out, false),
            EntityField::Invulnerable => flag(BoolFlag::Invulnerable, out, false),
            EntityField::Fire => {
                if let Some(ticks) = out.read(path, as_int(value)) {
                    out.push(AttributeOp::SetIntProperty {
                        property: IntProperty::FireTicks,
                        value: ticks,
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::FieldErrorKind;

    fn ops(root: &Value) -> Vec<AttributeOp> {
        Extractor::new().entity(root).unwrap().ops
    }

    #[test]
    fn test_custom_name_and_gravity() {
        let ops = ops(&json!({"CustomName": "Bob", "NoGravity": true}));
        assert_eq!(ops.len(), 3);
        assert!(matches!(&ops[0], AttributeOp::SetDisplayName(name) if name.as_str() == "Bob"));
        assert_eq!(ops[1], AttributeOp::flag(BoolFlag::CustomNameVisible, true));
        assert_eq!(ops[2], AttributeOp::flag(BoolFlag::Gravity, false));
    }

    #[test]
    fn test_top_level_before_components() {
        let ops = ops(&json!({
            "components": {"glowing": false},
            "Glowing": true,
        }));
        assert_eq!(
            ops,
            vec![
                AttributeOp::flag(BoolFlag::Glowing, true),
                AttributeOp::flag(BoolFlag::Glowing, false),
            ]
        );
    }

    #[test]
    fn test_nbt_literals_and_fire() {
        let ops = ops(&json!({"Silent": "1b", "Invulnerable": 0, "Fire": "200s"}));
        assert_eq!(
            ops,
            vec![
                AttributeOp::flag(BoolFlag::Silent, true),
                AttributeOp::flag(BoolFlag::Invulnerable, false),
                AttributeOp::SetIntProperty {
                    property: IntProperty::FireTicks,
                    value: 200
                },
            ]
        );
    }

    #[test]
    fn test_bad_field_is_skipped() {
        let result = Extractor::new()
            .entity(&json!({"Glowing": [1], "Silent": true, "components": 5}))
            .unwrap();
        assert_eq!(result.ops, vec![AttributeOp::flag(BoolFlag::Silent, true)]);
        assert_eq!(
            result.warnings,
            vec![
                FieldError::new("Glowing", FieldErrorKind::ExpectedBool),
                FieldError::new("components", FieldErrorKind::ExpectedObject),
            ]
        );
    }

    #[test]
    fn test_namespaced_component() {
        let ops = ops(&json!({"components": {"minecraft:no_gravity": false}}));
        assert_eq!(ops, vec![AttributeOp::flag(BoolFlag::Gravity, true)]);
    }

    #[test]
    fn test_non_object_root() {
        assert!(Extractor::new().entity(&json!("Bob")).is_err());
    }
}
