use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use super::{Collector, Extractor, ROOT_PATH, child_path, component};
use crate::alias::{Enchantment, resolve_enchantment, resolve_legacy_enchantment_id};
use crate::config::HideFlagsMode;
use crate::error::{ExtractionError, FieldError, FieldErrorKind};
use crate::material::{Material, MaterialCatalog, resolve_material};
use crate::op::{AttributeOp, BoolFlag, HideFlags};
use crate::value::{as_array, as_bool, as_int, as_object, as_text, strip_namespace};

const SHOW_IN_TOOLTIP: &str = "show_in_tooltip";

/// Result of item extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemExtraction {
    pub material: Material,
    pub amount: i32,
    pub ops: Vec<AttributeOp>,
    pub warnings: Vec<FieldError>,
}

impl ItemExtraction {
    /// A single stone with no metadata, used when no payload is given.
    #[must_use]
    pub fn stone() -> Self {
        Self {
            material: Material::stone(),
            amount: 1,
            ops: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

impl<C: MaterialCatalog> Extractor<C> {
    /// Extract an item stack.
    ///
    /// Fails only when the document is not an object or the material cannot be
    /// resolved. When `components` is present the legacy `tag` is ignored.
    pub fn item(&self, root: &Value) -> Result<ItemExtraction, ExtractionError> {
        let root = root.as_object().ok_or_else(|| ExtractionError::NotAnObject {
            path: ROOT_PATH.to_string(),
        })?;

        // vanilla export wraps the stack in `Item`
        let item = match root.get("Item") {
            Some(wrapped) => wrapped.as_object().ok_or_else(|| ExtractionError::NotAnObject {
                path: "Item".to_string(),
            })?,
            None => root,
        };

        let material = match item.get("id") {
            None => Material::stone(),
            Some(id) => {
                let id = match id {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                resolve_material(&id, &self.catalog)
                    .ok_or(ExtractionError::UnknownMaterial { id })?
            }
        };

        let mut out = Collector::default();

        let amount = [("Count", item.get("Count")), ("count", item.get("count"))]
            .into_iter()
            .find_map(|(key, value)| value.map(|v| (key, v)))
            .and_then(|(key, value)| out.read(key, as_int(value)))
            .unwrap_or(1);

        if let Some(components) = item.get("components") {
            if let Some(components) = out.read("components", as_object(components)) {
                self.item_components(&mut out, components);
            }
        } else if let Some(tag) = item.get("tag") {
            if let Some(tag) = out.read("tag", as_object(tag)) {
                self.item_tag(&mut out, tag);
            }
        }

        debug!(%material, amount, ops = out.ops.len(), "extracted item");

        Ok(ItemExtraction {
            material,
            amount,
            ops: out.ops,
            warnings: out.warnings,
        })
    }

    // ════════════════════════════════════════════════════════════════════════
    // components
    // ════════════════════════════════════════════════════════════════════════

    fn item_components(&self, out: &mut Collector, components: &Map<String, Value>) {
        if let Some(name) = component(components, "custom_name") {
            out.push(AttributeOp::SetDisplayName(self.text.flatten_custom_name(name)));
        }

        if let Some(lore) = component(components, "lore") {
            if let Some(lines) = out.read("components.lore", as_array(lore)) {
                let lines = lines.iter().map(|line| self.text.flatten(line)).collect();
                out.push(AttributeOp::SetLore(lines));
            }
        }

        if let Some(enchantments) = component(components, "enchantments") {
            if let Some(enchantments) = out.read("components.enchantments", as_object(enchantments)) {
                component_enchantments(out, enchantments);
            }
        }

        if let Some(unbreakable) = component(components, "unbreakable") {
            out.push(AttributeOp::flag(BoolFlag::Unbreakable, true));
            let hidden = unbreakable
                .get(SHOW_IN_TOOLTIP)
                .is_some_and(|show| !tooltip_visible(show));
            if hidden {
                out.push(AttributeOp::flag(BoolFlag::HideUnbreakable, true));
            }
        }

        if let Some(data) = component(components, "custom_model_data") {
            let path = "components.custom_model_data";
            if let Some(data) = out.read(path, custom_model_data(data)) {
                out.push(AttributeOp::SetCustomModelData(data));
            }
        }
    }

    // ════════════════════════════════════════════════════════════════════════
    // legacy tag
    // ════════════════════════════════════════════════════════════════════════

    fn item_tag(&self, out: &mut Collector, tag: &Map<String, Value>) {
        if let Some(display) = tag.get("display") {
            if let Some(display) = out.read("tag.display", as_object(display)) {
                if let Some(name) = display.get("Name") {
                    out.push(AttributeOp::SetDisplayName(self.text.flatten(name)));
                }
                if let Some(lore) = display.get("Lore") {
                    if let Some(lines) = out.read("tag.display.Lore", as_array(lore)) {
                        let lines = lines.iter().map(|line| self.text.flatten(line)).collect();
                        out.push(AttributeOp::SetLore(lines));
                    }
                }
            }
        }

        let enchantments = ["Enchantments", "ench"]
            .into_iter()
            .find_map(|key| tag.get(key).map(|value| (key, value)));
        if let Some((key, list)) = enchantments {
            let path = child_path("tag", key);
            if let Some(list) = out.read(&path, as_array(list)) {
                for (i, entry) in list.iter().enumerate() {
                    self.legacy_enchantment(out, entry, &format!("{path}[{i}]"));
                }
            }
        }

        if let Some(raw) = tag.get("HideFlags") {
            if let Some(raw) = out.read("tag.HideFlags", as_int(raw)) {
                let flags = HideFlags::from_raw(raw);
                match self.options.hide_flags {
                    HideFlagsMode::Expand => {
                        for flag in flags.flags() {
                            out.push(AttributeOp::flag(flag, true));
                        }
                    }
                    HideFlagsMode::Bitmask => out.push(AttributeOp::SetHideFlagsBitmask(flags)),
                }
            }
        }

        if let Some(unbreakable) = tag.get("Unbreakable") {
            if let Some(value) = out.read("tag.Unbreakable", as_bool(unbreakable)) {
                out.push(AttributeOp::flag(BoolFlag::Unbreakable, value));
            }
        }

        if let Some(data) = tag.get("CustomModelData") {
            if let Some(data) = out.read("tag.CustomModelData", as_int(data)) {
                out.push(AttributeOp::SetCustomModelData(data));
            }
        }
    }

    /// One `{id, lvl}` entry of a legacy enchantment list.
    fn legacy_enchantment(&self, out: &mut Collector, entry: &Value, path: &str) {
        let Some(entry) = out.read(path, as_object(entry)) else {
            return;
        };

        let enchantment = match entry.get("id") {
            None => {
                debug!(path, "enchantment entry has no id, assuming protection");
                Some(Enchantment::Protection)
            }
            Some(id) => {
                let numeric = if self.options.legacy_numeric_enchantments {
                    as_int(id).ok()
                } else {
                    None
                };
                match numeric {
                    Some(numeric) => resolve_legacy_enchantment_id(numeric),
                    None => match out.read(&child_path(path, "id"), as_text(id)) {
                        Some(name) => resolve_enchantment(strip_namespace(&name)),
                        None => return,
                    },
                }
            }
        };

        let level = match entry.get("lvl") {
            None => 1,
            Some(level) => match out.read(&child_path(path, "lvl"), as_int(level)) {
                Some(level) => level,
                None => return,
            },
        };

        match enchantment {
            Some(enchantment) => out.push(AttributeOp::enchant(enchantment, level)),
            None => debug!(path, id = ?entry.get("id"), "unknown enchantment, dropped"),
        }
    }
}

/// `enchantments` component: either `{levels: {...}, show_in_tooltip}` or a
/// direct id -> level map.
fn component_enchantments(out: &mut Collector, enchantments: &Map<String, Value>) {
    match enchantments.get("levels") {
        Some(levels) => {
            if let Some(levels) = out.read("components.enchantments.levels", as_object(levels)) {
                enchantment_levels(out, levels, "components.enchantments.levels");
            }
        }
        None => enchantment_levels(out, enchantments, "components.enchantments"),
    }

    if let Some(show) = enchantments.get(SHOW_IN_TOOLTIP) {
        if !tooltip_visible(show) {
            out.push(AttributeOp::flag(BoolFlag::HideEnchants, true));
        }
    }
}

fn enchantment_levels(out: &mut Collector, levels: &Map<String, Value>, path: &str) {
    for (id, level) in levels {
        if id == SHOW_IN_TOOLTIP {
            continue;
        }
        let Some(level) = out.read(&child_path(path, id), as_int(level)) else {
            continue;
        };
        match resolve_enchantment(strip_namespace(id)) {
            Some(enchantment) => out.push(AttributeOp::enchant(enchantment, level)),
            None => debug!(id, "unknown enchantment, dropped"),
        }
    }
}

/// `show_in_tooltip`: false only for `false`, `0`, `"0b"` and `"false"`.
fn tooltip_visible(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_none_or(|n| n != 0.0),
        Value::String(s) => !matches!(s.as_str(), "0b" | "false"),
        _ => true,
    }
}

/// Integer form, or the first entry of the `{floats: [...]}` form.
fn custom_model_data(value: &Value) -> Result<i32, FieldErrorKind> {
    match value {
        Value::Object(data) => {
            let floats = data.get("floats").ok_or(FieldErrorKind::ExpectedInt)?;
            let first = as_array(floats)?.first().ok_or(FieldErrorKind::ExpectedInt)?;
            as_int(first)
        }
        other => as_int(other),
    }
}
