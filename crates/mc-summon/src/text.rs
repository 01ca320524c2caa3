//! Text component flattening.
//!
//! Minecraft rich text arrives as a string, an array of components, or a
//! component object (`text`, `extra`, `translate`/`with`, `score`, `selector`,
//! `keybind`, `nbt`). [`TextResolver`] collapses any of these into a single
//! [`StyledText`] carrying legacy `§` formatting codes. Resolution is total:
//! shapes it does not understand contribute nothing.
//!
//! Strings that themselves hold JSON (`"{\"text\":\"hi\"}"`) are re-parsed and
//! resolved, up to [`TextResolver::max_reparse_depth`] levels deep.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::format::{ChatFormatting, SECTION_SIGN};
use crate::value::{as_bool, as_text};

/// Default number of nested JSON-in-a-string levels that get re-parsed.
pub const DEFAULT_MAX_REPARSE_DEPTH: usize = 8;

/// Display text with legacy formatting codes already embedded.
///
/// Only produced by [`TextResolver`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct StyledText(String);

impl StyledText {
    pub(crate) const fn new(text: String) -> Self {
        Self(text)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The text with every `§x` code removed.
    #[must_use]
    pub fn strip_formatting(&self) -> String {
        let mut plain = String::with_capacity(self.0.len());
        let mut chars = self.0.chars();
        while let Some(c) = chars.next() {
            if c == SECTION_SIGN {
                chars.next();
            } else {
                plain.push(c);
            }
        }
        plain
    }

    /// Rewrite `§x` codes as ANSI escapes for terminal output.
    ///
    /// Colours reset active styles first, mirroring how the game renders them.
    #[must_use]
    pub fn to_ansi(&self) -> String {
        let mut out = String::with_capacity(self.0.len() + 16);
        let mut styled = false;
        let mut chars = self.0.chars();
        while let Some(c) = chars.next() {
            if c != SECTION_SIGN {
                out.push(c);
                continue;
            }
            let Some(format) = chars.next().and_then(ChatFormatting::from_code) else {
                continue;
            };
            if format.color_name().is_some() {
                out.push_str(&format!("\x1b[0;{}m", format.ansi_sgr()));
            } else {
                out.push_str(&format!("\x1b[{}m", format.ansi_sgr()));
            }
            styled = format != ChatFormatting::Reset;
        }
        if styled {
            out.push_str("\x1b[0m");
        }
        out
    }
}

impl fmt::Display for StyledText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Flattens text component JSON into [`StyledText`].
#[derive(Debug, Clone, Copy)]
pub struct TextResolver {
    max_reparse_depth: usize,
}

impl Default for TextResolver {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_REPARSE_DEPTH)
    }
}

impl TextResolver {
    #[must_use]
    pub const fn new(max_reparse_depth: usize) -> Self {
        Self { max_reparse_depth }
    }

    #[must_use]
    pub const fn max_reparse_depth(&self) -> usize {
        self.max_reparse_depth
    }

    /// Flatten any text component value.
    #[must_use]
    pub fn flatten(&self, value: &Value) -> StyledText {
        let mut out = String::new();
        self.write_value(value, 0, &mut out);
        StyledText::new(out)
    }

    /// Flatten an item `custom_name` component.
    ///
    /// A string starting with `[` is parsed as an array of components and each
    /// element contributes its `text` with only its colour and the
    /// `italic:false` reset applied. Parsing that string counts as one re-parse
    /// level. Everything else goes through [`Self::flatten`].
    #[must_use]
    pub fn flatten_custom_name(&self, value: &Value) -> StyledText {
        let Value::String(raw) = value else {
            return self.flatten(value);
        };
        if !raw.starts_with('[') {
            return self.flatten(value);
        }
        if self.max_reparse_depth == 0 {
            debug!("re-parse depth 0 reached, keeping custom_name literal");
            return StyledText::new(raw.clone());
        }

        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Array(elements)) => {
                let mut out = String::new();
                for element in &elements {
                    match element {
                        Value::Object(component) => {
                            if let Some(Ok(text)) = component.get("text").map(as_text) {
                                if component.get("italic").and_then(|v| as_bool(v).ok())
                                    == Some(false)
                                {
                                    push_format(&mut out, ChatFormatting::Reset);
                                }
                                if let Some(color) = component_color(component) {
                                    push_format(&mut out, color);
                                }
                                out.push_str(&text);
                            }
                        }
                        Value::Array(_) | Value::Null => {}
                        primitive => {
                            if let Ok(text) = as_text(primitive) {
                                out.push_str(&text);
                            }
                        }
                    }
                }
                StyledText::new(out)
            }
            Ok(other) => {
                let mut out = String::new();
                self.write_value(&other, 1, &mut out);
                StyledText::new(out)
            }
            Err(err) => {
                debug!("custom_name is not a JSON array, using it verbatim: {}", err);
                StyledText::new(raw.clone())
            }
        }
    }

    fn write_value(&self, value: &Value, depth: usize, out: &mut String) {
        match value {
            Value::Null => {}
            Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            Value::Number(n) => out.push_str(&n.to_string()),
            Value::String(s) => self.write_string(s, depth, out),
            Value::Array(items) => {
                for item in items {
                    self.write_value(item, depth, out);
                }
            }
            Value::Object(obj) => self.write_object(obj, depth, out),
        }
    }

    fn write_string(&self, s: &str, depth: usize, out: &mut String) {
        if s.starts_with('[') || s.starts_with('{') {
            if depth >= self.max_reparse_depth {
                debug!("re-parse depth {} reached, keeping text literal", depth);
            } else {
                match serde_json::from_str::<Value>(s) {
                    Ok(parsed) => {
                        self.write_value(&parsed, depth + 1, out);
                        return;
                    }
                    Err(err) => debug!("text looks like JSON but is not: {}", err),
                }
            }
        }
        out.push_str(s);
    }

    fn write_object(&self, obj: &Map<String, Value>, depth: usize, out: &mut String) {
        if let Some(Ok(text)) = obj.get("text").map(as_text) {
            write_style_prefix(obj, out);
            out.push_str(&text);
        }

        match obj.get("extra") {
            Some(Value::Array(extra)) => {
                for component in extra {
                    self.write_value(component, depth, out);
                }
            }
            Some(other) => debug!("ignoring non-array extra: {}", other),
            None => {}
        }

        if let Some(Ok(key)) = obj.get("translate").map(as_text) {
            out.push_str(&key);
            if let Some(Value::Array(args)) = obj.get("with") {
                for arg in args {
                    out.push(' ');
                    self.write_value(arg, depth, out);
                }
            }
        }

        if let Some(Ok(score)) = obj
            .get("score")
            .and_then(Value::as_object)
            .and_then(|score| score.get("value"))
            .map(as_text)
        {
            out.push_str(&score);
        }

        for key in ["selector", "keybind", "nbt"] {
            if let Some(Ok(raw)) = obj.get(key).map(as_text) {
                out.push_str(&raw);
            }
        }
    }
}

/// Flatten with the default re-parse depth.
#[must_use]
pub fn flatten(value: &Value) -> StyledText {
    TextResolver::default().flatten(value)
}

/// Codes for a text-bearing component. Each style is prepended in turn
/// starting from the colour, so the colour sits closest to the text and
/// obfuscated lands outermost. `italic:false` takes the italic slot as a reset.
fn write_style_prefix(obj: &Map<String, Value>, out: &mut String) {
    let flag = |key: &str| obj.get(key).and_then(|v| as_bool(v).ok());

    if flag("obfuscated") == Some(true) {
        push_format(out, ChatFormatting::Obfuscated);
    }
    if flag("strikethrough") == Some(true) {
        push_format(out, ChatFormatting::Strikethrough);
    }
    if flag("underlined") == Some(true) {
        push_format(out, ChatFormatting::Underline);
    }
    match flag("italic") {
        Some(true) => push_format(out, ChatFormatting::Italic),
        Some(false) => push_format(out, ChatFormatting::Reset),
        None => {}
    }
    if flag("bold") == Some(true) {
        push_format(out, ChatFormatting::Bold);
    }
    if let Some(color) = component_color(obj) {
        push_format(out, color);
    }
}

fn component_color(obj: &Map<String, Value>) -> Option<ChatFormatting> {
    let name = obj.get("color")?.as_str()?;
    let color = ChatFormatting::color_by_name(name);
    if color.is_none() {
        debug!("unknown colour {:?}, leaving text uncoloured", name);
    }
    color
}

fn push_format(out: &mut String, format: ChatFormatting) {
    out.push(SECTION_SIGN);
    out.push(format.code());
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_plain_text_has_no_codes() {
        assert_eq!(flatten(&json!({"text": "hello"})).as_str(), "hello");
    }

    #[test]
    fn test_every_color_prefixes_one_code() {
        for color in ChatFormatting::COLORS {
            let name = color.color_name().unwrap().to_uppercase();
            let text = flatten(&json!({"text": "x", "color": name}));
            assert_eq!(text.as_str(), format!("§{}x", color.code()));
        }
    }

    #[test]
    fn test_unknown_color_is_uncoloured() {
        assert_eq!(flatten(&json!({"text": "x", "color": "mauve"})).as_str(), "x");
        assert_eq!(
            flatten(&json!({"text": "x", "color": "mauve", "bold": true})).as_str(),
            "§lx"
        );
    }

    #[test]
    fn test_style_order() {
        let text = flatten(&json!({
            "text": "x",
            "color": "red",
            "bold": true,
            "italic": true,
            "underlined": true,
            "strikethrough": true,
            "obfuscated": true,
        }));
        assert_eq!(text.as_str(), "§k§m§n§o§l§cx");
    }

    #[test]
    fn test_reset_sits_between_underline_and_bold() {
        let text = flatten(&json!({
            "text": "x",
            "color": "red",
            "bold": true,
            "italic": false,
            "underlined": true,
        }));
        assert_eq!(text.as_str(), "§n§r§l§cx");
    }

    #[test]
    fn test_italic_false_emits_reset() {
        let text = flatten(&json!({"text": "Sword", "color": "gold", "italic": false}));
        assert_eq!(text.as_str(), "§r§6Sword");
    }

    #[test]
    fn test_extra_appended_after_text() {
        let text = flatten(&json!({
            "text": "a",
            "extra": ["b", {"text": "c", "color": "blue"}]
        }));
        assert_eq!(text.as_str(), "ab§9c");
    }

    #[test]
    fn test_extra_without_text() {
        assert_eq!(flatten(&json!({"extra": ["x", "y"]})).as_str(), "xy");
    }

    #[test]
    fn test_array_concatenates() {
        assert_eq!(flatten(&json!(["a", {"text": "b"}, 3])).as_str(), "ab3");
    }

    #[test]
    fn test_translate_with_arguments() {
        let text = flatten(&json!({"translate": "chat.type.text", "with": ["Steve", {"text": "hi"}]}));
        assert_eq!(text.as_str(), "chat.type.text Steve hi");
    }

    #[test]
    fn test_score_selector_keybind_nbt() {
        assert_eq!(
            flatten(&json!({"score": {"name": "@p", "objective": "k", "value": "12"}})).as_str(),
            "12"
        );
        assert_eq!(flatten(&json!({"selector": "@e[type=pig]"})).as_str(), "@e[type=pig]");
        assert_eq!(flatten(&json!({"keybind": "key.jump"})).as_str(), "key.jump");
        assert_eq!(flatten(&json!({"nbt": "Inventory[0]"})).as_str(), "Inventory[0]");
    }

    #[test]
    fn test_branches_accumulate_in_order() {
        let text = flatten(&json!({"text": "a", "translate": "b", "keybind": "c"}));
        assert_eq!(text.as_str(), "abc");
    }

    #[test]
    fn test_double_encoded_string_is_reparsed() {
        let text = flatten(&json!(r#"{"text":"Bob","color":"red"}"#));
        assert_eq!(text.as_str(), "§cBob");
    }

    #[test]
    fn test_invalid_json_string_kept_literal() {
        assert_eq!(flatten(&json!("[not json")).as_str(), "[not json");
        assert_eq!(flatten(&json!("{oops")).as_str(), "{oops");
    }

    #[test]
    fn test_reparse_depth_limit() {
        let inner = serde_json::to_string(&json!({"text": "deep"})).unwrap();
        let outer = serde_json::to_string(&json!([inner.clone()])).unwrap();

        assert_eq!(TextResolver::new(2).flatten(&json!(outer)).as_str(), "deep");
        assert_eq!(TextResolver::new(1).flatten(&json!(outer)).as_str(), inner);
        assert_eq!(TextResolver::new(0).flatten(&json!(outer)).as_str(), outer);
    }

    #[test]
    fn test_unrecognized_shapes_are_empty() {
        assert_eq!(flatten(&json!(null)).as_str(), "");
        assert_eq!(flatten(&json!({"color": "red"})).as_str(), "");
        assert_eq!(flatten(&json!({"text": {"nested": true}})).as_str(), "");
    }

    #[test]
    fn test_primitives_use_literal_form() {
        assert_eq!(flatten(&json!(42)).as_str(), "42");
        assert_eq!(flatten(&json!(true)).as_str(), "true");
    }

    #[test]
    fn test_custom_name_array_string() {
        let resolver = TextResolver::default();
        let name = json!(r#"[{"text":"Epic ","color":"gold","italic":false,"bold":true},{"text":"Blade"},"!"]"#);
        assert_eq!(resolver.flatten_custom_name(&name).as_str(), "§r§6Epic Blade!");
    }

    #[test]
    fn test_custom_name_plain_and_broken() {
        let resolver = TextResolver::default();
        assert_eq!(resolver.flatten_custom_name(&json!("Bob")).as_str(), "Bob");
        assert_eq!(resolver.flatten_custom_name(&json!("[Bob")).as_str(), "[Bob");
        assert_eq!(
            resolver
                .flatten_custom_name(&json!({"text": "Bob", "color": "aqua"}))
                .as_str(),
            "§bBob"
        );
    }

    #[test]
    fn test_custom_name_parse_counts_as_a_level() {
        let name = json!(r#"[{"text":"Bob","color":"red"}]"#);
        assert_eq!(TextResolver::new(1).flatten_custom_name(&name).as_str(), "§cBob");
        assert_eq!(
            TextResolver::new(0).flatten_custom_name(&name).as_str(),
            r#"[{"text":"Bob","color":"red"}]"#
        );
        assert_eq!(TextResolver::new(0).flatten(&name).as_str(), r#"[{"text":"Bob","color":"red"}]"#);
    }

    #[test]
    fn test_strip_and_ansi() {
        let text = flatten(&json!({"text": "hi", "color": "red", "bold": true}));
        assert_eq!(text.strip_formatting(), "hi");
        assert_eq!(text.as_str(), "§l§chi");
        assert_eq!(text.to_ansi(), "\x1b[1m\x1b[0;91mhi\x1b[0m");
        assert_eq!(flatten(&json!("plain")).to_ansi(), "plain");
    }
}
