//! Item material ids.
//!
//! Item payloads name their material as `minecraft:diamond_sword`,
//! `diamond_sword` or `Diamond Sword`. All of these normalise to
//! `DIAMOND_SWORD`, which must then exist in a [`MaterialCatalog`].

use std::fmt;
use std::sync::LazyLock;

use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::value::strip_namespace;

// Embedded at compile time
const VANILLA_MATERIALS: &str = include_str!("../data/materials.txt");

static VANILLA: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| {
    VANILLA_MATERIALS
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
});

/// A resolved material id (upper-case, no namespace).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Material(String);

impl Material {
    #[must_use]
    pub fn stone() -> Self {
        Self("STONE".to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The set of materials the host knows about.
pub trait MaterialCatalog {
    /// `name` is already normalised (see [`normalize_material_id`]).
    fn contains(&self, name: &str) -> bool;
}

/// Built-in table of vanilla item and block ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct VanillaCatalog;

impl VanillaCatalog {
    #[must_use]
    pub fn len(&self) -> usize {
        VANILLA.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        VANILLA.is_empty()
    }
}

impl MaterialCatalog for VanillaCatalog {
    fn contains(&self, name: &str) -> bool {
        VANILLA.contains(name)
    }
}

impl<F> MaterialCatalog for F
where
    F: Fn(&str) -> bool,
{
    fn contains(&self, name: &str) -> bool {
        self(name)
    }
}

/// `minecraft:diamond_sword` / `Diamond Sword` -> `DIAMOND_SWORD`.
#[must_use]
pub fn normalize_material_id(id: &str) -> String {
    strip_namespace(id).to_uppercase().replace(' ', "_")
}

/// Normalise `id` and look it up in `catalog`.
pub fn resolve_material(id: &str, catalog: &impl MaterialCatalog) -> Option<Material> {
    let name = normalize_material_id(id);
    catalog.contains(&name).then_some(Material(name))
}
