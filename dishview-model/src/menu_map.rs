use std::collections::BTreeMap;

use crate::error::{ModelError, Result};
use crate::item::MenuItem;

/// Level key of the top of every catalog.
pub const ROOT_LEVEL: &str = "root";

/// Ordered item lists keyed by level.
///
/// Always contains [`ROOT_LEVEL`]. Any other key may be absent; a missing or
/// empty list under an item's id marks that item as a leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "BTreeMap<String, Vec<MenuItem>>",
        into = "BTreeMap<String, Vec<MenuItem>>"
    )
)]
pub struct MenuMap {
    levels: BTreeMap<String, Vec<MenuItem>>,
}

impl MenuMap {
    /// Build a map, rejecting documents without a root level or with blank keys.
    pub fn new(levels: BTreeMap<String, Vec<MenuItem>>) -> Result<Self> {
        if levels.keys().any(|key| key.trim().is_empty()) {
            return Err(ModelError::EmptyKey);
        }
        if !levels.contains_key(ROOT_LEVEL) {
            return Err(ModelError::MissingRoot);
        }
        Ok(Self { levels })
    }

    /// Start a map from its root items.
    pub fn with_root(root: Vec<MenuItem>) -> Self {
        let mut levels = BTreeMap::new();
        levels.insert(ROOT_LEVEL.to_string(), root);
        Self { levels }
    }

    /// Add (or replace) the children of `key`.
    pub fn with_level(
        mut self,
        key: impl Into<String>,
        items: Vec<MenuItem>,
    ) -> Self {
        self.levels.insert(key.into(), items);
        self
    }

    pub fn root(&self) -> &[MenuItem] {
        self.level(ROOT_LEVEL).unwrap_or(&[])
    }

    pub fn level(&self, key: &str) -> Option<&[MenuItem]> {
        self.levels.get(key).map(Vec::as_slice)
    }

    /// Items of `key`, or the root items when the key is unknown.
    pub fn items_or_root(&self, key: &str) -> &[MenuItem] {
        self.level(key).unwrap_or_else(|| self.root())
    }

    pub fn contains_level(&self, key: &str) -> bool {
        self.levels.contains_key(key)
    }

    /// True when a non-empty child list exists under `id`.
    pub fn is_category(&self, id: &str) -> bool {
        self.level(id).is_some_and(|items| !items.is_empty())
    }

    /// Look up an item by id within one level's list.
    pub fn find_in_level(&self, level: &str, id: &str) -> Option<&MenuItem> {
        self.level(level)?.iter().find(|item| item.id == id)
    }

    pub fn level_keys(&self) -> impl Iterator<Item = &str> {
        self.levels.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl TryFrom<BTreeMap<String, Vec<MenuItem>>> for MenuMap {
    type Error = ModelError;

    fn try_from(levels: BTreeMap<String, Vec<MenuItem>>) -> Result<Self> {
        Self::new(levels)
    }
}

impl From<MenuMap> for BTreeMap<String, Vec<MenuItem>> {
    fn from(map: MenuMap) -> Self {
        map.levels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MenuMap {
        MenuMap::with_root(vec![
            MenuItem::new("burgers", "Burgers"),
            MenuItem::new("water", "Water"),
        ])
        .with_level(
            "burgers",
            vec![MenuItem::new("burger-classic", "Classic Burger")],
        )
        .with_level("water", Vec::new())
    }

    #[test]
    fn categories_need_a_non_empty_child_list() {
        let map = sample();
        assert!(map.is_category("burgers"));
        assert!(!map.is_category("water"));
        assert!(!map.is_category("burger-classic"));
    }

    #[test]
    fn unknown_levels_fall_back_to_root() {
        let map = sample();
        let items = map.items_or_root("no-such-level");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "burgers");
    }

    #[test]
    fn new_requires_root() {
        let mut levels = BTreeMap::new();
        levels.insert("burgers".to_string(), Vec::new());
        assert!(matches!(MenuMap::new(levels), Err(ModelError::MissingRoot)));
    }

    #[test]
    fn new_rejects_blank_keys() {
        let mut levels = BTreeMap::new();
        levels.insert(ROOT_LEVEL.to_string(), Vec::new());
        levels.insert("  ".to_string(), Vec::new());
        assert!(matches!(MenuMap::new(levels), Err(ModelError::EmptyKey)));
    }

    #[test]
    fn find_in_level_matches_by_id() {
        let map = sample();
        let found = map.find_in_level(ROOT_LEVEL, "burgers");
        assert_eq!(found.map(|i| i.label.as_str()), Some("Burgers"));
        assert!(map.find_in_level("missing", "burgers").is_none());
    }
}
