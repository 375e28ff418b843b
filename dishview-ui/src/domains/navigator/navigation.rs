//! Drill-down position inside the menu tree.

use dishview_model::{MenuMap, ROOT_LEVEL};
use log::{debug, warn};

/// A dish chosen by the user, with the level keys that lead to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub item_id: String,
    /// Ancestor levels followed by the level the dish was picked from.
    pub path: Vec<String>,
}

/// Result of pressing an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The item was a category and is now the current level.
    Descended,
    /// The item was a leaf. Navigation is unchanged.
    Selected(Selection),
}

/// Current level plus the breadcrumb stack of its ancestors.
///
/// `navigation_path.len()` is always the depth below root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    current_level: String,
    navigation_path: Vec<String>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::root()
    }
}

impl NavigationState {
    pub fn root() -> Self {
        Self {
            current_level: ROOT_LEVEL.to_string(),
            navigation_path: Vec::new(),
        }
    }

    /// Initial state for an open: the starting category when the map has it,
    /// with `[root]` as its implied ancestry, otherwise root.
    pub fn starting_at(map: &MenuMap, initial_category: Option<&str>) -> Self {
        match initial_category {
            Some(category)
                if category != ROOT_LEVEL && map.contains_level(category) =>
            {
                Self {
                    current_level: category.to_string(),
                    navigation_path: vec![ROOT_LEVEL.to_string()],
                }
            }
            Some(category) if category != ROOT_LEVEL => {
                warn!("Unknown starting category {category:?}, opening at root");
                Self::root()
            }
            _ => Self::root(),
        }
    }

    pub fn current_level(&self) -> &str {
        &self.current_level
    }

    pub fn navigation_path(&self) -> &[String] {
        &self.navigation_path
    }

    pub fn depth(&self) -> usize {
        self.navigation_path.len()
    }

    pub fn can_ascend(&self) -> bool {
        !self.navigation_path.is_empty()
    }

    /// Parent level of the current one, if any.
    pub fn parent_level(&self) -> Option<&str> {
        self.navigation_path.last().map(String::as_str)
    }

    /// Make `category` the current level, pushing the old one.
    pub fn descend(&mut self, category: &str) {
        let previous =
            std::mem::replace(&mut self.current_level, category.to_string());
        self.navigation_path.push(previous);
        debug!(
            "Descended into {:?} (depth {})",
            self.current_level,
            self.depth()
        );
    }

    /// Pop one level. Returns false (and changes nothing) at root.
    pub fn ascend(&mut self) -> bool {
        match self.navigation_path.pop() {
            Some(parent) => {
                self.current_level = parent;
                debug!(
                    "Ascended to {:?} (depth {})",
                    self.current_level,
                    self.depth()
                );
                true
            }
            None => false,
        }
    }

    /// Path reported for a dish picked on the current level.
    pub fn selection_path(&self) -> Vec<String> {
        let mut path = self.navigation_path.clone();
        path.push(self.current_level.clone());
        path
    }

    /// Descend into categories; report leaves without moving.
    pub fn click(&mut self, map: &MenuMap, item_id: &str) -> ClickOutcome {
        if map.is_category(item_id) {
            self.descend(item_id);
            ClickOutcome::Descended
        } else {
            ClickOutcome::Selected(Selection {
                item_id: item_id.to_string(),
                path: self.selection_path(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dishview_model::MenuItem;

    fn map() -> MenuMap {
        MenuMap::with_root(vec![
            MenuItem::new("burgers", "Burgers"),
            MenuItem::new("drinks", "Drinks"),
        ])
        .with_level(
            "burgers",
            vec![MenuItem::new("burger-classic", "Classic Burger")],
        )
        .with_level("drinks", vec![MenuItem::new("soda", "Sodas")])
        .with_level("soda", vec![MenuItem::new("cola", "Cola")])
    }

    #[test]
    fn starts_at_root_by_default() {
        let nav = NavigationState::starting_at(&map(), None);
        assert_eq!(nav.current_level(), ROOT_LEVEL);
        assert!(nav.navigation_path().is_empty());
    }

    #[test]
    fn starts_at_known_category_below_root() {
        let nav = NavigationState::starting_at(&map(), Some("burgers"));
        assert_eq!(nav.current_level(), "burgers");
        assert_eq!(nav.navigation_path(), ["root"]);
    }

    #[test]
    fn unknown_or_root_starting_category_opens_at_root() {
        assert_eq!(
            NavigationState::starting_at(&map(), Some("tacos")),
            NavigationState::root()
        );
        assert_eq!(
            NavigationState::starting_at(&map(), Some(ROOT_LEVEL)),
            NavigationState::root()
        );
    }

    #[test]
    fn path_depth_tracks_descents() {
        let map = map();
        let mut nav = NavigationState::root();

        assert_eq!(nav.click(&map, "drinks"), ClickOutcome::Descended);
        assert_eq!(nav.click(&map, "soda"), ClickOutcome::Descended);
        assert_eq!(nav.current_level(), "soda");
        assert_eq!(nav.navigation_path(), ["root", "drinks"]);
        assert_eq!(nav.depth(), 2);
        assert_eq!(nav.parent_level(), Some("drinks"));
    }

    #[test]
    fn leaf_click_reports_path_without_moving() {
        let map = map();
        let mut nav = NavigationState::starting_at(&map, Some("burgers"));

        let outcome = nav.click(&map, "burger-classic");
        assert_eq!(
            outcome,
            ClickOutcome::Selected(Selection {
                item_id: "burger-classic".into(),
                path: vec!["root".into(), "burgers".into()],
            })
        );
        assert_eq!(nav.current_level(), "burgers");
        assert_eq!(nav.navigation_path(), ["root"]);
    }

    #[test]
    fn ascend_pops_one_level_and_stops_at_root() {
        let map = map();
        let mut nav = NavigationState::root();
        nav.click(&map, "drinks");
        nav.click(&map, "soda");

        assert!(nav.ascend());
        assert_eq!(nav.current_level(), "drinks");
        assert_eq!(nav.navigation_path(), ["root"]);

        assert!(nav.ascend());
        assert_eq!(nav.current_level(), ROOT_LEVEL);
        assert!(nav.navigation_path().is_empty());

        assert!(!nav.ascend());
        assert_eq!(nav, NavigationState::root());
    }
}
