//! Heading and style lookups for the current level.

use dishview_model::{Catalog, CategoryStyle, MenuMap};

use super::navigation::NavigationState;

/// Heading used when nothing better is known.
pub const DEFAULT_TITLE: &str = "Menu";

/// Root shows the restaurant name (or the default); deeper levels show their
/// own label as listed by their parent.
pub fn resolve_title<'a>(
    map: &'a MenuMap,
    navigation: &NavigationState,
    restaurant: Option<&'a str>,
) -> &'a str {
    let Some(parent) = navigation.parent_level() else {
        return restaurant
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(DEFAULT_TITLE);
    };

    map.find_in_level(parent, navigation.current_level())
        .map(|item| item.label.as_str())
        .unwrap_or(DEFAULT_TITLE)
}

/// Style for an item: its own entry, else the current level's.
pub fn resolve_style<'a>(
    catalog: &'a Catalog,
    item_id: &str,
    current_level: &str,
) -> Option<&'a CategoryStyle> {
    catalog
        .style(item_id)
        .or_else(|| catalog.style(current_level))
}
