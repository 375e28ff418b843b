/// A node in the hierarchical menu catalog.
///
/// Whether an item is a category or a dish is not stored on the item; it is
/// decided by [`MenuMap::is_category`](crate::MenuMap::is_category).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MenuItem {
    /// Unique key, also the level key of this item's children.
    pub id: String,
    pub label: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub icon: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub price: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub description: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub image: Option<String>,
}

impl MenuItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            price: None,
            description: None,
            image: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Case-insensitive substring match against label and description.
    ///
    /// An empty (or whitespace-only) needle matches everything.
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        if self.label.to_lowercase().contains(&needle) {
            return true;
        }
        self.description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_matches_label_and_description_ignoring_case() {
        let item = MenuItem::new("burger-classic", "Classic Burger")
            .with_description("Beef patty, cheddar, pickles");

        assert!(item.matches_query("classic"));
        assert!(item.matches_query("CHEDDAR"));
        assert!(item.matches_query("  "));
        assert!(!item.matches_query("vegan"));
    }

    #[test]
    fn query_without_description_only_checks_label() {
        let item = MenuItem::new("cola", "Cola");
        assert!(item.matches_query("co"));
        assert!(!item.matches_query("fizzy"));
    }
}
