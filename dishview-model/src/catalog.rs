//! Catalog documents: the menu tree plus its presentation metadata.

use std::collections::BTreeMap;

use crate::item::MenuItem;
use crate::menu_map::{MenuMap, ROOT_LEVEL};
use crate::style::CategoryStyle;

/// A complete menu catalog as served to the navigator.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catalog {
    /// Display name shown as the title of the root level.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub restaurant: Option<String>,
    pub levels: MenuMap,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "BTreeMap::is_empty")
    )]
    pub styles: BTreeMap<String, CategoryStyle>,
}

impl Catalog {
    pub fn new(levels: MenuMap) -> Self {
        Self {
            restaurant: None,
            levels,
            styles: BTreeMap::new(),
        }
    }

    pub fn with_restaurant(mut self, name: impl Into<String>) -> Self {
        self.restaurant = Some(name.into());
        self
    }

    pub fn with_style(
        mut self,
        id: impl Into<String>,
        style: CategoryStyle,
    ) -> Self {
        self.styles.insert(id.into(), style);
        self
    }

    pub fn style(&self, id: &str) -> Option<&CategoryStyle> {
        self.styles.get(id)
    }

    #[cfg(feature = "serde")]
    pub fn from_json_str(document: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(document)?)
    }

    #[cfg(feature = "serde")]
    pub fn from_reader(reader: impl std::io::Read) -> crate::error::Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Built-in catalog used when no document is configured.
    pub fn sample() -> Self {
        let levels = MenuMap::with_root(vec![
            MenuItem::new("burgers", "Burgers").with_icon("🍔"),
            MenuItem::new("drinks", "Drinks").with_icon("🥤"),
            MenuItem::new("desserts", "Desserts").with_icon("🍰"),
            MenuItem::new("sides", "Sides").with_icon("🍟"),
        ])
        .with_level(
            "burgers",
            vec![
                MenuItem::new("burger-classic", "Classic Burger")
                    .with_price("$11.50")
                    .with_description("Beef patty, cheddar, pickles, house sauce")
                    .with_image("models/burger-classic.glb"),
                MenuItem::new("burger-smash", "Double Smash")
                    .with_price("$14.00")
                    .with_description("Two smashed patties, american cheese"),
                MenuItem::new("burger-veggie", "Garden Burger")
                    .with_price("$12.00")
                    .with_description("Black bean patty, avocado, sprouts"),
                MenuItem::new("burger-chicken", "Crispy Chicken")
                    .with_price("$12.50")
                    .with_description("Buttermilk fried thigh, slaw"),
            ],
        )
        .with_level(
            "drinks",
            vec![
                MenuItem::new("soda", "Sodas").with_icon("🥤"),
                MenuItem::new("shake-vanilla", "Vanilla Shake")
                    .with_price("$6.00")
                    .with_description("Hand-spun, whipped cream"),
                MenuItem::new("lemonade", "Lemonade")
                    .with_price("$4.00")
                    .with_description("Fresh squeezed"),
            ],
        )
        .with_level(
            "soda",
            vec![
                MenuItem::new("cola", "Cola").with_price("$3.00"),
                MenuItem::new("root-beer", "Root Beer").with_price("$3.00"),
            ],
        )
        .with_level(
            "desserts",
            vec![
                MenuItem::new("cheesecake", "Cheesecake")
                    .with_price("$7.50")
                    .with_description("New York style, berry compote"),
                MenuItem::new("brownie", "Fudge Brownie")
                    .with_price("$5.50")
                    .with_description("Warm, with vanilla ice cream"),
                MenuItem::new("sundae", "Sundae")
                    .with_price("$6.50")
                    .with_description("Three scoops, hot fudge"),
                MenuItem::new("pie-apple", "Apple Pie")
                    .with_price("$6.00")
                    .with_description("Lattice crust, cinnamon"),
                MenuItem::new("cookie", "Cookie Plate")
                    .with_price("$4.50")
                    .with_description("Chocolate chip, oatmeal raisin"),
            ],
        )
        .with_level(
            "sides",
            vec![
                MenuItem::new("fries", "Fries").with_price("$4.00"),
                MenuItem::new("onion-rings", "Onion Rings").with_price("$5.00"),
            ],
        );

        debug_assert!(levels.contains_level(ROOT_LEVEL));

        Catalog::new(levels)
            .with_restaurant("Dishview Diner")
            .with_style(
                "burgers",
                CategoryStyle::new(
                    "rgba(255, 149, 0, 0.9)",
                    "rgba(255, 149, 0, 0.35)",
                ),
            )
            .with_style(
                "drinks",
                CategoryStyle::new(
                    "rgba(0, 190, 255, 0.9)",
                    "rgba(0, 190, 255, 0.35)",
                ),
            )
            .with_style(
                "desserts",
                CategoryStyle::new(
                    "rgba(255, 90, 170, 0.9)",
                    "rgba(255, 90, 170, 0.35)",
                ),
            )
    }
}
