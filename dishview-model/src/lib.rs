//! Menu catalog data models shared by the dishview crates.
//!
//! A catalog is a flat map of level keys to ordered item lists. An item is a
//! category when a non-empty list exists under its id, otherwise it is a
//! selectable dish.
#![allow(missing_docs)]

pub mod catalog;
pub mod error;
pub mod item;
pub mod menu_map;
pub mod style;

pub use catalog::Catalog;
pub use error::{ModelError, Result as ModelResult};
pub use item::MenuItem;
pub use menu_map::{MenuMap, ROOT_LEVEL};
pub use style::{CategoryStyle, Rgba};
