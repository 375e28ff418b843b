//! Menu navigator domain
//!
//! Full-screen overlay that walks the menu hierarchy. Levels with enough items
//! render three copies of their cards and jump by one copy near either end,
//! so scrolling never runs out.

pub mod centering;
pub mod edge;
pub mod messages;
pub mod navigation;
pub mod state;
pub mod strip;
pub mod title;
pub mod types;
pub mod update;
pub mod view;

pub use messages::{NavigatorEvent, NavigatorMessage};
pub use navigation::Selection;
pub use state::{Effect, NavigatorState};
pub use types::{NavigatorProps, Orientation};
pub use update::{NavigatorUpdate, handle_navigator_message};
pub use view::navigator_view;
