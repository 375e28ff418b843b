//! Layout constants for the navigator overlay.

/// Horizontal strip card metrics.
pub mod strip {
    pub const CARD_WIDTH: f32 = 180.0;
    pub const CARD_HEIGHT: f32 = 220.0;
    pub const CARD_SPACING: f32 = 16.0;
}

/// Vertical grid metrics.
pub mod grid {
    pub const COLUMNS: usize = 2;
    pub const CELL_HEIGHT: f32 = 150.0;
    pub const ROW_SPACING: f32 = 14.0;
    pub const COLUMN_SPACING: f32 = 14.0;
}

/// Overlay chrome.
pub mod overlay {
    pub const PADDING: f32 = 24.0;
    pub const HEADER_HEIGHT: f32 = 64.0;
    pub const TITLE_SIZE: f32 = 28.0;
    pub const ITEM_TITLE_SIZE: f32 = 18.0;
    pub const ITEM_DETAIL_SIZE: f32 = 13.0;
    pub const ICON_SIZE: f32 = 36.0;
    pub const CARD_RADIUS: f32 = 14.0;
}
