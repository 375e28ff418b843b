//! Infinite carousel constants
//!
//! Defaults for the loop illusion and the centering retry schedule. Tuning
//! should happen here (or in the user's navigator config) so both
//! orientations update consistently.

/// Minimum item counts before a level is rendered as three copies.
pub mod eligibility {
    /// Horizontal strip: fewer items than this render as a plain strip.
    pub const HORIZONTAL_MIN_ITEMS: usize = 3;
    /// Vertical grid: denser layout, so it needs one more item to tile.
    pub const VERTICAL_MIN_ITEMS: usize = 4;
    /// Number of concatenated copies rendered for an eligible level.
    pub const COPIES: usize = 3;
}

/// Edge re-centering thresholds, expressed in units of one copy's extent.
///
/// Empirically tuned; keep them as-is rather than re-deriving.
pub mod edge {
    /// Offsets at or below this fraction of a copy jump forward one copy.
    pub const LEADING_FRACTION: f32 = 0.4;
    /// Offsets within this fraction of a copy from the end jump back.
    pub const TRAILING_FRACTION: f32 = 0.4;
    /// Offsets at or beyond this many copies jump back one copy.
    pub const TRAILING_COPIES: f32 = 2.1;
}

/// Centering-on-entry retry schedule.
pub mod centering {
    /// Delayed attempts after the immediate and next-frame attempts (ms).
    pub const RETRY_DELAYS_MS: [u64; 3] = [50, 150, 300];
    /// Hard cap on attempts for one navigation generation.
    pub const MAX_ATTEMPTS: u32 = 10;
}
