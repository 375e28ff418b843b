//! Edge re-centering for looped strips.
//!
//! When the viewport drifts into the leading part of the first copy, or near
//! the end of the third, it is moved by exactly one copy so the same items
//! stay under the user's finger. The jump must be applied without animation.

use iced::widget::scrollable;

use super::types::Orientation;
use crate::infra::config::NavigatorConfig;
use crate::infra::constants::carousel::eligibility::COPIES;

/// Scroll geometry along the navigator's axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    /// Current scroll position.
    pub offset: f32,
    /// Full scrollable extent (all copies).
    pub total: f32,
    /// Visible extent.
    pub viewport: f32,
}

impl ScrollMetrics {
    pub fn new(offset: f32, total: f32, viewport: f32) -> Self {
        Self {
            offset,
            total,
            viewport,
        }
    }

    /// Read the metrics for `orientation`'s axis from an iced viewport report.
    pub fn from_viewport(
        viewport: &scrollable::Viewport,
        orientation: Orientation,
    ) -> Self {
        let offset = viewport.absolute_offset();
        let bounds = viewport.bounds();
        let content = viewport.content_bounds();
        match orientation {
            Orientation::Horizontal => {
                Self::new(offset.x, content.width, bounds.width)
            }
            Orientation::Vertical => {
                Self::new(offset.y, content.height, bounds.height)
            }
        }
    }

    /// Extent of one copy of the item list.
    pub fn one_copy(&self) -> f32 {
        self.total / COPIES as f32
    }

    /// One copy's extent when it is a positive, finite size.
    pub fn known_one_copy(&self) -> Option<f32> {
        let one_copy = self.one_copy();
        (one_copy.is_finite() && one_copy > 0.0).then_some(one_copy)
    }

    pub fn max_offset(&self) -> f32 {
        (self.total - self.viewport).max(0.0)
    }
}

/// Edge bands in units of one copy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeThresholds {
    pub leading_fraction: f32,
    pub trailing_fraction: f32,
    pub trailing_copies: f32,
}

impl EdgeThresholds {
    pub fn from_config(config: &NavigatorConfig) -> Self {
        Self {
            leading_fraction: config.leading_fraction,
            trailing_fraction: config.trailing_fraction,
            trailing_copies: config.trailing_copies,
        }
    }
}

impl Default for EdgeThresholds {
    fn default() -> Self {
        Self::from_config(&NavigatorConfig::default())
    }
}

/// Direction of a loop jump.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EdgeCorrection {
    /// Near the start: moved one copy forward.
    Forward(f32),
    /// Near the end: moved one copy back.
    Backward(f32),
}

impl EdgeCorrection {
    pub fn offset(self) -> f32 {
        match self {
            EdgeCorrection::Forward(offset) | EdgeCorrection::Backward(offset) => {
                offset
            }
        }
    }
}

/// The corrected offset for `metrics`, or `None` inside the no-op band.
///
/// Returns `None` when the extent is unknown or the content does not overflow
/// the viewport, since nothing can scroll then.
pub fn edge_correction(
    metrics: ScrollMetrics,
    thresholds: EdgeThresholds,
) -> Option<EdgeCorrection> {
    let one_copy = metrics.known_one_copy()?;
    if !metrics.offset.is_finite() || metrics.total <= metrics.viewport {
        return None;
    }

    let offset = metrics.offset;
    let max_offset = metrics.max_offset();

    if offset <= one_copy * thresholds.leading_fraction {
        Some(EdgeCorrection::Forward(offset + one_copy))
    } else if offset >= max_offset - one_copy * thresholds.trailing_fraction
        || offset >= one_copy * thresholds.trailing_copies
    {
        Some(EdgeCorrection::Backward(offset - one_copy))
    } else {
        None
    }
}
