use iced::widget::scrollable;

use super::centering::Generation;
use super::navigation::Selection;

#[derive(Debug, Clone)]
pub enum NavigatorMessage {
    // Lifecycle
    Open { initial_category: Option<String> },
    Close,

    // Navigation
    ItemPressed(String),
    Back,
    QueryChanged(String),

    // Scrolling
    ViewportChanged(scrollable::Viewport),
    CenteringRetry(Generation),
    Frame,
}

/// Notifications for the host, delivered in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigatorEvent {
    /// A dish was picked. Always followed by [`NavigatorEvent::Closed`].
    Selected(Selection),
    /// The overlay closed.
    Closed,
}
