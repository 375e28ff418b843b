use iced::{
    Task,
    widget::{operation::scroll_to, scrollable::AbsoluteOffset},
};

use super::edge::ScrollMetrics;
use super::messages::{NavigatorEvent, NavigatorMessage};
use super::state::{Effect, NavigatorState};
use super::types::Orientation;

/// Result of a navigator update: runtime work plus host notifications.
pub struct NavigatorUpdate {
    /// The task to execute (may produce more navigator messages)
    pub task: Task<NavigatorMessage>,
    /// Events for the host, in the order they happened
    pub events: Vec<NavigatorEvent>,
}

impl NavigatorUpdate {
    pub fn none() -> Self {
        Self {
            task: Task::none(),
            events: Vec::new(),
        }
    }
}

/// Handle navigator messages
pub fn handle_navigator_message(
    state: &mut NavigatorState,
    msg: NavigatorMessage,
) -> NavigatorUpdate {
    let effects = match msg {
        NavigatorMessage::Open { initial_category } => {
            state.open(initial_category)
        }
        NavigatorMessage::Close => state.close(),
        NavigatorMessage::ItemPressed(item_id) => state.press_item(&item_id),
        NavigatorMessage::Back => state.back(),
        NavigatorMessage::QueryChanged(query) => state.set_query(query),
        NavigatorMessage::ViewportChanged(viewport) => {
            let metrics =
                ScrollMetrics::from_viewport(&viewport, state.orientation());
            state.viewport_changed(metrics)
        }
        NavigatorMessage::CenteringRetry(generation) => {
            state.centering_retry(generation)
        }
        NavigatorMessage::Frame => state.frame(),
    };

    apply_effects(state, effects)
}

/// Turn effects into tasks and events, preserving their order.
pub fn apply_effects(
    state: &NavigatorState,
    effects: Vec<Effect>,
) -> NavigatorUpdate {
    if effects.is_empty() {
        return NavigatorUpdate::none();
    }

    let mut tasks = Vec::with_capacity(effects.len());
    let mut events = Vec::new();

    for effect in effects {
        match effect {
            Effect::ScrollTo(offset) => {
                tasks.push(jump_to(state, offset));
            }
            Effect::ScheduleRetry { generation, delay } => {
                tasks.push(Task::perform(
                    async move { tokio::time::sleep(delay).await },
                    move |_| NavigatorMessage::CenteringRetry(generation),
                ));
            }
            Effect::Emit(event) => events.push(event),
        }
    }

    NavigatorUpdate {
        task: Task::batch(tasks),
        events,
    }
}

/// Instant (non-animated) scroll along the navigator's axis.
fn jump_to(state: &NavigatorState, offset: f32) -> Task<NavigatorMessage> {
    let offset = match state.orientation() {
        Orientation::Horizontal => AbsoluteOffset { x: offset, y: 0.0 },
        Orientation::Vertical => AbsoluteOffset { x: 0.0, y: offset },
    };
    scroll_to::<NavigatorMessage>(state.scrollable_id().clone(), offset)
}
