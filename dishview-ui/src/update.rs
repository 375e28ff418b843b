//! Root-level update routing

use chrono::Utc;
use iced::Task;

use crate::common::messages::Message;
use crate::domains::navigator::{
    NavigatorEvent, NavigatorMessage, NavigatorUpdate, handle_navigator_message,
};
use crate::state::State;

pub fn update(state: &mut State, message: Message) -> Task<Message> {
    log::trace!("update::{}", message.name());

    match message {
        Message::Navigator(msg) => {
            let result = handle_navigator_message(&mut state.navigator, msg);
            process_navigator_update(state, result)
        }
        Message::OpenMenu => {
            let msg = NavigatorMessage::Open {
                initial_category: state.start_category.clone(),
            };
            let result = handle_navigator_message(&mut state.navigator, msg);
            process_navigator_update(state, result)
        }
        Message::DismissTips => {
            state.show_tips = false;
            let Some(system) = state.system_environment.clone() else {
                return Task::none();
            };
            Task::perform(
                async move {
                    system
                        .record_dismissal(Utc::now())
                        .map_err(|err| err.to_string())
                },
                Message::TipsDismissalSaved,
            )
        }
        Message::TipsDismissalSaved(result) => {
            if let Err(err) = result {
                log::warn!("Failed to save tips dismissal: {err}");
            }
            Task::none()
        }
    }
}

/// Apply host-side reactions to navigator events, in the order emitted.
fn process_navigator_update(
    state: &mut State,
    result: NavigatorUpdate,
) -> Task<Message> {
    for event in result.events {
        match event {
            NavigatorEvent::Selected(selection) => {
                log::info!(
                    "Dish selected: {} (path {})",
                    selection.item_id,
                    selection.path.join(" > ")
                );
                state.last_selection = Some(selection);
            }
            NavigatorEvent::Closed => {
                log::debug!("Menu overlay closed");
            }
        }
    }

    result.task.map(Message::Navigator)
}
