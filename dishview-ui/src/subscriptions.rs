//! Root-level subscription composition

use iced::Subscription;
use iced::event::{self, Event as RuntimeEvent, Status as EventStatus};
use iced::keyboard::{self, Key, key::Named};

use crate::common::messages::Message;
use crate::domains::navigator::NavigatorMessage;
use crate::state::State;

pub fn subscription(state: &State) -> Subscription<Message> {
    let mut subscriptions = vec![];

    if state.navigator.is_open() {
        subscriptions.push(event::listen_with(overlay_key_handler));
    }

    // Next-frame centering attempt
    if state.navigator.wants_frame() {
        subscriptions.push(
            iced::window::frames()
                .map(|_| Message::Navigator(NavigatorMessage::Frame)),
        );
    }

    Subscription::batch(subscriptions)
}

fn overlay_key_handler(
    event: RuntimeEvent,
    status: EventStatus,
    _window: iced::window::Id,
) -> Option<Message> {
    // Let the search field keep its own Backspace
    if status == EventStatus::Captured {
        return None;
    }

    let RuntimeEvent::Keyboard(keyboard::Event::KeyPressed {
        key, modifiers, ..
    }) = event
    else {
        return None;
    };
    if modifiers.control() || modifiers.alt() || modifiers.logo() {
        return None;
    }

    match key {
        Key::Named(Named::Escape) => {
            Some(Message::Navigator(NavigatorMessage::Close))
        }
        Key::Named(Named::Backspace) => {
            Some(Message::Navigator(NavigatorMessage::Back))
        }
        _ => None,
    }
}
