//! Root-level view composition

use iced::widget::{Space, button, column, container, row, stack, text};
use iced::{Alignment, Element, Font, Length};
use lucide_icons::Icon;

use crate::common::messages::Message;
use crate::domains::navigator::navigator_view;
use crate::infra::theme::{
    chrome_button_style, primary_button_style, secondary_text_style,
};
use crate::state::State;

const TIP: &str = "Tap a category to open it, swipe sideways to keep browsing.";

pub fn view(state: &State) -> Element<'_, Message> {
    let launcher = launcher(state);

    if state.navigator.is_open() {
        let overlay = navigator_view(&state.navigator).map(Message::Navigator);
        stack![launcher, overlay].into()
    } else {
        launcher
    }
}

fn launcher(state: &State) -> Element<'_, Message> {
    let heading = state.navigator.restaurant_name().unwrap_or("Menu");

    let last = match state.last_selection_label() {
        Some(label) => format!("Last pick: {label}"),
        None => "Nothing picked yet".to_string(),
    };

    let open = button(
        row![icon(Icon::Search), text("Open menu").size(18)]
            .spacing(10)
            .align_y(Alignment::Center),
    )
    .on_press(Message::OpenMenu)
    .padding([12.0, 24.0])
    .style(primary_button_style);

    let mut content = column![
        text(heading).size(34),
        text(last).size(16).style(secondary_text_style),
        Space::new().height(12.0),
        open,
    ]
    .spacing(12)
    .align_x(Alignment::Center);

    if state.show_tips {
        content = content.push(tips_banner());
    }

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .into()
}

fn tips_banner<'a>() -> Element<'a, Message> {
    let dismiss = button(icon(Icon::X))
        .on_press(Message::DismissTips)
        .padding(6)
        .style(chrome_button_style);

    container(
        row![
            text(TIP).size(14).style(secondary_text_style),
            dismiss
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    )
    .padding(12)
    .into()
}

fn icon<'a>(icon: Icon) -> iced::widget::Text<'a> {
    text(icon.unicode().to_string())
        .font(Font::with_name("lucide"))
        .size(18)
}
