//! View builder for the navigator overlay
//!
//! Cards carry their gap as trailing padding instead of row/column spacing, and
//! each grid copy starts on its own row, so the rendered extent is exactly
//! three times one copy and a loop jump lands on the same pixel of the
//! neighbouring copy.

use dishview_model::MenuItem;
use iced::{
    Alignment, Element, Font, Length, Padding,
    widget::{
        Space, button, column, container, row, scrollable, text, text_input,
    },
};
use lucide_icons::Icon;

use super::messages::NavigatorMessage;
use super::state::NavigatorState;
use super::types::Orientation;
use crate::infra::constants::layout::{grid, overlay, strip};
use crate::infra::theme::{
    CardAccent, DishviewTheme, card_style, chrome_button_style, overlay_style,
    search_style,
};

/// Full-screen overlay while open, nothing while closed.
pub fn navigator_view(state: &NavigatorState) -> Element<'_, NavigatorMessage> {
    if !state.is_open() {
        return Space::new().into();
    }

    let body = match state.orientation() {
        Orientation::Horizontal => strip_view(state),
        Orientation::Vertical => grid_view(state),
    };

    container(column![header(state), body].spacing(16))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(overlay::PADDING)
        .style(overlay_style)
        .into()
}

fn header(state: &NavigatorState) -> Element<'_, NavigatorMessage> {
    let back = button(icon(Icon::ChevronLeft))
        .on_press_maybe(
            state
                .navigation()
                .can_ascend()
                .then_some(NavigatorMessage::Back),
        )
        .padding(10)
        .style(chrome_button_style);

    let close = button(icon(Icon::X))
        .on_press(NavigatorMessage::Close)
        .padding(10)
        .style(chrome_button_style);

    row![
        back,
        text(state.title())
            .size(overlay::TITLE_SIZE)
            .color(DishviewTheme::TEXT_PRIMARY),
        Space::new().width(Length::Fill),
        close,
    ]
    .spacing(16)
    .align_y(Alignment::Center)
    .height(Length::Fixed(overlay::HEADER_HEIGHT))
    .into()
}

fn strip_view(state: &NavigatorState) -> Element<'_, NavigatorMessage> {
    let strip_items = state.strip();
    if strip_items.is_empty() {
        return empty_level();
    }

    let cards = strip_items.rendered().map(|item| {
        container(card(
            state,
            item,
            Length::Fixed(strip::CARD_WIDTH),
            strip::CARD_HEIGHT,
        ))
        .padding(Padding {
            right: strip::CARD_SPACING,
            ..Padding::ZERO
        })
        .into()
    });

    let content = row(cards).align_y(Alignment::Center);

    let scroll = scrollable(content)
        .id(state.scrollable_id().clone())
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new().width(0).scroller_width(0),
        ))
        .on_scroll(NavigatorMessage::ViewportChanged)
        .width(Length::Fill);

    container(scroll)
        .height(Length::Fill)
        .align_y(Alignment::Center)
        .into()
}

fn grid_view(state: &NavigatorState) -> Element<'_, NavigatorMessage> {
    let search = text_input("Search dishes", state.query())
        .on_input(NavigatorMessage::QueryChanged)
        .padding(10)
        .size(16)
        .style(search_style);

    let strip_items = state.strip();
    if strip_items.is_empty() {
        return column![search, empty_level()].spacing(16).into();
    }

    let rows = strip_items.grid_rows(grid::COLUMNS).into_iter().map(|cells| {
        let mut row_content = row![].spacing(grid::COLUMN_SPACING);
        for cell in cells {
            row_content = row_content.push(match cell {
                Some(item) => card(
                    state,
                    item,
                    Length::FillPortion(1),
                    grid::CELL_HEIGHT,
                ),
                None => Space::new().width(Length::FillPortion(1)).into(),
            });
        }
        container(row_content)
            .padding(Padding {
                bottom: grid::ROW_SPACING,
                ..Padding::ZERO
            })
            .into()
    });

    let scroll = scrollable(column(rows))
        .id(state.scrollable_id().clone())
        .direction(scrollable::Direction::Vertical(
            scrollable::Scrollbar::new().width(0).scroller_width(0),
        ))
        .on_scroll(NavigatorMessage::ViewportChanged)
        .height(Length::Fill);

    column![search, scroll].spacing(16).into()
}

fn card<'a>(
    state: &'a NavigatorState,
    item: &'a MenuItem,
    width: Length,
    height: f32,
) -> Element<'a, NavigatorMessage> {
    let is_category = state.is_category(&item.id);
    let accent = CardAccent::from_style(state.style_for(&item.id));

    let mut content = column![].spacing(6).align_x(Alignment::Center);

    if let Some(glyph) = item.icon.as_deref() {
        content = content.push(text(glyph).size(overlay::ICON_SIZE));
    }
    content = content.push(
        text(item.label.as_str())
            .size(overlay::ITEM_TITLE_SIZE)
            .color(DishviewTheme::TEXT_PRIMARY),
    );
    if let Some(price) = item.price.as_deref() {
        content = content.push(
            text(price)
                .size(overlay::ITEM_DETAIL_SIZE)
                .color(DishviewTheme::ACCENT),
        );
    }
    if let Some(description) = item.description.as_deref() {
        content = content.push(
            text(description)
                .size(overlay::ITEM_DETAIL_SIZE)
                .color(DishviewTheme::TEXT_SECONDARY),
        );
    }
    if is_category {
        content = content.push(
            icon(Icon::ChevronRight).color(DishviewTheme::TEXT_DIMMED),
        );
    }

    button(
        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Alignment::Center)
            .align_y(Alignment::Center),
    )
    .on_press(NavigatorMessage::ItemPressed(item.id.clone()))
    .width(width)
    .height(Length::Fixed(height))
    .padding(12)
    .style(card_style(accent))
    .into()
}

fn empty_level<'a>() -> Element<'a, NavigatorMessage> {
    container(
        text("Nothing here yet")
            .size(overlay::ITEM_TITLE_SIZE)
            .color(DishviewTheme::TEXT_DIMMED),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Alignment::Center)
    .align_y(Alignment::Center)
    .into()
}

fn lucide_font() -> Font {
    Font::with_name("lucide")
}

fn icon<'a>(icon: Icon) -> iced::widget::Text<'a> {
    text(icon.unicode().to_string()).font(lucide_font()).size(18)
}
