use std::sync::Arc;

use iced::{Application, Font, Program as IcedProgram, Settings, Theme};

use crate::common::messages::Message;
use crate::infra::theme::DishviewTheme;
use crate::state::State;
use crate::{subscriptions, update, view};

pub mod bootstrap;

pub use bootstrap::AppConfig;

/// Build the Dishview application using the provided configuration.
pub fn application(
    config: AppConfig,
) -> Application<impl IcedProgram<State = State, Message = Message, Theme = Theme>>
{
    let config = Arc::new(config);

    let boot_config = Arc::clone(&config);
    iced::application(
        move || bootstrap::runtime_boot(&boot_config),
        update::update,
        view::view,
    )
    .settings(default_settings())
    .title("Dishview")
    .subscription(subscriptions::subscription)
    .font(lucide_icons::lucide_font_bytes())
    .theme(app_theme)
    .window(iced::window::Settings {
        size: iced::Size::new(420.0, 860.0),
        resizable: true,
        decorations: true,
        ..Default::default()
    })
}

fn default_settings() -> Settings {
    let mut settings = Settings::default();
    settings.id = Some("dishview".to_string());
    settings.antialiasing = true;
    settings.default_font = Font::DEFAULT;
    settings
}

fn app_theme(state: &State) -> Theme {
    DishviewTheme::theme(state.environment.prefers_dark())
}
