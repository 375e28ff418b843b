use std::path::PathBuf;
use std::sync::Arc;

use iced::Task;

use crate::common::messages::Message;
use crate::domains::navigator::Orientation;
use crate::infra::catalog::load_or_sample;
use crate::infra::config::NavigatorConfig;
use crate::infra::environment::{SharedEnvironment, SystemEnvironment};
use crate::state::State;

#[derive(Clone, Debug, Default)]
pub struct AppConfig {
    pub catalog_path: Option<PathBuf>,
    pub restaurant_name: Option<String>,
    pub start_category: Option<String>,
    pub orientation: Orientation,
    pub theme: Option<String>,
}

impl AppConfig {
    pub fn from_environment() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let orientation = match get("DISHVIEW_ORIENTATION") {
            Some(raw) => raw.parse().unwrap_or_else(|err| {
                log::warn!("{err}, using {}", Orientation::default());
                Orientation::default()
            }),
            None => Orientation::default(),
        };

        Self {
            catalog_path: get("DISHVIEW_CATALOG").map(PathBuf::from),
            restaurant_name: get("DISHVIEW_RESTAURANT"),
            start_category: get("DISHVIEW_START_CATEGORY"),
            orientation,
            theme: get("DISHVIEW_THEME"),
        }
    }
}

/// Boot logic shared by the runtime and tests: everything except the
/// system environment.
pub fn base_state(
    config: &AppConfig,
    navigator_config: NavigatorConfig,
    environment: SharedEnvironment,
) -> State {
    let catalog = Arc::new(load_or_sample(config.catalog_path.as_deref()));

    let mut state = State::new(
        catalog,
        config.orientation,
        navigator_config,
        environment,
    )
    .with_start_category(config.start_category.clone());

    state.navigator = state
        .navigator
        .with_restaurant_name(config.restaurant_name.clone());

    state
}

/// Boot logic for the running application.
pub fn runtime_boot(config: &AppConfig) -> (State, Task<Message>) {
    let system = Arc::new(SystemEnvironment::new(config.theme.as_deref()));
    let environment: SharedEnvironment = system.clone();

    let state = base_state(config, NavigatorConfig::load(), environment)
        .with_system_environment(system);

    log::info!(
        "Dishview booted: {} levels, {} layout",
        state.navigator.catalog().levels.len(),
        state.navigator.orientation()
    );

    (state, Task::none())
}
