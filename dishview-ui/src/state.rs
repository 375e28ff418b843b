//! Application state for the menu host shell

use std::sync::Arc;

use chrono::Utc;
use dishview_model::Catalog;

use crate::domains::navigator::{NavigatorState, Orientation, Selection};
use crate::infra::config::NavigatorConfig;
use crate::infra::environment::{SharedEnvironment, SystemEnvironment};

#[derive(Debug)]
pub struct State {
    pub navigator: NavigatorState,

    /// Category the overlay opens at; `None` starts at the root.
    pub start_category: Option<String>,
    /// Most recent pick reported by the navigator.
    pub last_selection: Option<Selection>,

    pub environment: SharedEnvironment,
    /// Writable handle for the tips dismissal, absent in tests.
    pub system_environment: Option<Arc<SystemEnvironment>>,
    pub show_tips: bool,
}

impl State {
    pub fn new(
        catalog: Arc<Catalog>,
        orientation: Orientation,
        config: NavigatorConfig,
        environment: SharedEnvironment,
    ) -> Self {
        let show_tips = !environment.dismissal_active(Utc::now());
        Self {
            navigator: NavigatorState::new(catalog, orientation, config),
            start_category: None,
            last_selection: None,
            environment,
            system_environment: None,
            show_tips,
        }
    }

    pub fn with_start_category(mut self, category: Option<String>) -> Self {
        self.start_category = category;
        self
    }

    pub fn with_system_environment(
        mut self,
        system: Arc<SystemEnvironment>,
    ) -> Self {
        self.system_environment = Some(system);
        self
    }

    /// Label of the last selected item, looked up in the level it came from.
    pub fn last_selection_label(&self) -> Option<&str> {
        let selection = self.last_selection.as_ref()?;
        let levels = &self.navigator.catalog().levels;
        selection
            .path
            .iter()
            .rev()
            .find_map(|level| levels.find_in_level(level, &selection.item_id))
            .or_else(|| {
                levels.level_keys().find_map(|level| {
                    levels.find_in_level(level, &selection.item_id)
                })
            })
            .map(|item| item.label.as_str())
    }
}
