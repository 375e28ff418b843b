//! NavigatorState: the overlay's navigation, filter, and scroll bookkeeping.
//!
//! All transitions return [`Effect`]s instead of touching the runtime, so the
//! whole state machine can be driven from tests. `update.rs` turns effects
//! into iced tasks and host events.

use std::sync::Arc;
use std::time::Duration;

use dishview_model::{Catalog, CategoryStyle, MenuItem};
use iced::widget::Id as ScrollableId;
use log::{debug, info};

use super::centering::{Attempt, CenteringScheduler, Generation};
use super::edge::{EdgeThresholds, ScrollMetrics, edge_correction};
use super::messages::NavigatorEvent;
use super::navigation::{ClickOutcome, NavigationState};
use super::strip::Strip;
use super::title::{resolve_style, resolve_title};
use super::types::{NavigatorProps, Orientation};
use crate::infra::config::NavigatorConfig;

/// Viewport reports within this distance of a requested offset are echoes of
/// our own jump.
const ECHO_EPSILON: f32 = 0.5;

/// Side effects requested by a state transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Jump (never animate) the scroll position along the navigator's axis.
    ScrollTo(f32),
    /// Deliver a centering retry for `generation` after `delay`.
    ScheduleRetry {
        generation: Generation,
        delay: Duration,
    },
    /// Notify the host.
    Emit(NavigatorEvent),
}

#[derive(Debug, Clone)]
pub struct NavigatorState {
    catalog: Arc<Catalog>,
    restaurant_name: Option<String>,
    orientation: Orientation,
    config: NavigatorConfig,
    thresholds: EdgeThresholds,

    props: NavigatorProps,
    navigation: NavigationState,
    query: String,

    metrics: Option<ScrollMetrics>,
    pending_jump: Option<f32>,
    centering: CenteringScheduler,
    scrollable_id: ScrollableId,
}

impl NavigatorState {
    pub fn new(
        catalog: Arc<Catalog>,
        orientation: Orientation,
        config: NavigatorConfig,
    ) -> Self {
        let restaurant_name = catalog.restaurant.clone();
        Self {
            catalog,
            restaurant_name,
            orientation,
            thresholds: EdgeThresholds::from_config(&config),
            centering: CenteringScheduler::new(config.max_centering_attempts),
            config,
            props: NavigatorProps::closed(),
            navigation: NavigationState::root(),
            query: String::new(),
            metrics: None,
            pending_jump: None,
            scrollable_id: ScrollableId::unique(),
        }
    }

    /// Override the root heading supplied by the catalog.
    pub fn with_restaurant_name(mut self, name: Option<String>) -> Self {
        if name.is_some() {
            self.restaurant_name = name;
        }
        self
    }

    // ========== QUERIES ==========

    pub fn is_open(&self) -> bool {
        self.props.is_open
    }

    pub fn props(&self) -> &NavigatorProps {
        &self.props
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn restaurant_name(&self) -> Option<&str> {
        self.restaurant_name.as_deref()
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn scrollable_id(&self) -> &ScrollableId {
        &self.scrollable_id
    }

    pub fn centering(&self) -> &CenteringScheduler {
        &self.centering
    }

    /// True while a next-frame centering attempt is pending.
    pub fn wants_frame(&self) -> bool {
        self.is_open() && self.centering.awaiting_frame()
    }

    pub fn title(&self) -> &str {
        resolve_title(
            &self.catalog.levels,
            &self.navigation,
            self.restaurant_name.as_deref(),
        )
    }

    /// Items of the current level (root items for unknown levels).
    pub fn level_items(&self) -> &[MenuItem] {
        self.catalog
            .levels
            .items_or_root(self.navigation.current_level())
    }

    pub fn strip(&self) -> Strip<'_> {
        let query = self
            .orientation
            .supports_search()
            .then_some(self.query.as_str());
        Strip::build(
            self.level_items(),
            query,
            self.config.min_items(self.orientation),
        )
    }

    pub fn is_category(&self, item_id: &str) -> bool {
        self.catalog.levels.is_category(item_id)
    }

    pub fn style_for(&self, item_id: &str) -> Option<&CategoryStyle> {
        resolve_style(&self.catalog, item_id, self.navigation.current_level())
    }

    // ========== LIFECYCLE ==========

    /// Apply host props. Opening, or changing the starting category, resets
    /// navigation; closing discards it.
    pub fn apply_props(&mut self, props: NavigatorProps) -> Vec<Effect> {
        if props == self.props {
            return Vec::new();
        }
        let was_open = self.props.is_open;
        self.props = props;

        if self.props.is_open {
            self.reset()
        } else if was_open {
            self.discard();
            vec![Effect::Emit(NavigatorEvent::Closed)]
        } else {
            Vec::new()
        }
    }

    pub fn open(&mut self, initial_category: Option<String>) -> Vec<Effect> {
        self.apply_props(NavigatorProps::open(initial_category))
    }

    pub fn close(&mut self) -> Vec<Effect> {
        self.apply_props(NavigatorProps {
            is_open: false,
            initial_category: self.props.initial_category.clone(),
        })
    }

    fn reset(&mut self) -> Vec<Effect> {
        self.navigation = NavigationState::starting_at(
            &self.catalog.levels,
            self.props.initial_category.as_deref(),
        );
        self.query.clear();
        info!(
            "Navigator opened at {:?} ({})",
            self.navigation.current_level(),
            self.orientation
        );
        self.items_changed()
    }

    fn discard(&mut self) {
        self.navigation = NavigationState::root();
        self.query.clear();
        self.centering.cancel();
        self.metrics = None;
        self.pending_jump = None;
        debug!("Navigator closed");
    }

    // ========== TRANSITIONS ==========

    pub fn press_item(&mut self, item_id: &str) -> Vec<Effect> {
        if !self.is_open() {
            return Vec::new();
        }
        match self.navigation.click(&self.catalog.levels, item_id) {
            ClickOutcome::Descended => {
                self.query.clear();
                self.items_changed()
            }
            ClickOutcome::Selected(selection) => {
                info!(
                    "Selected {:?} via {:?}",
                    selection.item_id, selection.path
                );
                let mut effects =
                    vec![Effect::Emit(NavigatorEvent::Selected(selection))];
                effects.extend(self.close());
                effects
            }
        }
    }

    pub fn back(&mut self) -> Vec<Effect> {
        if !self.is_open() || !self.navigation.ascend() {
            return Vec::new();
        }
        self.query.clear();
        self.items_changed()
    }

    /// Update the search filter. Only the vertical layout filters.
    pub fn set_query(&mut self, query: String) -> Vec<Effect> {
        if !self.is_open()
            || !self.orientation.supports_search()
            || query == self.query
        {
            return Vec::new();
        }
        self.query = query;
        self.items_changed()
    }

    /// The level or its visible item set changed: forget the old geometry and
    /// start centering for the new one.
    fn items_changed(&mut self) -> Vec<Effect> {
        self.metrics = None;
        self.pending_jump = None;

        if !self.strip().is_looped() {
            self.centering.cancel();
            return vec![Effect::ScrollTo(0.0)];
        }

        let plan = self.centering.begin(self.config.retry_delays());
        let mut effects = self.run_attempt(plan.generation);
        effects.extend(plan.delays().map(|delay| Effect::ScheduleRetry {
            generation: plan.generation,
            delay,
        }));
        effects
    }

    // ========== SCROLLING ==========

    /// Handle a viewport report: record geometry and, on looped levels, jump
    /// one copy when near either end.
    pub fn viewport_changed(&mut self, metrics: ScrollMetrics) -> Vec<Effect> {
        if !self.is_open() {
            return Vec::new();
        }
        let previous = self.metrics.replace(metrics);

        let echo = self
            .pending_jump
            .take()
            .is_some_and(|target| (target - metrics.offset).abs() < ECHO_EPSILON);
        if echo {
            return Vec::new();
        }

        let moved = previous.is_some_and(|p| {
            (p.offset - metrics.offset).abs() >= ECHO_EPSILON
        });
        if moved {
            self.centering.note_user_scroll();
        }

        if !self.strip().is_looped() {
            return Vec::new();
        }

        match edge_correction(metrics, self.thresholds) {
            Some(correction) => {
                let target = correction.offset();
                debug!("Loop jump {:?} from {:.1}", correction, metrics.offset);
                self.pending_jump = Some(target);
                vec![Effect::ScrollTo(target)]
            }
            None => Vec::new(),
        }
    }

    /// Next-frame centering attempt.
    pub fn frame(&mut self) -> Vec<Effect> {
        let Some(generation) = self.centering.take_frame() else {
            return Vec::new();
        };
        if !self.is_open() {
            return Vec::new();
        }
        let attempt =
            self.centering.frame_attempt(generation, self.known_one_copy());
        self.apply_attempt(generation, attempt)
    }

    /// Delayed centering attempt scheduled for `generation`.
    pub fn centering_retry(&mut self, generation: Generation) -> Vec<Effect> {
        self.run_attempt(generation)
    }

    fn run_attempt(&mut self, generation: Generation) -> Vec<Effect> {
        if !self.is_open() {
            return Vec::new();
        }
        let attempt = self.centering.attempt(generation, self.known_one_copy());
        self.apply_attempt(generation, attempt)
    }

    fn known_one_copy(&self) -> Option<f32> {
        self.metrics.and_then(|m| m.known_one_copy())
    }

    fn apply_attempt(
        &mut self,
        generation: Generation,
        attempt: Attempt,
    ) -> Vec<Effect> {
        match attempt {
            Attempt::Center(target) => {
                debug!("Centering on middle copy at {target:.1}");
                self.pending_jump = Some(target);
                vec![Effect::ScrollTo(target)]
            }
            Attempt::Exhausted => {
                debug!("Frame retries ran out for generation {generation:?}");
                Vec::new()
            }
            Attempt::RetryNextFrame | Attempt::Settled | Attempt::Stale => {
                Vec::new()
            }
        }
    }
}
