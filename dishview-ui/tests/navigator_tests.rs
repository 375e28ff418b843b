//! Navigator state machine tests
//!
//! These drive `NavigatorState` through its public transitions against the
//! sample catalog and check the requested effects: loop layout, edge jumps,
//! selection and close ordering, back navigation, and reset on reopen.

use std::sync::Arc;

use dishview_model::{Catalog, MenuItem};
use dishview_ui::domains::navigator::edge::{
    EdgeCorrection, EdgeThresholds, ScrollMetrics, edge_correction,
};
use dishview_ui::domains::navigator::strip::Strip;
use dishview_ui::domains::navigator::{
    Effect, NavigatorEvent, NavigatorState, Orientation, Selection,
};
use dishview_ui::infra::config::NavigatorConfig;

fn navigator(orientation: Orientation) -> NavigatorState {
    NavigatorState::new(
        Arc::new(Catalog::sample()),
        orientation,
        NavigatorConfig::default(),
    )
}

fn events(effects: &[Effect]) -> Vec<NavigatorEvent> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::Emit(event) => Some(event.clone()),
            _ => None,
        })
        .collect()
}

fn items(ids: &[&str]) -> Vec<MenuItem> {
    ids.iter().map(|id| MenuItem::new(*id, *id)).collect()
}

#[test]
fn short_levels_render_once() {
    let two = items(&["a", "b"]);
    let strip = Strip::build(&two, None, 3);
    assert!(!strip.is_looped());
    let ids: Vec<_> = strip.rendered().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);

    // Three items is below the vertical threshold.
    let three = items(&["a", "b", "c"]);
    let strip = Strip::build(&three, None, 4);
    assert!(!strip.is_looped());
    assert_eq!(strip.rendered_len(), 3);
}

#[test]
fn eligible_levels_render_three_copies_in_order() {
    let three = items(&["a", "b", "c"]);
    let strip = Strip::build(&three, None, 3);

    assert!(strip.is_looped());
    assert_eq!(strip.rendered_len(), 9);
    let ids: Vec<_> = strip.rendered().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c", "a", "b", "c", "a", "b", "c"]);
}

#[test]
fn offset_zero_jumps_forward_one_copy() {
    let metrics = ScrollMetrics::new(0.0, 3000.0, 400.0);
    assert_eq!(
        edge_correction(metrics, EdgeThresholds::default()),
        Some(EdgeCorrection::Forward(1000.0))
    );
}

#[test]
fn max_offset_jumps_back_one_copy() {
    let metrics = ScrollMetrics::new(2600.0, 3000.0, 400.0);
    let corrected = edge_correction(metrics, EdgeThresholds::default())
        .map(EdgeCorrection::offset);
    assert_eq!(corrected, Some(metrics.max_offset() - metrics.one_copy()));
}

#[test]
fn middle_band_is_left_alone() {
    for offset in [401.0, 1000.0, 1500.0, 2099.0] {
        let metrics = ScrollMetrics::new(offset, 3000.0, 400.0);
        assert_eq!(
            edge_correction(metrics, EdgeThresholds::default()),
            None,
            "offset {offset}"
        );
    }
}

#[test]
fn selecting_a_dish_emits_selected_then_closed() {
    let mut nav = navigator(Orientation::Horizontal);
    nav.open(Some("burgers".into()));
    assert_eq!(nav.navigation().navigation_path(), ["root"]);
    assert_eq!(nav.navigation().current_level(), "burgers");

    let effects = nav.press_item("burger-classic");
    assert_eq!(
        events(&effects),
        vec![
            NavigatorEvent::Selected(Selection {
                item_id: "burger-classic".into(),
                path: vec!["root".into(), "burgers".into()],
            }),
            NavigatorEvent::Closed,
        ]
    );
    assert!(!nav.is_open());

    // Closing discarded the position; later presses do nothing.
    assert_eq!(nav.navigation().current_level(), "root");
    assert!(nav.press_item("burger-smash").is_empty());
    assert!(nav.press_item("burgers").is_empty());
    assert_eq!(nav.navigation().current_level(), "root");
}

#[test]
fn back_walks_up_one_level_at_a_time() {
    let mut nav = navigator(Orientation::Horizontal);
    nav.open(Some("drinks".into()));
    nav.press_item("soda");
    assert_eq!(nav.navigation().navigation_path(), ["root", "drinks"]);
    assert_eq!(nav.navigation().current_level(), "soda");

    nav.back();
    assert_eq!(nav.navigation().current_level(), "drinks");
    assert_eq!(nav.navigation().navigation_path(), ["root"]);

    nav.back();
    assert_eq!(nav.navigation().current_level(), "root");
    assert!(nav.navigation().navigation_path().is_empty());

    assert!(nav.back().is_empty());
    assert_eq!(nav.navigation().current_level(), "root");
}

#[test]
fn reopening_with_another_category_discards_history() {
    let mut nav = navigator(Orientation::Horizontal);
    nav.open(Some("drinks".into()));
    nav.press_item("soda");
    assert_eq!(events(&nav.close()), vec![NavigatorEvent::Closed]);

    nav.open(Some("desserts".into()));
    assert_eq!(nav.navigation().current_level(), "desserts");
    assert_eq!(nav.navigation().navigation_path(), ["root"]);

    // Changing the starting category while open also resets.
    nav.open(None);
    assert_eq!(nav.navigation().current_level(), "root");
    assert!(nav.navigation().navigation_path().is_empty());
}

#[test]
fn title_follows_the_current_level() {
    let mut nav = navigator(Orientation::Horizontal);
    nav.open(None);
    assert_eq!(nav.title(), "Dishview Diner");

    nav.press_item("drinks");
    assert_eq!(nav.title(), "Drinks");
    nav.press_item("soda");
    assert_eq!(nav.title(), "Sodas");
}

#[test]
fn loop_jump_echo_is_not_corrected_twice() {
    let mut nav = navigator(Orientation::Horizontal);
    nav.open(Some("burgers".into()));

    nav.viewport_changed(ScrollMetrics::new(1000.0, 3000.0, 400.0));
    let jump = nav.viewport_changed(ScrollMetrics::new(2200.0, 3000.0, 400.0));
    assert_eq!(jump, vec![Effect::ScrollTo(1200.0)]);

    let echo = nav.viewport_changed(ScrollMetrics::new(1200.0, 3000.0, 400.0));
    assert!(echo.is_empty());
}

#[test]
fn content_that_fits_is_never_corrected() {
    let mut nav = navigator(Orientation::Horizontal);
    nav.open(Some("burgers".into()));
    let effects = nav.viewport_changed(ScrollMetrics::new(0.0, 300.0, 400.0));
    assert!(effects.is_empty());
}

#[test]
fn short_levels_never_jump_even_at_offset_zero() {
    // soda holds two items, below the horizontal minimum of three.
    let mut nav = navigator(Orientation::Horizontal);
    assert_eq!(nav.open(Some("soda".into())), vec![Effect::ScrollTo(0.0)]);
    let effects = nav.viewport_changed(ScrollMetrics::new(0.0, 3000.0, 400.0));
    assert!(effects.is_empty());

    // drinks holds three items, below the vertical minimum of four.
    let mut nav = navigator(Orientation::Vertical);
    assert_eq!(nav.open(Some("drinks".into())), vec![Effect::ScrollTo(0.0)]);
    let effects = nav.viewport_changed(ScrollMetrics::new(0.0, 3000.0, 400.0));
    assert!(effects.is_empty());
}

#[test]
fn delayed_retry_centers_after_frame_retries_ran_out() {
    let mut nav = navigator(Orientation::Horizontal);
    nav.open(Some("burgers".into()));
    let generation = nav.centering().generation();

    // No layout report yet: every frame attempt comes back empty.
    let mut frames = 0;
    while nav.wants_frame() {
        assert!(nav.frame().is_empty());
        frames += 1;
        assert!(frames <= 20, "frame retries never stopped");
    }

    // Layout arrives late, inside the middle band.
    let late = nav.viewport_changed(ScrollMetrics::new(600.0, 2400.0, 500.0));
    assert!(late.is_empty());

    assert_eq!(
        nav.centering_retry(generation),
        vec![Effect::ScrollTo(800.0)]
    );
}
