//! Host shell tests
//!
//! Exercise configuration parsing, catalog loading with fallback, and the
//! root update loop reacting to navigator events.

use std::collections::HashMap;
use std::io::Write;
use std::sync::Arc;

use chrono::{Duration, Utc};
use dishview_ui::app::AppConfig;
use dishview_ui::app::bootstrap::base_state;
use dishview_ui::common::messages::Message;
use dishview_ui::domains::navigator::{NavigatorMessage, Orientation};
use dishview_ui::infra::catalog::{load_catalog, load_or_sample};
use dishview_ui::infra::config::NavigatorConfig;
use dishview_ui::infra::environment::{FixedEnvironment, SharedEnvironment};
use dishview_ui::state::State;
use dishview_ui::update::update;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

fn host(config: &AppConfig, environment: FixedEnvironment) -> State {
    let environment: SharedEnvironment = Arc::new(environment);
    base_state(config, NavigatorConfig::default(), environment)
}

#[test]
fn config_reads_dishview_variables() {
    let config = AppConfig::from_lookup(lookup(&[
        ("DISHVIEW_RESTAURANT", "Harbor Grill"),
        ("DISHVIEW_START_CATEGORY", "drinks"),
        ("DISHVIEW_ORIENTATION", "Grid"),
        ("DISHVIEW_THEME", "light"),
        ("DISHVIEW_CATALOG", "  "),
    ]));

    assert_eq!(config.restaurant_name.as_deref(), Some("Harbor Grill"));
    assert_eq!(config.start_category.as_deref(), Some("drinks"));
    assert_eq!(config.orientation, Orientation::Vertical);
    assert_eq!(config.theme.as_deref(), Some("light"));
    assert!(config.catalog_path.is_none());
}

#[test]
fn unknown_orientation_falls_back_to_horizontal() {
    let config =
        AppConfig::from_lookup(lookup(&[("DISHVIEW_ORIENTATION", "diagonal")]));
    assert_eq!(config.orientation, Orientation::Horizontal);
}

#[test]
fn catalog_file_is_loaded() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "restaurant": "Harbor Grill",
             "levels": {{ "root": [{{ "id": "cod", "label": "Cod" }}] }} }}"#
    )
    .unwrap();

    let catalog = load_catalog(file.path()).unwrap();
    assert_eq!(catalog.restaurant.as_deref(), Some("Harbor Grill"));
    assert_eq!(catalog.levels.root().len(), 1);
}

#[test]
fn broken_catalog_falls_back_to_sample() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "levels": {{ "fish": [] }} }}"#).unwrap();

    assert!(load_catalog(file.path()).is_err());
    let catalog = load_or_sample(Some(file.path()));
    assert_eq!(catalog.restaurant.as_deref(), Some("Dishview Diner"));

    let missing = file.path().with_extension("missing");
    assert!(load_or_sample(Some(&missing)).levels.contains_level("burgers"));
}

#[test]
fn selection_is_recorded_and_overlay_closes() {
    let config = AppConfig {
        start_category: Some("burgers".into()),
        ..AppConfig::default()
    };
    let mut state = host(&config, FixedEnvironment::default());

    let _ = update(&mut state, Message::OpenMenu);
    assert!(state.navigator.is_open());
    assert_eq!(state.navigator.navigation().current_level(), "burgers");

    let _ = update(
        &mut state,
        Message::Navigator(NavigatorMessage::ItemPressed(
            "burger-smash".into(),
        )),
    );

    assert!(!state.navigator.is_open());
    let selection = state.last_selection.as_ref().unwrap();
    assert_eq!(selection.item_id, "burger-smash");
    assert_eq!(selection.path, vec!["root", "burgers"]);
    assert_eq!(state.last_selection_label(), Some("Double Smash"));
}

#[test]
fn restaurant_override_replaces_catalog_name() {
    let config = AppConfig {
        restaurant_name: Some("Harbor Grill".into()),
        ..AppConfig::default()
    };
    let mut state = host(&config, FixedEnvironment::default());
    let _ = update(&mut state, Message::OpenMenu);
    assert_eq!(state.navigator.title(), "Harbor Grill");
}

#[test]
fn tips_banner_respects_recent_dismissal() {
    let config = AppConfig::default();

    let fresh = host(&config, FixedEnvironment::default());
    assert!(fresh.show_tips);

    let dismissed = host(
        &config,
        FixedEnvironment {
            dark: true,
            dismissed_at: Some(Utc::now() - Duration::hours(3)),
        },
    );
    assert!(!dismissed.show_tips);

    let mut state = fresh;
    let _ = update(&mut state, Message::DismissTips);
    assert!(!state.show_tips);
}
