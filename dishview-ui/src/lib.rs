//! Dishview menu library
//!
//! Modules backing the `dishview` binary in `src/main.rs`. The navigator
//! domain is usable on its own; the rest is application glue.

pub mod app;
pub mod common;
pub mod domains;
pub mod infra;
pub mod state;
pub mod subscriptions;
pub mod update;
pub mod view;
