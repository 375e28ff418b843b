//! Domain modules for the Dishview menu

pub mod navigator;
