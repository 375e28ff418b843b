pub mod catalog;
pub mod config;
pub mod constants;
pub mod environment;
pub mod theme;
