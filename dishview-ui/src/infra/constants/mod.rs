//! Constants module for centralized configuration values

pub mod carousel;
pub mod layout;
