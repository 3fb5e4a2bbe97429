//! Engine configuration.

pub mod minusation_config;

pub use minusation_config::MinusationConfig;
