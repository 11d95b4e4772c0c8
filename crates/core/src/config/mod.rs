//! Configuration management for buildvars

mod settings;
pub mod validation;

// Re-export main types
pub use settings::{CONFIG_FILE_NAMES, Config, STORE_ENV_VAR};
pub use validation::{ConfigValidator, MainConfigValidator};
