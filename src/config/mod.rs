//! Configuration module for pantry
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (PANTRY_*)
//! 3. `--config <path>`, else project config (`./pantry.toml`)
//! 4. User config (`<config dir>/pantry/config.toml`)
//! 5. Built-in defaults (lowest priority)
//!
//! Only the first config file found is read; files are not merged.

mod env_validator;
mod loader;
mod types;

pub use env_validator::{levenshtein, EnvVarValidator};
pub use loader::{ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{
    ColorMode, Config, FilesConfig, OutputConfig, ShoppingConfig, Verbosity, DEFAULT_PANTRY_FILE,
};
