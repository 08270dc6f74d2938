//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::policies::PriorityOrder;
use crate::error::PantryResult;
use crate::infrastructure::fs::expand_home;

use super::loader::{self, ConfigWarning};

pub const DEFAULT_PANTRY_FILE: &str = "pantry.csv";

/// Where the pantry lives between runs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilesConfig {
    /// Pantry CSV used by every subcommand (default: `./pantry.csv`)
    #[serde(default)]
    pub pantry: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingConfig {
    #[serde(default)]
    pub priority_order: PriorityOrder,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub const NAMES: &'static [&'static str] = &["auto", "always", "never"];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    pub const NAMES: &'static [&'static str] = &["quiet", "normal", "verbose", "debug"];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "quiet" => Some(Verbosity::Quiet),
            "normal" => Some(Verbosity::Normal),
            "verbose" => Some(Verbosity::Verbose),
            "debug" => Some(Verbosity::Debug),
            _ => None,
        }
    }

    /// Log filter used when neither `PANTRY_LOG` nor `-v` is given.
    pub fn log_level(self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::Debug => "debug",
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub files: FilesConfig,

    #[serde(default)]
    pub shopping: ShoppingConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> PantryResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> PantryResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve the config file hierarchy, then apply `PANTRY_*` overrides.
    pub fn discover(explicit: Option<&Path>) -> PantryResult<(Self, Vec<ConfigWarning>)> {
        let (config, warnings) = loader::load_layered(explicit, Path::new("."))?;
        Ok((loader::with_env_overrides(config), warnings))
    }

    /// Pantry file with `~` expanded.
    pub fn pantry_file(&self) -> PathBuf {
        match &self.files.pantry {
            Some(path) => expand_home(path),
            None => PathBuf::from(DEFAULT_PANTRY_FILE),
        }
    }
}
