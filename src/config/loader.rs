//! Configuration loading

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::policies::PriorityOrder;
use crate::error::{PantryError, PantryResult};

use super::env_validator::{levenshtein, EnvVarValidator};
use super::types::{ColorMode, Config, Verbosity};

pub const PROJECT_CONFIG_FILE: &str = "pantry.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> PantryResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| PantryError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Pick the first config file in the hierarchy and load it.
///
/// An explicit path must exist and parse. The project and user files are
/// optional, but a file that exists and is malformed is still an error.
pub fn load_layered(
    explicit: Option<&Path>,
    project_root: &Path,
) -> PantryResult<(Config, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        debug!(file = %path.display(), "loading config");
        return load_with_warnings(path);
    }

    let candidates = [
        Some(project_root.join(PROJECT_CONFIG_FILE)),
        dirs::config_dir().map(|dir| dir.join("pantry").join("config.toml")),
    ];
    for path in candidates.into_iter().flatten() {
        if path.is_file() {
            debug!(file = %path.display(), "loading config");
            return load_with_warnings(&path);
        }
    }

    Ok((Config::default(), Vec::new()))
}

/// Apply environment variable overrides (PANTRY_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env(config, |key| std::env::var(key).ok(), &mut std::io::stderr())
}

/// Overrides from an arbitrary environment; invalid values are reported to
/// `writer` and ignored.
pub fn apply_env<F, W>(mut config: Config, env: F, writer: &mut W) -> Config
where
    F: Fn(&str) -> Option<String>,
    W: Write,
{
    if let Some(file) = env("PANTRY_FILE").filter(|v| !v.trim().is_empty()) {
        config.files.pantry = Some(PathBuf::from(file));
    }

    if let Some(value) = env("PANTRY_PRIORITY_ORDER") {
        config.shopping.priority_order = EnvVarValidator::new(
            "PANTRY_PRIORITY_ORDER",
            PriorityOrder::NAMES,
        )
        .parse_with_writer(
            &value,
            |s| s.parse().ok(),
            config.shopping.priority_order,
            writer,
        );
    }

    if let Some(value) = env("PANTRY_VERBOSITY") {
        config.output.verbosity = EnvVarValidator::new("PANTRY_VERBOSITY", Verbosity::NAMES)
            .parse_with_writer(&value, Verbosity::parse, config.output.verbosity, writer);
    }

    if let Some(value) = env("PANTRY_COLOR") {
        config.output.color = EnvVarValidator::new("PANTRY_COLOR", ColorMode::NAMES)
            .parse_with_writer(&value, ColorMode::parse, config.output.color, writer);
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "files",
        "pantry",
        "shopping",
        "priority_order",
        "output",
        "verbosity",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}
