//! Command handlers for the `pantry` binary.
//!
//! Every file-based command reads the pantry, applies one change and writes
//! it back. A missing pantry file reads as an empty pantry.

pub mod interactive;
pub mod items;
pub mod plan;

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::debug;

use pantry::config::{Config, ConfigWarning};
use pantry::domain::ports::PantryStore;
use pantry::presentation::PantryArg;
use pantry::{CsvTables, Pantry};

use crate::ui::blocks::error::ErrorBlock;
use crate::ui::context::UiContext;

/// `--pantry`, else `[files] pantry`, else `./pantry.csv`.
pub(crate) fn pantry_path(arg: &PantryArg, config: &Config) -> PathBuf {
    match &arg.pantry {
        Some(path) => path.clone(),
        None => config.pantry_file(),
    }
}

pub(crate) fn load_pantry(tables: &CsvTables, path: &Path) -> Result<Pantry> {
    if !path.exists() {
        debug!(file = %path.display(), "no pantry file yet, starting empty");
        return Ok(Pantry::new());
    }
    Ok(tables.load(path)?)
}

pub fn print_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    for warning in warnings {
        let mut message = format!("unknown config key '{}'", warning.key);
        if let Some(suggestion) = &warning.suggestion {
            message.push_str(&format!(" (did you mean '{}'?)", suggestion));
        }

        if ui.json {
            crate::ui::json::emit_best_effort(serde_json::json!({
                "event": "warning",
                "message": message,
                "file": warning.file.display().to_string(),
                "line": warning.line,
            }));
            continue;
        }

        let mut block = ErrorBlock::warning(message).with_file(&warning.file);
        if let Some(line) = warning.line {
            block = block.with_row(line);
        }
        eprint!("{}", block.render(ui.color, ui.unicode));
    }
}

pub(crate) fn print_success(ui: &UiContext, message: &str) {
    println!(
        "{} {}",
        crate::ui::primitives::icon::Icon::Success.colored(ui.color, ui.unicode),
        message
    );
}
