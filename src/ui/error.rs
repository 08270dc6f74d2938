use pantry::PantryError;

use crate::ui::blocks::error::ErrorBlock;

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let message = format!("{:#}", err);
    match err.downcast_ref::<PantryError>() {
        Some(pantry_err) => {
            block_for(pantry_err, message).render(supports_color, supports_unicode)
        }
        None => ErrorBlock::new(message).render(supports_color, supports_unicode),
    }
}

fn block_for(err: &PantryError, message: String) -> ErrorBlock {
    let block = if err.is_warning() {
        ErrorBlock::warning(message)
    } else {
        ErrorBlock::new(message)
    };
    let block = match err.file() {
        Some(file) => block.with_file(file),
        None => block,
    };

    match err {
        PantryError::MissingField { .. } => {
            block.with_fix("Please fill in all required fields (*).")
        }
        PantryError::DuplicateItem { .. } => {
            block.with_fix("Edit the existing item, or choose a different name.")
        }
        PantryError::ItemNotFound { .. } => {
            block.with_fix("Names are case-sensitive; `pantry show` lists them.")
        }
        PantryError::InvalidAmount { .. } => block.with_fix("Use a number that is 0 or more."),
        PantryError::EmptyPantry => {
            block.with_fix("Add items with `pantry add` or `pantry import <FILE>` first.")
        }
        PantryError::NoRequirements => {
            block.with_fix("Create a sheet with `pantry needs`, fill in Monthly Need, then plan.")
        }
        PantryError::MissingColumns { required, .. } => block.with_fix(format!(
            "The header row must name these columns: {}",
            required.join(", ")
        )),
        PantryError::InvalidRow { row, .. } => block
            .with_row(*row)
            .with_fix("Fix the row and import again; nothing was changed."),
        PantryError::FileExists { .. } => {
            block.with_fix("Pass --force to replace it, or choose another --output.")
        }
        PantryError::InvalidConfig { .. } => {
            block.with_fix("See `[files]`, `[shopping]` and `[output]` in the README.")
        }
        PantryError::Csv { .. } | PantryError::Io(_) | PantryError::Aborted => block,
    }
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let kind = match err.downcast_ref::<PantryError>() {
            Some(e) if e.is_warning() => "warning",
            _ => "error",
        };
        crate::ui::json::emit_best_effort(serde_json::json!({
            "event": kind,
            "message": format!("{:#}", err),
        }));
        return;
    }

    let caps = crate::ui::terminal::detect_capabilities();
    eprint!(
        "{}",
        format_error(err, caps.supports_color, caps.supports_unicode)
    );
}
