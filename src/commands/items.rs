//! Pantry table commands: show, add, edit, remove, import, export.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use pantry::application::file_names;
use pantry::config::Config;
use pantry::presentation::PantryArg;
use pantry::{Category, CsvTables, ItemUpdate, Session, Unit};

use super::{load_pantry, pantry_path, print_success};
use crate::ui::context::UiContext;
use crate::ui::json;
use crate::ui::views::inventory::render_pantry;

fn open_session(tables: &CsvTables, path: &Path, config: &Config) -> Result<Session> {
    let pantry = load_pantry(tables, path)?;
    Ok(Session::new(config.shopping.priority_order).with_pantry(pantry))
}

pub fn cmd_show(arg: &PantryArg, config: &Config, ui: &UiContext) -> Result<()> {
    let tables = CsvTables::new();
    let path = pantry_path(arg, config);
    let pantry = load_pantry(&tables, &path)?;

    if ui.json {
        json::emit(serde_json::json!({
            "event": "pantry",
            "file": path.display().to_string(),
            "items": pantry.items(),
        }))?;
        return Ok(());
    }

    print!("{}", render_pantry(&pantry, ui.color, ui.unicode));
    Ok(())
}

pub fn cmd_add(
    arg: &PantryArg,
    name: &str,
    category: Category,
    amount: f64,
    unit: Unit,
    config: &Config,
    ui: &UiContext,
) -> Result<()> {
    let tables = CsvTables::new();
    let path = pantry_path(arg, config);
    let mut session = open_session(&tables, &path, config)?;

    let added = session.add_item(name, category, amount, unit)?.clone();
    session.export_pantry(&tables, &path)?;

    if ui.json {
        json::emit(serde_json::json!({ "event": "added", "item": added }))?;
    } else {
        print_success(ui, &format!("Added {} to pantry!", added.name));
    }
    Ok(())
}

/// Collect the edit flags; unset flags leave the field alone.
pub fn item_update(
    name: Option<String>,
    category: Option<Category>,
    amount: Option<f64>,
    unit: Option<Unit>,
) -> ItemUpdate {
    ItemUpdate {
        name,
        category,
        current_amount: amount,
        unit,
    }
}

pub fn cmd_edit(
    arg: &PantryArg,
    item: &str,
    update: &ItemUpdate,
    config: &Config,
    ui: &UiContext,
) -> Result<()> {
    if update.is_empty() {
        bail!("nothing to change: pass --name, --category, --amount or --unit");
    }

    let tables = CsvTables::new();
    let path = pantry_path(arg, config);
    let mut session = open_session(&tables, &path, config)?;

    let edited = session.edit_item(item, update)?.clone();
    session.export_pantry(&tables, &path)?;

    if ui.json {
        json::emit(serde_json::json!({ "event": "updated", "from": item, "item": edited }))?;
    } else {
        print_success(ui, &format!("Updated {}!", edited.name));
    }
    Ok(())
}

pub fn cmd_remove(arg: &PantryArg, item: &str, config: &Config, ui: &UiContext) -> Result<()> {
    let tables = CsvTables::new();
    let path = pantry_path(arg, config);
    let mut session = open_session(&tables, &path, config)?;

    let removed = session.remove_item(item)?;
    session.export_pantry(&tables, &path)?;

    if ui.json {
        json::emit(serde_json::json!({ "event": "removed", "item": removed }))?;
    } else {
        print_success(ui, &format!("Removed {} from pantry!", removed.name));
    }
    Ok(())
}

/// Validate `source` and make it the pantry. The pantry file is only written
/// once the whole source has been read.
pub fn cmd_import(source: &Path, arg: &PantryArg, config: &Config, ui: &UiContext) -> Result<()> {
    let tables = CsvTables::new();
    let path = pantry_path(arg, config);
    let mut session = Session::new(config.shopping.priority_order);

    let count = session.import_pantry(&tables, source)?;
    session.export_pantry(&tables, &path)?;

    if ui.json {
        json::emit(serde_json::json!({
            "event": "imported",
            "source": source.display().to_string(),
            "pantry": path.display().to_string(),
            "items": count,
        }))?;
    } else {
        print_success(
            ui,
            &format!("Pantry data imported successfully! ({} items)", count),
        );
    }
    Ok(())
}

pub fn cmd_export(
    arg: &PantryArg,
    output: Option<PathBuf>,
    config: &Config,
    ui: &UiContext,
) -> Result<()> {
    let tables = CsvTables::new();
    let path = pantry_path(arg, config);
    let session = open_session(&tables, &path, config)?;
    let output = output.unwrap_or_else(|| PathBuf::from(file_names::pantry_export_name()));

    session.export_pantry(&tables, &output)?;

    if ui.json {
        json::emit(serde_json::json!({
            "event": "exported",
            "file": output.display().to_string(),
            "items": session.pantry().len(),
        }))?;
    } else {
        print_success(
            ui,
            &format!(
                "Exported {} items to {}",
                session.pantry().len(),
                output.display()
            ),
        );
    }
    Ok(())
}
