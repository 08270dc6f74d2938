//! Planning commands: write a requirement sheet, then derive the list from it.

use std::path::{Path, PathBuf};

use anyhow::Result;

use pantry::application::{file_names, PlanOptions};
use pantry::config::Config;
use pantry::presentation::{create_needs_use_case, create_plan_use_case, PantryArg};
use pantry::{PantryError, PriorityOrder};

use super::{pantry_path, print_success};
use crate::ui::context::UiContext;
use crate::ui::json;
use crate::ui::primitives::icon::Icon;
use crate::ui::views::requirements::render_requirements;
use crate::ui::views::shopping::{render_print_friendly, render_shopping_list};

pub fn cmd_needs(
    arg: &PantryArg,
    output: Option<PathBuf>,
    force: bool,
    config: &Config,
    ui: &UiContext,
) -> Result<()> {
    let path = pantry_path(arg, config);
    if !path.exists() {
        return Err(PantryError::EmptyPantry.into());
    }
    let output = output.unwrap_or_else(|| PathBuf::from(file_names::requirements_export_name()));

    let result = create_needs_use_case().execute(&path, &output, force)?;

    if ui.json {
        json::emit(serde_json::json!({
            "event": "needs",
            "file": result.path.display().to_string(),
            "items": result.sheet.entries(),
        }))?;
        return Ok(());
    }

    print!("{}", render_requirements(&result.sheet, ui.color, ui.unicode));
    println!();
    print_success(
        ui,
        &format!("Wrote monthly requirements to {}", result.path.display()),
    );
    println!(
        "  {} Fill in Monthly Need and Priority, then run: pantry plan --needs {}",
        Icon::Arrow.colored(ui.color, ui.unicode),
        result.path.display()
    );
    Ok(())
}

pub fn cmd_plan(
    needs: &Path,
    output: Option<PathBuf>,
    print: bool,
    priority_order: Option<PriorityOrder>,
    config: &Config,
    ui: &UiContext,
) -> Result<()> {
    let order = priority_order.unwrap_or(config.shopping.priority_order);
    let options = PlanOptions::new()
        .with_output(output)
        .with_priority_order(order);

    let result = create_plan_use_case().execute(needs, &options)?;

    if ui.json {
        json::emit(serde_json::json!({
            "event": "shopping_list",
            "priority_order": result.priority_order,
            "requirements": result.requirements,
            "stocked": result.stocked(),
            "items": result.list,
            "exported": result.exported.as_ref().map(|p| p.display().to_string()),
        }))?;
        return Ok(());
    }

    if print && !result.list.is_empty() {
        print!("{}", render_print_friendly(&result.list));
    } else {
        print!(
            "{}",
            render_shopping_list(&result.list, result.priority_order, ui.color, ui.unicode)
        );
    }

    if let Some(exported) = &result.exported {
        println!();
        print_success(
            ui,
            &format!(
                "Shopping list generated successfully! Saved to {}",
                exported.display()
            ),
        );
    }
    Ok(())
}
