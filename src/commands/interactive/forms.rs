//! Prompts behind each menu entry. Validation lives in the session; these
//! only collect input and report the outcome.

use std::path::PathBuf;

use anyhow::Result;
use dialoguer::{Confirm, Input, Select};

use pantry::application::file_names;
use pantry::{
    Category, CsvTables, ItemUpdate, PantryError, Priority, PriorityOrder, RequirementUpdate,
    Session, Unit,
};

use crate::commands::print_success;
use crate::ui::context::UiContext;
use crate::ui::theme::PantryTheme;
use crate::ui::views::requirements::render_requirements;
use crate::ui::views::shopping::{render_print_friendly, render_shopping_list};

pub fn add_item(session: &mut Session, theme: &PantryTheme, ui: &UiContext) -> Result<()> {
    let name: String = Input::with_theme(theme)
        .with_prompt("Item Name*")
        .allow_empty(true)
        .interact_text()?;
    let category = select_category(theme, None)?;
    let amount: f64 = Input::with_theme(theme)
        .with_prompt("Current Amount*")
        .default(0.0)
        .interact_text()?;
    let unit = select_unit(theme, None)?;

    let added = session.add_item(&name, category, amount, unit)?;
    let message = format!("Added {} to pantry!", added.name);
    print_success(ui, &message);
    Ok(())
}

pub fn edit_item(session: &mut Session, theme: &PantryTheme, ui: &UiContext) -> Result<()> {
    let name = pick_item(session, theme, "Item to edit")?;
    let current = session
        .pantry()
        .get(&name)
        .cloned()
        .ok_or_else(|| PantryError::ItemNotFound { name: name.clone() })?;

    let new_name: String = Input::with_theme(theme)
        .with_prompt("Item Name*")
        .default(current.name.clone())
        .allow_empty(true)
        .interact_text()?;
    let category = select_category(theme, Some(&current.category))?;
    let amount: f64 = Input::with_theme(theme)
        .with_prompt("Current Amount*")
        .default(current.current_amount.value())
        .interact_text()?;
    let unit = select_unit(theme, Some(&current.unit))?;

    let update = ItemUpdate {
        name: Some(new_name),
        category: Some(category),
        current_amount: Some(amount),
        unit: Some(unit),
    };
    let edited = session.edit_item(&name, &update)?;
    let message = format!("Updated {}!", edited.name);
    print_success(ui, &message);
    Ok(())
}

pub fn remove_item(session: &mut Session, theme: &PantryTheme, ui: &UiContext) -> Result<()> {
    let name = pick_item(session, theme, "Item to remove")?;
    let confirmed = Confirm::with_theme(theme)
        .with_prompt(format!("Remove {} from pantry?", name))
        .default(false)
        .interact()?;
    if !confirmed {
        return Ok(());
    }

    session.remove_item(&name)?;
    print_success(ui, &format!("Removed {} from pantry!", name));
    Ok(())
}

pub fn import_pantry(
    session: &mut Session,
    tables: &CsvTables,
    theme: &PantryTheme,
    ui: &UiContext,
) -> Result<()> {
    let path: String = Input::with_theme(theme)
        .with_prompt("CSV file to import")
        .interact_text()?;

    let count = session.import_pantry(tables, &PathBuf::from(path.trim()))?;
    print_success(
        ui,
        &format!("Pantry data imported successfully! ({} items)", count),
    );
    Ok(())
}

pub fn export_pantry(
    session: &Session,
    tables: &CsvTables,
    theme: &PantryTheme,
    ui: &UiContext,
) -> Result<()> {
    let path = output_path(theme, file_names::pantry_export_name())?;
    session.export_pantry(tables, &path)?;
    print_success(ui, &format!("Exported pantry to {}", path.display()));
    Ok(())
}

/// Edit monthly need, priority and unit row by row until "Done".
pub fn set_requirements(session: &mut Session, theme: &PantryTheme, ui: &UiContext) -> Result<()> {
    session.open_requirements()?;

    loop {
        let Some(sheet) = session.requirements() else {
            return Err(PantryError::NoRequirements.into());
        };
        print!("{}", render_requirements(sheet, ui.color, ui.unicode));

        let mut rows: Vec<String> = sheet
            .iter()
            .map(|e| {
                format!(
                    "{} (need {} {}, {})",
                    e.name, e.monthly_need, e.unit, e.priority
                )
            })
            .collect();
        rows.push("Done".to_string());

        let selection = Select::with_theme(theme)
            .with_prompt("Requirement to edit")
            .items(&rows)
            .default(0)
            .interact_opt()?;
        let entry = match selection {
            Some(index) if index < sheet.len() => sheet.entries()[index].clone(),
            _ => return Ok(()),
        };

        let need: f64 = Input::with_theme(theme)
            .with_prompt(format!("Monthly Need ({})", entry.unit))
            .default(entry.monthly_need.value())
            .interact_text()?;
        let priority = select_priority(theme, entry.priority)?;
        let unit = select_unit(theme, Some(&entry.unit))?;

        let update = RequirementUpdate::new()
            .with_monthly_need(need)
            .with_priority(priority)
            .with_unit(unit);
        if let Err(err) = session.set_requirement(&entry.name, &update) {
            eprint!(
                "{}",
                crate::ui::error::format_error(&err.into(), ui.color, ui.unicode)
            );
        }
    }
}

pub fn reset_requirements(
    session: &mut Session,
    theme: &PantryTheme,
    ui: &UiContext,
) -> Result<()> {
    if session.requirements().is_some() {
        let confirmed = Confirm::with_theme(theme)
            .with_prompt("Discard the current requirements and copy the pantry again?")
            .default(false)
            .interact()?;
        if !confirmed {
            return Ok(());
        }
    }

    let rows = session.reset_requirements()?.len();
    print_success(ui, &format!("Requirements reset from pantry ({} items)", rows));
    Ok(())
}

pub fn calculate_list(session: &mut Session, ui: &UiContext) -> Result<()> {
    let order = session.priority_order();
    let list = session.calculate_shopping_list()?;
    print!("{}", render_shopping_list(list, order, ui.color, ui.unicode));
    Ok(())
}

pub fn print_list(session: &Session) -> Result<()> {
    let list = session
        .shopping_list()
        .ok_or(PantryError::NoRequirements)?;
    if list.is_empty() {
        println!("No items needed for shopping this month!");
    } else {
        print!("{}", render_print_friendly(list));
    }
    Ok(())
}

pub fn export_list(
    session: &Session,
    tables: &CsvTables,
    theme: &PantryTheme,
    ui: &UiContext,
) -> Result<()> {
    if session.shopping_list().is_none() {
        return Err(PantryError::NoRequirements.into());
    }
    let path = output_path(theme, file_names::shopping_list_export_name())?;
    session.export_shopping_list(tables, &path)?;
    print_success(
        ui,
        &format!(
            "Shopping list generated successfully! Saved to {}",
            path.display()
        ),
    );
    Ok(())
}

pub fn priority_order(session: &mut Session, theme: &PantryTheme, ui: &UiContext) -> Result<()> {
    let options = [
        "label     High, Low, Medium",
        "severity  High, Medium, Low",
    ];
    let current = match session.priority_order() {
        PriorityOrder::Label => 0,
        PriorityOrder::Severity => 1,
    };
    let Some(index) = Select::with_theme(theme)
        .with_prompt("Sort shopping list priorities by")
        .items(&options)
        .default(current)
        .interact_opt()?
    else {
        return Err(PantryError::Aborted.into());
    };

    let order = if index == 1 {
        PriorityOrder::Severity
    } else {
        PriorityOrder::Label
    };
    session.set_priority_order(order);
    print_success(ui, &format!("Priority order set to {}", order));
    Ok(())
}

fn pick_item(session: &Session, theme: &PantryTheme, prompt: &str) -> Result<String> {
    let names: Vec<String> = session
        .pantry()
        .names()
        .into_iter()
        .map(str::to_string)
        .collect();
    if names.is_empty() {
        return Err(PantryError::EmptyPantry.into());
    }

    let index = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(&names)
        .default(0)
        .interact_opt()?
        .ok_or(PantryError::Aborted)?;
    Ok(names[index].clone())
}

fn output_path(theme: &PantryTheme, default: String) -> Result<PathBuf> {
    let path: String = Input::with_theme(theme)
        .with_prompt("Save as")
        .default(default)
        .interact_text()?;
    Ok(PathBuf::from(path.trim()))
}

/// Offered choices, with `current` appended when it is not one of them.
fn choices<T: Clone + PartialEq>(known: &[T], current: Option<&T>) -> (Vec<T>, usize) {
    let mut options = known.to_vec();
    let index = match current {
        Some(value) => match options.iter().position(|o| o == value) {
            Some(i) => i,
            None => {
                options.push(value.clone());
                options.len() - 1
            }
        },
        None => 0,
    };
    (options, index)
}

fn select_category(theme: &PantryTheme, current: Option<&Category>) -> Result<Category> {
    let (options, default) = choices(&Category::ALL, current);
    let labels: Vec<&str> = options.iter().map(|c| c.label()).collect();
    let index = Select::with_theme(theme)
        .with_prompt("Category*")
        .items(&labels)
        .default(default)
        .interact_opt()?
        .ok_or(PantryError::Aborted)?;
    Ok(options[index].clone())
}

fn select_unit(theme: &PantryTheme, current: Option<&Unit>) -> Result<Unit> {
    let (options, default) = choices(&Unit::ALL, current);
    let labels: Vec<&str> = options.iter().map(|u| u.label()).collect();
    let index = Select::with_theme(theme)
        .with_prompt("Unit*")
        .items(&labels)
        .default(default)
        .interact_opt()?
        .ok_or(PantryError::Aborted)?;
    Ok(options[index].clone())
}

fn select_priority(theme: &PantryTheme, current: Priority) -> Result<Priority> {
    let labels: Vec<&str> = Priority::ALL.iter().map(|p| p.label()).collect();
    let index = Select::with_theme(theme)
        .with_prompt("Priority")
        .items(&labels)
        .default(current.position())
        .interact_opt()?
        .ok_or(PantryError::Aborted)?;
    Ok(Priority::ALL[index])
}
