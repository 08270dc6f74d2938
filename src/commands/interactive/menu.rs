//! Main menu loop

use std::path::Path;

use anyhow::Result;
use dialoguer::{Confirm, Select};

use pantry::{CsvTables, PantryError, Session};

use super::forms;
use crate::ui::context::UiContext;
use crate::ui::theme::PantryTheme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuAction {
    ShowPantry,
    AddItem,
    EditItem,
    RemoveItem,
    ImportPantry,
    ExportPantry,
    SetRequirements,
    ResetRequirements,
    CalculateList,
    PrintList,
    ExportList,
    PriorityOrder,
    Quit,
}

impl MenuAction {
    pub(crate) const ALL: [MenuAction; 13] = [
        MenuAction::ShowPantry,
        MenuAction::AddItem,
        MenuAction::EditItem,
        MenuAction::RemoveItem,
        MenuAction::ImportPantry,
        MenuAction::ExportPantry,
        MenuAction::SetRequirements,
        MenuAction::ResetRequirements,
        MenuAction::CalculateList,
        MenuAction::PrintList,
        MenuAction::ExportList,
        MenuAction::PriorityOrder,
        MenuAction::Quit,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            MenuAction::ShowPantry => "Show pantry",
            MenuAction::AddItem => "Add item",
            MenuAction::EditItem => "Edit item",
            MenuAction::RemoveItem => "Remove item",
            MenuAction::ImportPantry => "Import pantry CSV",
            MenuAction::ExportPantry => "Export pantry CSV",
            MenuAction::SetRequirements => "Set monthly requirements",
            MenuAction::ResetRequirements => "Reset requirements from pantry",
            MenuAction::CalculateList => "Calculate shopping list",
            MenuAction::PrintList => "Print-friendly shopping list",
            MenuAction::ExportList => "Export shopping list CSV",
            MenuAction::PriorityOrder => "Change priority order",
            MenuAction::Quit => "Quit",
        }
    }
}

pub fn run(
    session: &mut Session,
    tables: &CsvTables,
    pantry_file: &Path,
    ui: &UiContext,
) -> Result<()> {
    let theme = PantryTheme::new(ui.unicode);
    let loaded = session.pantry().clone();
    let items: Vec<&str> = MenuAction::ALL.iter().map(|a| a.label()).collect();

    loop {
        println!();
        println!(
            "{}",
            crate::ui::views::interactive::render_status(session)
        );

        let selection = Select::with_theme(&theme)
            .with_prompt("What would you like to do?")
            .items(&items)
            .default(0)
            .interact_opt()?;

        let action = match selection {
            Some(index) => MenuAction::ALL[index],
            None => MenuAction::Quit,
        };
        if action == MenuAction::Quit {
            break;
        }

        if let Err(err) = dispatch(action, session, tables, &theme, ui) {
            report(err, ui);
        }
    }

    if session.pantry() != &loaded {
        let save = Confirm::with_theme(&theme)
            .with_prompt(format!("Save pantry changes to {}?", pantry_file.display()))
            .default(true)
            .interact()?;
        if save {
            session.export_pantry(tables, pantry_file)?;
            crate::commands::print_success(ui, &format!("Saved {}", pantry_file.display()));
        }
    }
    Ok(())
}

fn dispatch(
    action: MenuAction,
    session: &mut Session,
    tables: &CsvTables,
    theme: &PantryTheme,
    ui: &UiContext,
) -> Result<()> {
    match action {
        MenuAction::ShowPantry => {
            print!(
                "{}",
                crate::ui::views::inventory::render_pantry(session.pantry(), ui.color, ui.unicode)
            );
            Ok(())
        }
        MenuAction::AddItem => forms::add_item(session, theme, ui),
        MenuAction::EditItem => forms::edit_item(session, theme, ui),
        MenuAction::RemoveItem => forms::remove_item(session, theme, ui),
        MenuAction::ImportPantry => forms::import_pantry(session, tables, theme, ui),
        MenuAction::ExportPantry => forms::export_pantry(session, tables, theme, ui),
        MenuAction::SetRequirements => forms::set_requirements(session, theme, ui),
        MenuAction::ResetRequirements => forms::reset_requirements(session, theme, ui),
        MenuAction::CalculateList => forms::calculate_list(session, ui),
        MenuAction::PrintList => forms::print_list(session),
        MenuAction::ExportList => forms::export_list(session, tables, theme, ui),
        MenuAction::PriorityOrder => forms::priority_order(session, theme, ui),
        MenuAction::Quit => Ok(()),
    }
}

/// Failed actions are reported and the session carries on.
fn report(err: anyhow::Error, ui: &UiContext) {
    if matches!(err.downcast_ref::<PantryError>(), Some(PantryError::Aborted)) {
        return;
    }
    eprint!(
        "{}",
        crate::ui::error::format_error(&err, ui.color, ui.unicode)
    );
}
