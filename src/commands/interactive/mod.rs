//! Interactive command module
//!
//! A menu-driven session over an in-memory [`Session`]. The configured pantry
//! file is loaded at start and, if it changed, offered for saving on exit.

mod forms;
mod menu;

use anyhow::Result;
use is_terminal::IsTerminal;

use pantry::config::Config;
use pantry::{CsvTables, Session};

use super::load_pantry;
use crate::ui::context::UiContext;

pub fn cmd_interactive(config: &Config, ui: &UiContext) -> Result<()> {
    let tables = CsvTables::new();
    let pantry_file = config.pantry_file();

    if ui.json {
        let pantry = load_pantry(&tables, &pantry_file)?;
        crate::ui::json::emit(serde_json::json!({
            "event": "data",
            "command": "interactive",
            "pantry": pantry_file.display().to_string(),
            "items": pantry.len(),
            "priority_order": config.shopping.priority_order,
        }))?;
        return Ok(());
    }

    if !std::io::stdin().is_terminal() || !ui.caps.is_tty {
        println!("No command provided.");
        println!("Try: `pantry show` or `pantry --help`");
        return Ok(());
    }

    let pantry = load_pantry(&tables, &pantry_file)?;
    let mut session = Session::new(config.shopping.priority_order).with_pantry(pantry);

    print!(
        "{}",
        crate::ui::views::interactive::render_banner(ui.color, ui.unicode)
    );
    menu::run(&mut session, &tables, &pantry_file, ui)
}
