//! Pantry CLI - household inventory and monthly shopping lists
//!
//! Usage: pantry [COMMAND]
//!
//! Commands:
//!   show    Show the pantry grouped by category
//!   add     Add an item
//!   edit    Edit an item in place
//!   remove  Remove an item
//!   import  Replace the pantry with a CSV file
//!   export  Export the pantry to a date-stamped CSV
//!   needs   Write a monthly requirement sheet
//!   plan    Derive the shopping list from a requirement sheet
//!
//! Without a command, starts the interactive session.

mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;

use pantry::config::Config;
use pantry::infrastructure::logging;
use pantry::presentation::{Cli, Commands};

use crate::ui::context::UiContext;

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli) {
        ui::error::print_error(&err, json);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let (config, warnings) = Config::discover(cli.config.as_deref())?;
    let ui = UiContext::new(cli.json, cli.color, &config);
    logging::init(cli.verbose, config.output.verbosity, ui.color);
    commands::print_config_warnings(&warnings, &ui);

    match cli.command {
        None => commands::interactive::cmd_interactive(&config, &ui),
        Some(Commands::Show { pantry }) => commands::items::cmd_show(&pantry, &config, &ui),
        Some(Commands::Add {
            pantry,
            name,
            category,
            amount,
            unit,
        }) => commands::items::cmd_add(&pantry, &name, category, amount, unit, &config, &ui),
        Some(Commands::Edit {
            pantry,
            item,
            name,
            category,
            amount,
            unit,
        }) => {
            let update = commands::items::item_update(name, category, amount, unit);
            commands::items::cmd_edit(&pantry, &item, &update, &config, &ui)
        }
        Some(Commands::Remove { pantry, item }) => {
            commands::items::cmd_remove(&pantry, &item, &config, &ui)
        }
        Some(Commands::Import { source, pantry }) => {
            commands::items::cmd_import(&source, &pantry, &config, &ui)
        }
        Some(Commands::Export { pantry, output }) => {
            commands::items::cmd_export(&pantry, output, &config, &ui)
        }
        Some(Commands::Needs {
            pantry,
            output,
            force,
        }) => commands::plan::cmd_needs(&pantry, output, force, &config, &ui),
        Some(Commands::Plan {
            needs,
            output,
            print,
            priority_order,
        }) => commands::plan::cmd_plan(&needs, output, print, priority_order, &config, &ui),
    }
}
