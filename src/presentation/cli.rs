//! CLI Argument Parsing
//!
//! Global flags (--json, --color, --verbose, --config) are inherited by all
//! subcommands. Running without a subcommand starts the interactive session.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::policies::PriorityOrder;
use crate::domain::value_objects::{Category, Unit};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Pantry - household inventory and monthly shopping lists
#[derive(Parser, Debug)]
#[command(name = "pantry")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'pantry' without arguments for the interactive session.")]
pub struct Cli {
    /// Emit NDJSON events on stdout
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ./pantry.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Which pantry file a command works on.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct PantryArg {
    /// Pantry CSV (default: from config, else ./pantry.csv)
    #[arg(long, value_name = "FILE")]
    pub pantry: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the pantry grouped by category
    Show {
        #[command(flatten)]
        pantry: PantryArg,
    },

    /// Add an item to the pantry
    Add {
        #[command(flatten)]
        pantry: PantryArg,

        /// Item name
        #[arg(long)]
        name: String,

        /// Category label or slug (e.g. "Dairy & Eggs" or dairy-eggs)
        #[arg(long, value_parser = parse_category)]
        category: Category,

        /// Amount currently on the shelf
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        amount: f64,

        /// Unit (pcs, kg, g, lb, oz, L, mL, pack, box)
        #[arg(long, value_parser = parse_unit, default_value = "pcs")]
        unit: Unit,
    },

    /// Edit an item in place
    Edit {
        #[command(flatten)]
        pantry: PantryArg,

        /// Item to edit
        #[arg(long, value_name = "NAME")]
        item: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        #[arg(long, value_parser = parse_category)]
        category: Option<Category>,

        #[arg(long, allow_negative_numbers = true)]
        amount: Option<f64>,

        #[arg(long, value_parser = parse_unit)]
        unit: Option<Unit>,
    },

    /// Remove an item
    Remove {
        #[command(flatten)]
        pantry: PantryArg,

        /// Item to remove
        #[arg(long, value_name = "NAME")]
        item: String,
    },

    /// Replace the pantry with a validated CSV file
    Import {
        /// CSV with Item, Category, Current Amount and Unit columns
        source: PathBuf,

        #[command(flatten)]
        pantry: PantryArg,
    },

    /// Export the pantry to a date-stamped CSV
    Export {
        #[command(flatten)]
        pantry: PantryArg,

        /// Output file (default: pantry_inventory_YYYYMMDD.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write a monthly requirement sheet to fill in
    Needs {
        #[command(flatten)]
        pantry: PantryArg,

        /// Output file (default: monthly_needs_YYYYMMDD.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite an existing sheet
        #[arg(short, long)]
        force: bool,
    },

    /// Derive the shopping list from a filled-in requirement sheet
    Plan {
        /// Requirement sheet CSV
        #[arg(long, value_name = "FILE")]
        needs: PathBuf,

        /// Also export the list to this CSV
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the Markdown shopping list instead of the table
        #[arg(long)]
        print: bool,

        /// How priorities are ranked (default: from config)
        #[arg(long, value_enum)]
        priority_order: Option<PriorityOrder>,
    },
}

fn parse_category(input: &str) -> Result<Category, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("category must not be blank".to_string());
    }
    Ok(Category::parse_known(trimmed).unwrap_or_else(|| Category::from_label(trimmed)))
}

fn parse_unit(input: &str) -> Result<Unit, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("unit must not be blank".to_string());
    }
    Ok(Unit::parse_known(trimmed).unwrap_or_else(|| Unit::from_label(trimmed)))
}
