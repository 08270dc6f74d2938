//! CSV Table Repository
//!
//! Implements the table ports on top of the `csv` crate. Reading is
//! all-or-nothing: a file either yields a complete, validated table or an
//! error naming the file (and row, where there is one).

mod columns;
mod pantry;
mod requirements;
mod shopping_list;

use std::path::Path;

use crate::domain::entities::{Pantry, RequirementSheet, ShoppingList};
use crate::domain::ports::{PantryStore, RequirementStore, ShoppingListSink};
use crate::error::PantryResult;
use crate::infrastructure::fs::LocalFs;

pub use columns::PANTRY_COLUMNS;
pub use pantry::{read_pantry, write_pantry};
pub use requirements::{read_requirements, write_requirements};
pub use shopping_list::write_shopping_list;

/// CSV files on the local disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvTables {
    fs: LocalFs,
}

impl CsvTables {
    pub fn new() -> Self {
        Self { fs: LocalFs::new() }
    }
}

impl PantryStore for CsvTables {
    fn load(&self, path: &Path) -> PantryResult<Pantry> {
        read_pantry(self.fs.open(path)?, path)
    }

    fn save(&self, path: &Path, pantry: &Pantry) -> PantryResult<()> {
        let mut buf = Vec::new();
        write_pantry(&mut buf, pantry)?;
        self.fs.write(path, &buf)
    }
}

impl RequirementStore for CsvTables {
    fn load_requirements(&self, path: &Path) -> PantryResult<RequirementSheet> {
        read_requirements(self.fs.open(path)?, path)
    }

    fn save_requirements(&self, path: &Path, sheet: &RequirementSheet) -> PantryResult<()> {
        let mut buf = Vec::new();
        write_requirements(&mut buf, sheet)?;
        self.fs.write(path, &buf)
    }
}

impl ShoppingListSink for CsvTables {
    fn save_shopping_list(&self, path: &Path, list: &ShoppingList) -> PantryResult<()> {
        let mut buf = Vec::new();
        write_shopping_list(&mut buf, list)?;
        self.fs.write(path, &buf)
    }
}
