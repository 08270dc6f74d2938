//! Header handling shared by all table readers.

use std::path::Path;

use csv::StringRecord;

use crate::domain::value_objects::{Amount, Category, Unit};
use crate::error::{PantryError, PantryResult};

pub const ITEM: &str = "Item";
pub const CATEGORY: &str = "Category";
pub const CURRENT_AMOUNT: &str = "Current Amount";
pub const UNIT: &str = "Unit";
pub const MONTHLY_NEED: &str = "Monthly Need";
pub const PRIORITY: &str = "Priority";
pub const AMOUNT_NEEDED: &str = "Amount Needed";

pub const PANTRY_COLUMNS: [&str; 4] = [ITEM, CATEGORY, CURRENT_AMOUNT, UNIT];

/// Positions of named columns in a header row.
#[derive(Debug)]
pub struct ColumnIndex {
    headers: Vec<String>,
}

impl ColumnIndex {
    /// Index `headers`, failing with every missing `required` column at once.
    pub fn new(headers: &StringRecord, required: &[&str], file: &Path) -> PantryResult<Self> {
        let headers: Vec<String> = headers.iter().map(|h| h.trim().to_string()).collect();
        let missing: Vec<String> = required
            .iter()
            .filter(|name| !headers.iter().any(|h| h == *name))
            .map(|name| name.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(PantryError::MissingColumns {
                file: file.to_path_buf(),
                required: required.iter().map(|name| name.to_string()).collect(),
                missing,
            });
        }
        Ok(Self { headers })
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}

/// One data row plus where it came from, for error reporting.
pub struct Row<'a> {
    pub record: &'a StringRecord,
    pub columns: &'a ColumnIndex,
    pub file: &'a Path,
    pub number: usize,
}

impl Row<'_> {
    pub fn invalid(&self, message: impl Into<String>) -> PantryError {
        PantryError::InvalidRow {
            file: self.file.to_path_buf(),
            row: self.number,
            message: message.into(),
        }
    }

    /// Trimmed cell, `None` when the column is absent or the cell is blank.
    pub fn cell(&self, column: &str) -> Option<&str> {
        self.columns
            .position(column)
            .and_then(|i| self.record.get(i))
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    pub fn required(&self, column: &str) -> PantryResult<&str> {
        self.cell(column)
            .ok_or_else(|| self.invalid(format!("{} is blank", column)))
    }

    pub fn name(&self) -> PantryResult<String> {
        self.required(ITEM).map(str::to_string)
    }

    pub fn category(&self) -> PantryResult<Category> {
        self.required(CATEGORY).map(Category::from_label)
    }

    pub fn unit(&self) -> PantryResult<Unit> {
        self.required(UNIT).map(Unit::from_label)
    }

    pub fn amount(&self, column: &str) -> PantryResult<Amount> {
        let raw = self.required(column)?;
        raw.parse::<Amount>()
            .map_err(|e| self.invalid(format!("{}: {}", column, e)))
    }

    /// Like [`Row::amount`] but blank or absent cells read as zero.
    pub fn amount_or_zero(&self, column: &str) -> PantryResult<Amount> {
        match self.cell(column) {
            Some(_) => self.amount(column),
            None => Ok(Amount::ZERO),
        }
    }
}

/// Map a `csv` error onto the file it came from.
pub fn csv_error(file: &Path, err: csv::Error) -> PantryError {
    match err.position() {
        Some(pos) => PantryError::InvalidRow {
            file: file.to_path_buf(),
            row: pos.line() as usize,
            message: err.to_string(),
        },
        None => PantryError::Csv {
            file: file.to_path_buf(),
            message: err.to_string(),
        },
    }
}

/// Plain number text; whole amounts print without a fractional part.
pub fn format_amount(amount: Amount) -> String {
    amount.to_string()
}
