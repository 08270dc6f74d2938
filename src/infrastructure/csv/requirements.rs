//! Requirement sheet: the pantry columns plus `Monthly Need, Priority`

use std::io::{Read, Write};
use std::path::Path;

use crate::domain::entities::{RequirementEntry, RequirementSheet};
use crate::domain::value_objects::Priority;
use crate::error::{PantryError, PantryResult};

use super::columns::{
    csv_error, format_amount, ColumnIndex, Row, CATEGORY, CURRENT_AMOUNT, ITEM, MONTHLY_NEED,
    PANTRY_COLUMNS, PRIORITY, UNIT,
};
use super::pantry::csv_io_error;

/// Parse a requirement sheet. Only the pantry columns are required; a blank
/// or absent need is 0 and a blank or absent priority is Medium.
pub fn read_requirements<R: Read>(reader: R, origin: &Path) -> PantryResult<RequirementSheet> {
    let mut csv = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = csv.headers().map_err(|e| csv_error(origin, e))?.clone();
    let columns = ColumnIndex::new(&headers, &PANTRY_COLUMNS, origin)?;

    let mut entries = Vec::new();
    for (index, record) in csv.records().enumerate() {
        let record = record.map_err(|e| csv_error(origin, e))?;
        let row = Row {
            record: &record,
            columns: &columns,
            file: origin,
            number: record
                .position()
                .map_or(index + 2, |pos| pos.line() as usize),
        };
        let priority = match row.cell(PRIORITY) {
            Some(raw) => raw.parse::<Priority>().map_err(|e| row.invalid(e))?,
            None => Priority::default(),
        };
        entries.push(RequirementEntry {
            name: row.name()?,
            category: row.category()?,
            current_amount: row.amount(CURRENT_AMOUNT)?,
            unit: row.unit()?,
            monthly_need: row.amount_or_zero(MONTHLY_NEED)?,
            priority,
        });
    }

    RequirementSheet::from_entries(entries).map_err(|e| match e {
        PantryError::DuplicateItem { name } => PantryError::Csv {
            file: origin.to_path_buf(),
            message: format!("item '{}' appears more than once", name),
        },
        other => other,
    })
}

pub fn write_requirements<W: Write>(writer: W, sheet: &RequirementSheet) -> PantryResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record([ITEM, CATEGORY, CURRENT_AMOUNT, UNIT, MONTHLY_NEED, PRIORITY])
        .map_err(csv_io_error)?;
    for entry in sheet.iter() {
        csv.write_record([
            entry.name.as_str(),
            entry.category.label(),
            format_amount(entry.current_amount).as_str(),
            entry.unit.label(),
            format_amount(entry.monthly_need).as_str(),
            entry.priority.label(),
        ])
        .map_err(csv_io_error)?;
    }
    csv.flush()?;
    Ok(())
}
