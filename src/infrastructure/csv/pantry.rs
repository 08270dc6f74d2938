//! Pantry table: `Item, Category, Current Amount, Unit`

use std::io::{Read, Write};
use std::path::Path;

use crate::domain::entities::{Pantry, PantryItem};
use crate::error::{PantryError, PantryResult};

use super::columns::{
    csv_error, format_amount, ColumnIndex, Row, CATEGORY, CURRENT_AMOUNT, ITEM, PANTRY_COLUMNS,
    UNIT,
};

/// Parse a whole pantry table. `origin` only labels errors.
///
/// Extra columns are ignored. Any bad row fails the whole read.
pub fn read_pantry<R: Read>(reader: R, origin: &Path) -> PantryResult<Pantry> {
    let mut csv = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = csv.headers().map_err(|e| csv_error(origin, e))?.clone();
    let columns = ColumnIndex::new(&headers, &PANTRY_COLUMNS, origin)?;

    let mut items = Vec::new();
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
        items.push(PantryItem::new(
            row.name()?,
            row.category()?,
            row.amount(CURRENT_AMOUNT)?,
            row.unit()?,
        ));
    }

    Pantry::from_items(items).map_err(|e| match e {
        PantryError::DuplicateItem { name } => PantryError::Csv {
            file: origin.to_path_buf(),
            message: format!("item '{}' appears more than once", name),
        },
        other => other,
    })
}

pub fn write_pantry<W: Write>(writer: W, pantry: &Pantry) -> PantryResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record([ITEM, CATEGORY, CURRENT_AMOUNT, UNIT])
        .map_err(csv_io_error)?;
    for item in pantry {
        csv.write_record([
            item.name.as_str(),
            item.category.label(),
            format_amount(item.current_amount).as_str(),
            item.unit.label(),
        ])
        .map_err(csv_io_error)?;
    }
    csv.flush()?;
    Ok(())
}

pub(super) fn csv_io_error(err: csv::Error) -> PantryError {
    PantryError::Io(std::io::Error::other(err.to_string()))
}
