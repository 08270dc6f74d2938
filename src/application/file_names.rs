//! Default export file names, stamped with the local date.

use chrono::{Local, NaiveDate};

pub const PANTRY_PREFIX: &str = "pantry_inventory";
pub const SHOPPING_LIST_PREFIX: &str = "shopping_list";
pub const REQUIREMENTS_PREFIX: &str = "monthly_needs";

pub fn stamped(prefix: &str, date: NaiveDate) -> String {
    format!("{}_{}.csv", prefix, date.format("%Y%m%d"))
}

/// `pantry_inventory_YYYYMMDD.csv` for today.
pub fn pantry_export_name() -> String {
    stamped(PANTRY_PREFIX, Local::now().date_naive())
}

/// `shopping_list_YYYYMMDD.csv` for today.
pub fn shopping_list_export_name() -> String {
    stamped(SHOPPING_LIST_PREFIX, Local::now().date_naive())
}

pub fn requirements_export_name() -> String {
    stamped(REQUIREMENTS_PREFIX, Local::now().date_naive())
}
