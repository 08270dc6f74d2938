//! Error types for pantry
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pantry operations
pub type PantryResult<T> = Result<T, PantryError>;

/// Main error type for pantry operations
#[derive(Error, Debug)]
pub enum PantryError {
    /// A required form field was left blank
    #[error("missing required field '{field}'")]
    MissingField { field: &'static str },

    /// Item names are the pantry's key
    #[error("an item named '{name}' is already in the pantry")]
    DuplicateItem { name: String },

    #[error("no item named '{name}'")]
    ItemNotFound { name: String },

    #[error("{field} must be a non-negative number, got {value}")]
    InvalidAmount { field: &'static str, value: f64 },

    /// Requirements are snapshotted from the pantry, so it cannot be empty
    #[error("the pantry is empty - add items before planning a shopping list")]
    EmptyPantry,

    #[error("monthly requirements have not been set up yet")]
    NoRequirements,

    /// Imported table lacks one or more required columns
    #[error("{file} must contain columns: {} (missing: {})", .required.join(", "), .missing.join(", "))]
    MissingColumns {
        file: PathBuf,
        required: Vec<String>,
        missing: Vec<String>,
    },

    /// A data row could not be turned into a record
    #[error("invalid row {row} in {file}: {message}")]
    InvalidRow {
        file: PathBuf,
        row: usize,
        message: String,
    },

    /// The file is not readable as CSV at all
    #[error("error reading {file}: {message}")]
    Csv { file: PathBuf, message: String },

    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Refusing to clobber a file the user may have edited
    #[error("{path} already exists (use --force to overwrite)")]
    FileExists { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Interactive form was cancelled
    #[error("aborted by user")]
    Aborted,
}

impl PantryError {
    /// Form-level problems the UI shows as warnings rather than failures.
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            PantryError::MissingField { .. } | PantryError::DuplicateItem { .. }
        )
    }

    /// File the error refers to, if any.
    pub fn file(&self) -> Option<&std::path::Path> {
        match self {
            PantryError::MissingColumns { file, .. }
            | PantryError::InvalidRow { file, .. }
            | PantryError::Csv { file, .. }
            | PantryError::InvalidConfig { file, .. } => Some(file),
            PantryError::FileExists { path } => Some(path),
            _ => None,
        }
    }
}
