//! Needs Use Case
//!
//! Writes a blank requirement sheet (Monthly Need 0, Priority Medium) for the
//! current pantry, to be filled in and handed to `plan`.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::entities::RequirementSheet;
use crate::domain::ports::{PantryStore, RequirementStore};
use crate::error::{PantryError, PantryResult};

#[derive(Debug, Clone)]
pub struct NeedsResult {
    pub path: PathBuf,
    pub sheet: RequirementSheet,
}

pub struct NeedsUseCase<T>
where
    T: PantryStore + RequirementStore,
{
    tables: T,
}

impl<T> NeedsUseCase<T>
where
    T: PantryStore + RequirementStore,
{
    pub fn new(tables: T) -> Self {
        Self { tables }
    }

    /// Snapshot the pantry at `pantry_path` into `output`.
    ///
    /// An existing sheet holds the user's edits, so it is only replaced when
    /// `force` is set.
    pub fn execute(
        &self,
        pantry_path: &Path,
        output: &Path,
        force: bool,
    ) -> PantryResult<NeedsResult> {
        if output.exists() && !force {
            return Err(PantryError::FileExists {
                path: output.to_path_buf(),
            });
        }

        let pantry = self.tables.load(pantry_path)?;
        if pantry.is_empty() {
            return Err(PantryError::EmptyPantry);
        }

        let sheet = RequirementSheet::snapshot(&pantry);
        self.tables.save_requirements(output, &sheet)?;
        info!(file = %output.display(), rows = sheet.len(), "wrote requirement sheet");

        Ok(NeedsResult {
            path: output.to_path_buf(),
            sheet,
        })
    }
}
