//! Local File System Implementation
//!
//! Every table write goes through [`LocalFs::write`], which writes to a
//! temporary file next to the target and renames it into place. A crash or a
//! failed serialisation never leaves a half-written CSV behind.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::PantryResult;

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }

    pub fn open(&self, path: &Path) -> PantryResult<File> {
        Ok(File::open(path)?)
    }

    /// Atomically replace `path` with `content`, creating parent directories.
    pub fn write(&self, path: &Path, content: &[u8]) -> PantryResult<()> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent)?;

        let mut tmp = NamedTempFile::new_in(parent)?;
        tmp.write_all(content)?;
        tmp.as_file().sync_all()?;
        tmp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}
