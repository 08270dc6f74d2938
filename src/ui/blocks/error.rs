use std::path::{Path, PathBuf};

use crate::ui::primitives::icon::Icon;
use crate::ui::widgets::r#box::{Box, BoxStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// Boxed problem report: what went wrong, where, and how to fix it.
#[derive(Debug, Clone)]
pub struct ErrorBlock {
    severity: Severity,
    file: Option<PathBuf>,
    row: Option<usize>,
    message: String,
    fix: Option<String>,
}

impl ErrorBlock {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            file: None,
            row: None,
            message: message.into(),
            fix: None,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            ..Self::new(message)
        }
    }

    pub fn with_file(mut self, file: &Path) -> Self {
        self.file = Some(file.to_path_buf());
        self
    }

    pub fn with_row(mut self, row: usize) -> Self {
        self.row = Some(row);
        self
    }

    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let (icon, title, style) = match self.severity {
            Severity::Error => (Icon::Error, "ERROR", BoxStyle::Error),
            Severity::Warning => (Icon::Warning, "WARNING", BoxStyle::Warning),
        };
        let mut b = Box::with_title(format!(
            "{} {}",
            icon.colored(supports_color, supports_unicode),
            title
        ))
        .style(style);

        if let Some(file) = &self.file {
            match self.row {
                Some(row) => b.add_line(format!("{}, row {}", file.display(), row)),
                None => b.add_line(file.display().to_string()),
            }
        }
        b.add_empty();
        b.add_line(self.message.clone());

        if let Some(fix) = &self.fix {
            b.add_empty();
            b.add_line(format!("FIX: {}", fix));
        }

        b.render(supports_color, supports_unicode)
    }
}
