pub mod interactive;
pub mod inventory;
pub mod requirements;
pub mod shopping;

use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

use pantry::Category;

use crate::ui::theme;

/// `Category (n items)` heading used by every grouped table.
pub(crate) fn group_heading(category: &Category, count: usize, supports_color: bool) -> String {
    let text = format!("{} ({} items)", category.label(), count);
    if supports_color {
        format!("{}", text.with(theme::colors::INFO).bold())
    } else {
        text
    }
}

/// Right-pad `s` to `width` display columns.
pub(crate) fn pad(s: &str, width: usize) -> String {
    let w = s.width();
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

pub(crate) fn dim(s: &str, supports_color: bool) -> String {
    if supports_color {
        format!("{}", s.with(theme::colors::DIM))
    } else {
        s.to_string()
    }
}
