use crossterm::style::Color;
use dialoguer::theme::{ColorfulTheme, Theme};
use std::fmt;

/// Design tokens for the pantry CLI.
///
/// Every color, icon and border used by views comes from here.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const ARROW: &str = "↳";
    pub const POINTER: &str = "›";

    pub const PANTRY: &str = "🥫";
    pub const NEEDS: &str = "📝";
    pub const CART: &str = "🛒";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const ARROW: &str = "->";
    pub const POINTER: &str = ">";

    pub const PANTRY: &str = "[PANTRY]";
    pub const NEEDS: &str = "[NEEDS]";
    pub const CART: &str = "[LIST]";
}

/// Priority markers on shopping list rows.
pub mod markers {
    pub const HIGH: &str = "⭐";
    pub const MEDIUM: &str = "📌";
    pub const LOW: &str = "🔹";
}

pub mod markers_ascii {
    pub const HIGH: &str = "[!]";
    pub const MEDIUM: &str = "[*]";
    pub const LOW: &str = "[-]";
}

pub mod borders {
    pub const TOP_LEFT: &str = "╭";
    pub const TOP_RIGHT: &str = "╮";
    pub const BOTTOM_LEFT: &str = "╰";
    pub const BOTTOM_RIGHT: &str = "╯";
    pub const HORIZONTAL: &str = "─";
    pub const VERTICAL: &str = "│";
}

pub mod borders_ascii {
    pub const TOP_LEFT: &str = "+";
    pub const TOP_RIGHT: &str = "+";
    pub const BOTTOM_LEFT: &str = "+";
    pub const BOTTOM_RIGHT: &str = "+";
    pub const HORIZONTAL: &str = "-";
    pub const VERTICAL: &str = "|";
}

// ----------------------------------------------------------------------------
// PantryTheme - dialoguer theme using the pointer icon for the active row
// ----------------------------------------------------------------------------

/// Wraps `ColorfulTheme`; only the select row marker is replaced, so ASCII
/// terminals get `>` instead of a glyph they may not render.
pub struct PantryTheme {
    unicode: bool,
    inner: ColorfulTheme,
}

impl PantryTheme {
    pub fn new(unicode: bool) -> Self {
        Self {
            unicode,
            inner: ColorfulTheme::default(),
        }
    }

    pub fn pointer(&self) -> &'static str {
        if self.unicode {
            icons::POINTER
        } else {
            icons_ascii::POINTER
        }
    }
}

impl Theme for PantryTheme {
    fn format_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.inner.format_prompt(f, prompt)
    }

    fn format_error(&self, f: &mut dyn fmt::Write, err: &str) -> fmt::Result {
        self.inner.format_error(f, err)
    }

    fn format_confirm_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        default: Option<bool>,
    ) -> fmt::Result {
        self.inner.format_confirm_prompt(f, prompt, default)
    }

    fn format_confirm_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        selection: Option<bool>,
    ) -> fmt::Result {
        self.inner
            .format_confirm_prompt_selection(f, prompt, selection)
    }

    fn format_input_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        default: Option<&str>,
    ) -> fmt::Result {
        self.inner.format_input_prompt(f, prompt, default)
    }

    fn format_input_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        sel: &str,
    ) -> fmt::Result {
        self.inner.format_input_prompt_selection(f, prompt, sel)
    }

    fn format_select_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.inner.format_select_prompt(f, prompt)
    }

    fn format_select_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        sel: &str,
    ) -> fmt::Result {
        self.inner.format_select_prompt_selection(f, prompt, sel)
    }

    fn format_select_prompt_item(
        &self,
        f: &mut dyn fmt::Write,
        text: &str,
        active: bool,
    ) -> fmt::Result {
        if active {
            write!(f, "{} {}", self.pointer(), text)
        } else {
            write!(f, "  {}", text)
        }
    }
}
