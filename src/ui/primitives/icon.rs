use crossterm::style::Stylize;

use pantry::Priority;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Arrow,
    Pantry,
    Needs,
    Cart,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Pantry) => theme::icons::PANTRY,
            (true, Icon::Needs) => theme::icons::NEEDS,
            (true, Icon::Cart) => theme::icons::CART,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Pantry) => theme::icons_ascii::PANTRY,
            (false, Icon::Needs) => theme::icons_ascii::NEEDS,
            (false, Icon::Cart) => theme::icons_ascii::CART,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning => theme::colors::WARNING,
            Icon::Arrow => theme::colors::DIM,
            Icon::Pantry | Icon::Needs | Icon::Cart => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}

/// Marker shown in front of a shopping list row.
pub fn priority_marker(priority: Priority, supports_unicode: bool) -> &'static str {
    match (supports_unicode, priority) {
        (true, Priority::High) => theme::markers::HIGH,
        (true, Priority::Medium) => theme::markers::MEDIUM,
        (true, Priority::Low) => theme::markers::LOW,
        (false, Priority::High) => theme::markers_ascii::HIGH,
        (false, Priority::Medium) => theme::markers_ascii::MEDIUM,
        (false, Priority::Low) => theme::markers_ascii::LOW,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_renders_ascii_when_unicode_unsupported() {
        assert_eq!(Icon::Success.render(false), theme::icons_ascii::SUCCESS);
    }

    #[test]
    fn uncolored_icon_is_plain() {
        assert_eq!(Icon::Cart.colored(false, true), "🛒");
    }

    #[test]
    fn priority_markers() {
        assert_eq!(priority_marker(Priority::High, true), "⭐");
        assert_eq!(priority_marker(Priority::Medium, true), "📌");
        assert_eq!(priority_marker(Priority::Low, true), "🔹");
        assert_eq!(priority_marker(Priority::High, false), "[!]");
        assert_eq!(priority_marker(Priority::Medium, false), "[*]");
        assert_eq!(priority_marker(Priority::Low, false), "[-]");
    }
}
