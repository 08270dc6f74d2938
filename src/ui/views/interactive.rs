use pantry::Session;

use crate::ui::widgets::r#box::{Box, BoxStyle};

pub fn render_banner(supports_color: bool, supports_unicode: bool) -> String {
    let mut b = Box::with_style(BoxStyle::Info);
    b.add_empty();
    b.add_line("  Pantry - Monthly shopping planner");
    b.add_empty();
    b.add_line("  Track what you have, set what you need,");
    b.add_line("  and get a prioritized shopping list.");
    b.add_empty();
    b.render(supports_color, supports_unicode)
}

/// One-line summary shown above the main menu.
pub fn render_status(session: &Session) -> String {
    let requirements = match session.requirements() {
        Some(sheet) => format!("{} requirements", sheet.len()),
        None => "no requirements".to_string(),
    };
    let list = match session.shopping_list() {
        Some(list) => format!("{} to buy", list.len()),
        None => "list not calculated".to_string(),
    };
    format!(
        "{} items | {} | {} | {} order",
        session.pantry().len(),
        requirements,
        list,
        session.priority_order()
    )
}
