use unicode_width::UnicodeWidthStr;

use pantry::Pantry;

use crate::ui::primitives::icon::Icon;
use crate::ui::views::{dim, group_heading, pad};

pub fn render_pantry(pantry: &Pantry, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} Pantry ({} items)\n",
        Icon::Pantry.colored(supports_color, supports_unicode),
        pantry.len()
    );

    if pantry.is_empty() {
        out.push_str("\nYour pantry is empty. Add items manually or import a CSV file.\n");
        return out;
    }

    let name_width = pantry.iter().map(|i| i.name.width()).max().unwrap_or(0);
    for group in pantry.group_by_category() {
        out.push('\n');
        out.push_str(&group_heading(&group.category, group.len(), supports_color));
        out.push('\n');
        for item in &group.items {
            out.push_str(&format!(
                "  {}  {} {}\n",
                pad(&item.name, name_width),
                item.current_amount,
                dim(item.unit.label(), supports_color)
            ));
        }
    }
    out
}
