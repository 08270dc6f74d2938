use pantry::{PriorityOrder, ShoppingList};

use crate::ui::primitives::icon::{priority_marker, Icon};
use crate::ui::views::{dim, group_heading};

pub fn render_shopping_list(
    list: &ShoppingList,
    order: PriorityOrder,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    if list.is_empty() {
        return format!(
            "{} No items needed for shopping this month!\n",
            Icon::Success.colored(supports_color, supports_unicode)
        );
    }

    let mut out = format!(
        "{} Shopping list ({} items, {} order)\n",
        Icon::Cart.colored(supports_color, supports_unicode),
        list.len(),
        order
    );
    for group in list.group_by_category() {
        out.push('\n');
        out.push_str(&group_heading(&group.category, group.len(), supports_color));
        out.push('\n');
        for entry in &group.items {
            out.push_str(&format!(
                "  {} {}: {} {} {}\n",
                priority_marker(entry.priority, supports_unicode),
                entry.name,
                entry.amount_needed,
                entry.unit,
                dim(&format!("({})", entry.priority), supports_color)
            ));
        }
    }
    out
}

/// Markdown for printing: a bold heading per category, one bullet per item.
pub fn render_print_friendly(list: &ShoppingList) -> String {
    list.group_by_category()
        .iter()
        .map(|group| {
            let mut block = format!("**{}**\n", group.category);
            for entry in &group.items {
                block.push_str(&format!(
                    "- {}: {} {}\n",
                    entry.name, entry.amount_needed, entry.unit
                ));
            }
            block
        })
        .collect::<Vec<_>>()
        .join("\n")
}
