use unicode_width::UnicodeWidthStr;

use pantry::RequirementSheet;

use crate::ui::primitives::icon::Icon;
use crate::ui::views::{dim, group_heading, pad};

pub fn render_requirements(
    sheet: &RequirementSheet,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = format!(
        "{} Monthly requirements ({} items)\n",
        Icon::Needs.colored(supports_color, supports_unicode),
        sheet.len()
    );

    let name_width = sheet.iter().map(|e| e.name.width()).max().unwrap_or(0);
    for group in sheet.group_by_category() {
        out.push('\n');
        out.push_str(&group_heading(&group.category, group.len(), supports_color));
        out.push('\n');
        for entry in &group.items {
            let have = format!("have {} {}", entry.current_amount, entry.unit);
            out.push_str(&format!(
                "  {}  {}  need {} {}  {}\n",
                pad(&entry.name, name_width),
                dim(&have, supports_color),
                entry.monthly_need,
                entry.unit,
                entry.priority
            ));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantry::{Amount, Category, Pantry, PantryItem, RequirementUpdate, Unit};

    #[test]
    fn shows_stock_need_and_priority() {
        let pantry = Pantry::from_items(vec![PantryItem::new(
            "Apples",
            Category::FruitsVegetables,
            Amount::new(2.0).unwrap(),
            Unit::Kilograms,
        )])
        .unwrap();
        let mut sheet = RequirementSheet::snapshot(&pantry);
        sheet
            .update("Apples", &RequirementUpdate::new().with_monthly_need(5.0))
            .unwrap();

        let rendered = render_requirements(&sheet, false, false);
        assert!(rendered.starts_with("[NEEDS] Monthly requirements (1 items)"));
        assert!(rendered.contains("Fruits & Vegetables (1 items)"));
        assert!(rendered.contains("  Apples  have 2 kg  need 5 kg  Medium"));
    }
}
