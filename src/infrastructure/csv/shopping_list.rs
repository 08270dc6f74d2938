//! Shopping list export: `Item, Category, Amount Needed, Unit`, derived order

use std::io::Write;

use crate::domain::entities::ShoppingList;
use crate::error::PantryResult;

use super::columns::{format_amount, AMOUNT_NEEDED, CATEGORY, ITEM, UNIT};
use super::pantry::csv_io_error;

pub fn write_shopping_list<W: Write>(writer: W, list: &ShoppingList) -> PantryResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record([ITEM, CATEGORY, AMOUNT_NEEDED, UNIT])
        .map_err(csv_io_error)?;
    for entry in list {
        csv.write_record([
            entry.name.as_str(),
            entry.category.label(),
            format_amount(entry.amount_needed).as_str(),
            entry.unit.label(),
        ])
        .map_err(csv_io_error)?;
    }
    csv.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::RequirementEntry;
    use crate::domain::services::ShoppingListDeriver;
    use crate::domain::value_objects::{Amount, Category, Priority, Unit};

    #[test]
    fn priority_is_not_exported() {
        let rows = vec![
            RequirementEntry {
                name: "Apples".to_string(),
                category: Category::FruitsVegetables,
                current_amount: Amount::new(2.0).unwrap(),
                unit: Unit::Kilograms,
                monthly_need: Amount::new(5.0).unwrap(),
                priority: Priority::Low,
            },
            RequirementEntry {
                name: "Bread".to_string(),
                category: Category::Bakery,
                current_amount: Amount::ZERO,
                unit: Unit::Pieces,
                monthly_need: Amount::new(0.5).unwrap(),
                priority: Priority::High,
            },
        ];
        let list = ShoppingListDeriver::default().derive(&rows);

        let mut out = Vec::new();
        write_shopping_list(&mut out, &list).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Item,Category,Amount Needed,Unit\n\
             Bread,Bakery,0.5,pcs\n\
             Apples,Fruits & Vegetables,3,kg\n"
        );
    }

    #[test]
    fn empty_list_is_just_a_header() {
        let mut out = Vec::new();
        write_shopping_list(&mut out, &ShoppingList::default()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Item,Category,Amount Needed,Unit\n");
    }
}
