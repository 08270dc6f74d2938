//! Property tests for the CSV tables.

use std::collections::BTreeSet;
use std::path::Path;

use proptest::prelude::*;

use pantry::infrastructure::csv::{read_pantry, read_requirements, write_pantry};
use pantry::{Amount, Category, Pantry, PantryItem, Unit};

fn pantry() -> impl Strategy<Value = Pantry> {
    proptest::collection::btree_set("[A-Za-z][A-Za-z0-9 ]{0,10}[A-Za-z0-9]", 0..12)
        .prop_flat_map(|names: BTreeSet<String>| {
            let n = names.len();
            (
                Just(names),
                proptest::collection::vec(
                    (0..Category::ALL.len(), 0..Unit::ALL.len(), 0u32..1000),
                    n,
                ),
            )
        })
        .prop_map(|(names, cells)| {
            let items = names
                .into_iter()
                .zip(cells)
                .map(|(name, (category, unit, amount))| {
                    PantryItem::new(
                        name,
                        Category::ALL[category].clone(),
                        Amount::new(f64::from(amount) / 8.0).unwrap(),
                        Unit::ALL[unit].clone(),
                    )
                })
                .collect();
            Pantry::from_items(items).unwrap()
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: An exported pantry imports back unchanged, row order included.
    #[test]
    fn property_export_then_import_is_identity(pantry in pantry()) {
        let mut buf = Vec::new();
        write_pantry(&mut buf, &pantry).unwrap();

        let read = read_pantry(buf.as_slice(), Path::new("pantry.csv")).unwrap();
        prop_assert_eq!(read, pantry);
    }

    /// PROPERTY: Reading arbitrary text never panics.
    #[test]
    fn property_read_never_panics(text in "(?s).{0,256}") {
        let _ = read_pantry(text.as_bytes(), Path::new("pantry.csv"));
        let _ = read_requirements(text.as_bytes(), Path::new("needs.csv"));
    }

    /// PROPERTY: Reading with a valid header either yields every row or fails.
    #[test]
    fn property_read_is_all_or_nothing(
        rows in proptest::collection::vec("[A-Za-z]{1,6},[A-Za-z ]{1,8},-?[0-9]{1,3},[a-z]{1,3}", 0..8),
    ) {
        let text = format!("Item,Category,Current Amount,Unit\n{}\n", rows.join("\n"));
        if let Ok(pantry) = read_pantry(text.as_bytes(), Path::new("pantry.csv")) {
            prop_assert_eq!(pantry.len(), rows.len());
        }
    }
}
