//! Property tests for shopping list derivation.

use proptest::prelude::*;

use pantry::{
    Amount, Category, Priority, PriorityOrder, RequirementEntry, ShoppingListDeriver, Unit,
};

fn amount() -> impl Strategy<Value = f64> {
    (0u32..400).prop_map(|n| f64::from(n) / 4.0)
}

fn priority() -> impl Strategy<Value = Priority> {
    prop_oneof![Just(Priority::High), Just(Priority::Medium), Just(Priority::Low)]
}

fn order() -> impl Strategy<Value = PriorityOrder> {
    prop_oneof![Just(PriorityOrder::Label), Just(PriorityOrder::Severity)]
}

fn entry() -> impl Strategy<Value = RequirementEntry> {
    (
        "[A-Za-z]{1,8}",
        0..Category::ALL.len(),
        amount(),
        amount(),
        priority(),
    )
        .prop_map(|(name, category, current, need, priority)| RequirementEntry {
            name,
            category: Category::ALL[category].clone(),
            current_amount: Amount::new(current).unwrap(),
            unit: Unit::Pieces,
            monthly_need: Amount::new(need).unwrap(),
            priority,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Exactly the understocked rows are listed, each for its shortfall.
    #[test]
    fn property_lists_exactly_the_shortfall(
        rows in proptest::collection::vec(entry(), 0..24),
        order in order(),
    ) {
        let list = ShoppingListDeriver::new(order).derive(&rows);

        let understocked = rows
            .iter()
            .filter(|r| r.monthly_need.value() > r.current_amount.value())
            .count();
        prop_assert_eq!(list.len(), understocked);

        for item in list.iter() {
            prop_assert!(item.amount_needed.value() > 0.0);
            let row = rows.iter().find(|r| {
                r.name == item.name
                    && r.category == item.category
                    && r.priority == item.priority
                    && r.monthly_need.value() - r.current_amount.value() == item.amount_needed.value()
            });
            prop_assert!(row.is_some(), "no source row for {:?}", item);
        }
    }

    /// PROPERTY: The list is ordered by priority rank, then category label.
    #[test]
    fn property_sorted_by_priority_then_category(
        rows in proptest::collection::vec(entry(), 0..24),
        order in order(),
    ) {
        let list = ShoppingListDeriver::new(order).derive(&rows);

        for pair in list.entries().windows(2) {
            let key = |e: &pantry::ShoppingListEntry| {
                (order.rank(e.priority), e.category.label().to_string())
            };
            prop_assert!(key(&pair[0]) <= key(&pair[1]), "{:?} before {:?}", pair[0], pair[1]);
        }
    }

    /// PROPERTY: Rows with equal sort keys keep their sheet order.
    #[test]
    fn property_sort_is_stable(
        rows in proptest::collection::vec(entry(), 0..24),
    ) {
        let rows: Vec<RequirementEntry> = rows
            .into_iter()
            .enumerate()
            .map(|(i, mut r)| {
                r.name = format!("item{}", i);
                r
            })
            .collect();
        let list = ShoppingListDeriver::default().derive(&rows);
        let index_of = |name: &str, category: &Category, priority: Priority| {
            rows.iter().position(|r| {
                r.name == name && &r.category == category && r.priority == priority
                    && r.monthly_need.value() > r.current_amount.value()
            })
        };

        for pair in list.entries().windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            if a.priority == b.priority && a.category == b.category && a.name != b.name {
                let ia = index_of(&a.name, &a.category, a.priority);
                let ib = index_of(&b.name, &b.category, b.priority);
                prop_assert!(ia < ib, "{} should precede {}", b.name, a.name);
            }
        }
    }

    /// PROPERTY: Derivation is deterministic.
    #[test]
    fn property_derivation_is_deterministic(
        rows in proptest::collection::vec(entry(), 0..24),
        order in order(),
    ) {
        let deriver = ShoppingListDeriver::new(order);
        prop_assert_eq!(deriver.derive(&rows), deriver.derive(&rows));
    }

    /// PROPERTY: Negative or non-finite amounts are never accepted.
    #[test]
    fn property_amount_rejects_negative(value in -1.0e9f64..-1.0e-9) {
        prop_assert!(Amount::new(value).is_err());
    }
}

#[test]
fn non_finite_amounts_are_rejected() {
    assert!(Amount::new(f64::NAN).is_err());
    assert!(Amount::new(f64::INFINITY).is_err());
}
