//! Category grouping for display
//!
//! Grouping is a view over a table: it never reorders or copies the rows, it
//! only buckets references to them.

use std::collections::BTreeMap;

use crate::domain::value_objects::Category;

/// Anything that belongs to a grocery category.
pub trait Categorized {
    fn category(&self) -> &Category;
}

/// Rows sharing one category, in their original relative order.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup<'a, T> {
    pub category: Category,
    pub items: Vec<&'a T>,
}

impl<T> CategoryGroup<'_, T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Bucket `rows` by category label. Groups come out in lexicographic label
/// order; rows inside a group keep the order they had in `rows`.
pub fn group_by_category<T: Categorized>(rows: &[T]) -> Vec<CategoryGroup<'_, T>> {
    let mut buckets: BTreeMap<&str, CategoryGroup<'_, T>> = BTreeMap::new();
    for row in rows {
        let category = row.category();
        buckets
            .entry(category.label())
            .or_insert_with(|| CategoryGroup {
                category: category.clone(),
                items: Vec::new(),
            })
            .items
            .push(row);
    }
    buckets.into_values().collect()
}
