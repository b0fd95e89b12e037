//! Inventory aggregator: dashboard summary figures.

use std::collections::HashSet;

use crate::product::Product;

/// Summary statistics over a product list.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InventoryStats {
    pub count: usize,
    /// Sum of prices, unrounded.
    pub total_value: f64,
    pub distinct_categories: usize,
    pub distinct_audiences: usize,
}

/// Compute summary statistics.
///
/// Distinct categories and audiences are counted by exact label, so `"Clothes"`
/// and `"clothes"` count twice even though the filter engine treats them as one.
pub fn aggregate<'a, I>(products: I) -> InventoryStats
where
    I: IntoIterator<Item = &'a Product>,
{
    let mut stats = InventoryStats::default();
    let mut categories: HashSet<&str> = HashSet::new();
    let mut audiences: HashSet<&str> = HashSet::new();

    for product in products {
        stats.count += 1;
        stats.total_value += product.price().amount();
        categories.insert(product.category());
        audiences.insert(product.target_audience());
    }

    stats.distinct_categories = categories.len();
    stats.distinct_audiences = audiences.len();
    stats
}
