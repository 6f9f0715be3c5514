//! Inventory-wide totals.

use crate::item::{InventoryItem, StockStatus};

/// Totals over a snapshot of the inventory.
///
/// `total_value` is in cents and saturates rather than overflowing. The HTTP
/// layer converts it to a decimal amount alongside every other price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InventorySummary {
    pub total_items: usize,
    pub total_units: u64,
    pub total_value: u64,
    pub low_stock_items: usize,
    pub out_of_stock_items: usize,
}

impl InventorySummary {
    pub fn from_items<'a>(
        items: impl IntoIterator<Item = &'a InventoryItem>,
        low_stock_threshold: u64,
    ) -> Self {
        items
            .into_iter()
            .fold(InventorySummary::default(), |mut acc, item| {
                acc.total_items += 1;
                acc.total_units = acc.total_units.saturating_add(item.current_stock());
                acc.total_value = acc.total_value.saturating_add(item.stock_value());
                match item.status(low_stock_threshold) {
                    StockStatus::OutOfStock => acc.out_of_stock_items += 1,
                    StockStatus::LowStock => acc.low_stock_items += 1,
                    StockStatus::InStock => {}
                }
                acc
            })
    }
}
