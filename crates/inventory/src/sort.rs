//! List ordering for the inventory table.

use core::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::item::InventoryItem;

/// Column an item list can be ordered by.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    ProductName,
    Sku,
    Category,
    CurrentStock,
    UnitPrice,
    StockValue,
}

/// Sort column plus direction. Defaults to product name, ascending.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct ItemOrder {
    pub key: SortKey,
    pub descending: bool,
}

impl ItemOrder {
    pub fn new(key: SortKey, descending: bool) -> Self {
        Self { key, descending }
    }

    /// Text columns compare case-insensitively; ties fall back to the id so
    /// the order is total.
    pub fn compare(&self, a: &InventoryItem, b: &InventoryItem) -> Ordering {
        let by_key = match self.key {
            SortKey::ProductName => cmp_text(a.product_name(), b.product_name()),
            SortKey::Sku => cmp_text(a.sku(), b.sku()),
            SortKey::Category => cmp_text(a.category(), b.category()),
            SortKey::CurrentStock => a.current_stock().cmp(&b.current_stock()),
            SortKey::UnitPrice => a.unit_price().cmp(&b.unit_price()),
            SortKey::StockValue => a.stock_value().cmp(&b.stock_value()),
        };
        let by_key = if self.descending { by_key.reverse() } else { by_key };
        by_key.then_with(|| a.id_typed().cmp(b.id_typed()))
    }

    pub fn sort(&self, items: &mut [InventoryItem]) {
        items.sort_by(|a, b| self.compare(a, b));
    }
}

fn cmp_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
