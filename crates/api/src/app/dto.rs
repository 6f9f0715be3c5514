use serde::{Deserialize, Serialize};

use stockroom_inventory::{
    InventoryItem, InventorySummary, ItemOrder, SortKey, StockStatus, TransactionType,
    cents_to_decimal,
};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Default, Deserialize)]
pub struct ListItemsQuery {
    /// Product-name filter (case-insensitive substring).
    pub q: Option<String>,
    /// Column to order by; defaults to `productName`.
    pub sort: Option<SortKey>,
    #[serde(default)]
    pub desc: bool,
}

impl ListItemsQuery {
    pub fn order(&self) -> ItemOrder {
        ItemOrder::new(self.sort.unwrap_or_default(), self.desc)
    }

    pub fn search(&self) -> &str {
        self.q.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Deserialize)]
pub struct StockTransactionRequest {
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: u64,
}

// -------------------------
// Response DTOs
// -------------------------

/// An item plus the values the dashboard derives from it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemResponse {
    #[serde(flatten)]
    pub item: InventoryItem,
    pub status: StockStatus,
    /// `currentStock × unitPrice`, as a decimal amount.
    pub stock_value: f64,
}

impl ItemResponse {
    pub fn new(item: InventoryItem, low_stock_threshold: u64) -> Self {
        Self {
            status: item.status(low_stock_threshold),
            stock_value: cents_to_decimal(item.stock_value()),
            item,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}

/// Dashboard totals. Money is a decimal amount, matching `unitPrice` and
/// `stockValue` on items.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub total_items: usize,
    pub total_units: u64,
    pub total_value: f64,
    pub low_stock_items: usize,
    pub out_of_stock_items: usize,
}

impl From<InventorySummary> for SummaryResponse {
    fn from(s: InventorySummary) -> Self {
        Self {
            total_items: s.total_items,
            total_units: s.total_units,
            total_value: cents_to_decimal(s.total_value),
            low_stock_items: s.low_stock_items,
            out_of_stock_items: s.out_of_stock_items,
        }
    }
}
