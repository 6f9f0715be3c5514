//! Inventory domain module.
//!
//! Items, prices, stock classification, list ordering and stock transactions, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod item;
pub mod price;
pub mod sort;
pub mod summary;
pub mod transaction;

pub use item::{
    DEFAULT_LOW_STOCK_THRESHOLD, InventoryItem, ItemFields, ItemId, StockStatus,
};
pub use price::{UnitPrice, cents_to_decimal};
pub use sort::{ItemOrder, SortKey};
pub use summary::InventorySummary;
pub use transaction::{StockOutPolicy, StockTransaction, TransactionType};
