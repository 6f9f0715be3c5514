use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity, EntityId, ValueObject};

use crate::price::UnitPrice;

/// Default boundary below which a stocked item counts as "low stock".
pub const DEFAULT_LOW_STOCK_THRESHOLD: u64 = 10;

/// Inventory item identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub EntityId);

impl ItemId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }

    /// Parse a raw id (e.g. from a URL path); blank strings are rejected.
    pub fn parse(raw: impl Into<String>) -> DomainResult<Self> {
        EntityId::parse(raw).map(Self)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl core::str::FromStr for ItemId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Editable attributes of an item: everything except its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemFields {
    pub product_name: String,
    pub sku: String,
    pub category: String,
    pub current_stock: u64,
    pub unit_price: UnitPrice,
}

impl ValueObject for ItemFields {}

impl ItemFields {
    /// Reject records with blank text attributes.
    ///
    /// Stock and price are already non-negative by construction.
    pub fn validate(&self) -> DomainResult<()> {
        if self.product_name.trim().is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }
        if self.sku.trim().is_empty() {
            return Err(DomainError::validation("sku cannot be empty"));
        }
        if self.category.trim().is_empty() {
            return Err(DomainError::validation("category cannot be empty"));
        }
        Ok(())
    }
}

/// Stock level classification shown next to each item.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    InStock,
}

impl StockStatus {
    pub fn classify(stock: u64, low_stock_threshold: u64) -> Self {
        if stock == 0 {
            StockStatus::OutOfStock
        } else if stock < low_stock_threshold {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "Out of Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::InStock => "In Stock",
        }
    }
}

/// An inventory record.
///
/// The id is fixed at construction; attributes live in [`ItemFields`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    id: ItemId,
    #[serde(flatten)]
    pub fields: ItemFields,
}

impl InventoryItem {
    pub fn new(id: ItemId, fields: ItemFields) -> Self {
        Self { id, fields }
    }

    pub fn id_typed(&self) -> &ItemId {
        &self.id
    }

    pub fn product_name(&self) -> &str {
        &self.fields.product_name
    }

    pub fn sku(&self) -> &str {
        &self.fields.sku
    }

    pub fn category(&self) -> &str {
        &self.fields.category
    }

    pub fn current_stock(&self) -> u64 {
        self.fields.current_stock
    }

    pub fn unit_price(&self) -> UnitPrice {
        self.fields.unit_price
    }

    /// Stock on hand times unit price, in cents. Saturates instead of wrapping.
    pub fn stock_value(&self) -> u64 {
        self.fields
            .current_stock
            .saturating_mul(self.fields.unit_price.cents())
    }

    pub fn status(&self, low_stock_threshold: u64) -> StockStatus {
        StockStatus::classify(self.fields.current_stock, low_stock_threshold)
    }

    /// Case-insensitive substring match on the product name.
    pub fn matches_name(&self, query: &str) -> bool {
        let query = query.trim();
        query.is_empty()
            || self
                .fields
                .product_name
                .to_lowercase()
                .contains(&query.to_lowercase())
    }

    pub fn into_parts(self) -> (ItemId, ItemFields) {
        (self.id, self.fields)
    }
}

impl Entity for InventoryItem {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
