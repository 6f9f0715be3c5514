//! Stock-in / stock-out adjustments.
//!
//! The arithmetic is pure: [`StockTransaction::apply_to`] computes the new
//! stock level for an item and never touches storage.

use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, ValueObject};

use crate::item::{InventoryItem, ItemId};

/// Direction of a stock adjustment.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    In,
    Out,
}

impl core::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            TransactionType::In => "in",
            TransactionType::Out => "out",
        })
    }
}

/// What to do when a stock-out asks for more than is on hand.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockOutPolicy {
    /// Truncate the result at zero.
    #[default]
    Clamp,
    /// Fail with [`DomainError::InsufficientStock`] and leave stock unchanged.
    Reject,
}

impl core::str::FromStr for StockOutPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clamp" => Ok(Self::Clamp),
            "reject" => Ok(Self::Reject),
            other => Err(DomainError::validation(format!(
                "unknown stock-out policy '{other}' (expected: clamp, reject)"
            ))),
        }
    }
}

/// A single stock adjustment request. Never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockTransaction {
    pub item_id: ItemId,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: u64,
}

impl ValueObject for StockTransaction {}

impl StockTransaction {
    /// Build a transaction; the amount must be positive.
    pub fn new(item_id: ItemId, kind: TransactionType, amount: u64) -> DomainResult<Self> {
        let tx = Self {
            item_id,
            kind,
            amount,
        };
        tx.validate()?;
        Ok(tx)
    }

    pub fn stock_in(item_id: ItemId, amount: u64) -> DomainResult<Self> {
        Self::new(item_id, TransactionType::In, amount)
    }

    pub fn stock_out(item_id: ItemId, amount: u64) -> DomainResult<Self> {
        Self::new(item_id, TransactionType::Out, amount)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.amount == 0 {
            return Err(DomainError::validation("amount must be at least 1"));
        }
        Ok(())
    }

    /// Stock level after applying this transaction to `current`.
    pub fn resulting_stock(&self, current: u64, policy: StockOutPolicy) -> DomainResult<u64> {
        self.validate()?;
        match (self.kind, policy) {
            (TransactionType::In, _) => Ok(current.saturating_add(self.amount)),
            (TransactionType::Out, StockOutPolicy::Clamp) => Ok(current.saturating_sub(self.amount)),
            (TransactionType::Out, StockOutPolicy::Reject) => current
                .checked_sub(self.amount)
                .ok_or_else(|| DomainError::insufficient_stock(current, self.amount)),
        }
    }

    /// Apply to an item in place. On error the item is left untouched.
    pub fn apply_to(&self, item: &mut InventoryItem, policy: StockOutPolicy) -> DomainResult<()> {
        if item.id_typed() != &self.item_id {
            return Err(DomainError::validation("transaction does not target this item"));
        }
        let new_stock = self.resulting_stock(item.current_stock(), policy)?;
        item.fields.current_stock = new_stock;
        Ok(())
    }
}
