//! Stock transaction processor.

use stockroom_core::{DomainError, DomainResult};
use stockroom_inventory::{InventoryItem, StockOutPolicy, StockTransaction};

use crate::read_model::ItemStore;

/// Applies one stock adjustment to one item.
///
/// Resolution, arithmetic and write-back all happen inside
/// [`ItemStore::modify`], so two adjustments to the same item are serialized.
#[derive(Debug)]
pub struct TransactionProcessor<S>
where
    S: ItemStore,
{
    store: S,
    policy: StockOutPolicy,
}

impl<S> TransactionProcessor<S>
where
    S: ItemStore,
{
    pub fn new(store: S, policy: StockOutPolicy) -> Self {
        Self { store, policy }
    }

    /// Apply `tx` and return a copy of the updated item.
    ///
    /// - unknown item: [`DomainError::NotFound`], nothing mutated
    /// - zero amount: [`DomainError::Validation`]
    /// - stock-out shortfall under [`StockOutPolicy::Reject`]:
    ///   [`DomainError::InsufficientStock`], stock unchanged
    pub fn apply(&self, tx: &StockTransaction) -> DomainResult<InventoryItem> {
        tx.validate()?;

        let policy = self.policy;
        let mut previous = 0;
        let outcome = self.store.modify::<DomainError>(&tx.item_id, &mut |item| {
            previous = item.current_stock();
            tx.apply_to(item, policy)
        });

        match outcome {
            None => {
                tracing::warn!(item_id = %tx.item_id, kind = %tx.kind, "stock transaction for unknown item");
                Err(DomainError::not_found())
            }
            Some(Err(err)) => {
                tracing::warn!(
                    item_id = %tx.item_id,
                    kind = %tx.kind,
                    amount = tx.amount,
                    error = %err,
                    "stock transaction rejected"
                );
                Err(err)
            }
            Some(Ok(item)) => {
                tracing::info!(
                    item_id = %tx.item_id,
                    kind = %tx.kind,
                    amount = tx.amount,
                    previous_stock = previous,
                    current_stock = item.current_stock(),
                    "stock transaction applied"
                );
                Ok(item)
            }
        }
    }
}
