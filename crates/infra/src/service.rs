//! Async inventory call surface.
//!
//! One store instance backs both the CRUD façade and the transaction
//! processor. Every operation first awaits the configured simulated latency,
//! then runs synchronously against the store; no lock is held across an
//! `.await`.

use std::sync::Arc;

use stockroom_core::DomainResult;
use stockroom_inventory::{
    InventoryItem, InventorySummary, ItemFields, ItemId, ItemOrder, StockTransaction,
    TransactionType,
};

use crate::catalog::ItemCatalog;
use crate::config::InventoryConfig;
use crate::processor::TransactionProcessor;
use crate::read_model::{InMemoryItemStore, ItemStore};
use crate::seed::demo_catalogue;

#[derive(Debug)]
pub struct InventoryService<S = InMemoryItemStore>
where
    S: ItemStore,
{
    store: Arc<S>,
    catalog: ItemCatalog<Arc<S>>,
    processor: TransactionProcessor<Arc<S>>,
    config: InventoryConfig,
}

impl InventoryService<InMemoryItemStore> {
    /// Build an in-memory service; seeds the demo catalogue if configured.
    pub fn in_memory(config: InventoryConfig) -> Self {
        let store = if config.seed_demo_data {
            InMemoryItemStore::with_items(demo_catalogue())
        } else {
            InMemoryItemStore::new()
        };
        Self::with_store(Arc::new(store), config)
    }
}

impl<S> InventoryService<S>
where
    S: ItemStore,
{
    pub fn with_store(store: Arc<S>, config: InventoryConfig) -> Self {
        tracing::info!(
            items = store.len(),
            policy = ?config.stock_out_policy,
            id_strategy = ?config.id_strategy,
            latency_ms = config.simulated_latency.as_millis() as u64,
            "inventory service ready"
        );
        Self {
            catalog: ItemCatalog::new(store.clone(), config.id_strategy),
            processor: TransactionProcessor::new(store.clone(), config.stock_out_policy),
            store,
            config,
        }
    }

    pub fn config(&self) -> &InventoryConfig {
        &self.config
    }

    async fn latency(&self) {
        if !self.config.simulated_latency.is_zero() {
            tokio::time::sleep(self.config.simulated_latency).await;
        }
    }

    pub async fn list_items(&self) -> Vec<InventoryItem> {
        self.latency().await;
        let items = self.store.list();
        tracing::debug!(count = items.len(), "listed items");
        items
    }

    /// Items whose product name contains `query` (case-insensitive).
    pub async fn search_items(&self, query: &str) -> Vec<InventoryItem> {
        self.latency().await;
        self.store
            .list()
            .into_iter()
            .filter(|item| item.matches_name(query))
            .collect()
    }

    /// Filtered by name (an empty query keeps everything), then ordered.
    pub async fn browse_items(&self, query: &str, order: ItemOrder) -> Vec<InventoryItem> {
        let mut items = self.search_items(query).await;
        order.sort(&mut items);
        tracing::debug!(
            count = items.len(),
            key = ?order.key,
            descending = order.descending,
            "browsed items"
        );
        items
    }

    pub async fn get_item(&self, id: &ItemId) -> Option<InventoryItem> {
        self.latency().await;
        self.store.get(id)
    }

    pub async fn add_item(&self, fields: ItemFields) -> DomainResult<InventoryItem> {
        self.latency().await;
        self.catalog.add(fields)
    }

    pub async fn edit_item(&self, item: InventoryItem) -> DomainResult<InventoryItem> {
        self.latency().await;
        self.catalog.edit(item)
    }

    pub async fn delete_item(&self, id: &ItemId) -> bool {
        self.latency().await;
        self.catalog.delete(id)
    }

    pub async fn apply_stock_transaction(
        &self,
        item_id: ItemId,
        kind: TransactionType,
        amount: u64,
    ) -> DomainResult<InventoryItem> {
        self.latency().await;
        let tx = StockTransaction::new(item_id, kind, amount)?;
        self.processor.apply(&tx)
    }

    pub async fn summary(&self) -> InventorySummary {
        self.latency().await;
        InventorySummary::from_items(&self.store.list(), self.config.low_stock_threshold)
    }
}
