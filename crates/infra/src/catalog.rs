//! CRUD façade over an [`ItemStore`].

use stockroom_core::{DomainError, DomainResult, IdGenerator, IdStrategy};
use stockroom_inventory::{InventoryItem, ItemFields, ItemId};

use crate::read_model::ItemStore;

/// Add / edit / delete operations, each returning a copy of the result.
#[derive(Debug)]
pub struct ItemCatalog<S>
where
    S: ItemStore,
{
    store: S,
    ids: IdGenerator,
}

impl<S> ItemCatalog<S>
where
    S: ItemStore,
{
    pub fn new(store: S, id_strategy: IdStrategy) -> Self {
        Self {
            store,
            ids: IdGenerator::new(id_strategy),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Store a new item under a freshly generated id.
    ///
    /// Candidates that are already taken (seeded or upserted elsewhere) are
    /// skipped; the generator never repeats, so the loop always terminates.
    pub fn add(&self, fields: ItemFields) -> DomainResult<InventoryItem> {
        fields.validate()?;

        loop {
            let id = ItemId::new(self.ids.next_id());
            let item = InventoryItem::new(id, fields.clone());
            if self.store.insert_new(item.clone()) {
                tracing::info!(item_id = %item.id_typed(), sku = %item.sku(), "item added");
                return Ok(item);
            }
            tracing::debug!(item_id = %item.id_typed(), "generated id already taken; retrying");
        }
    }

    /// Overwrite an existing item's fields.
    ///
    /// Unknown ids fail with [`DomainError::NotFound`] and never create a record.
    pub fn edit(&self, item: InventoryItem) -> DomainResult<InventoryItem> {
        item.fields.validate()?;

        let (id, fields) = item.into_parts();
        let result = self.store.modify::<DomainError>(&id, &mut |stored| {
            stored.fields = fields.clone();
            Ok(())
        });

        match result {
            Some(updated) => {
                let updated = updated?;
                tracing::info!(item_id = %id, "item edited");
                Ok(updated)
            }
            None => {
                tracing::warn!(item_id = %id, "edit rejected: item not found");
                Err(DomainError::not_found())
            }
        }
    }

    /// Remove an item. Returns whether it existed.
    pub fn delete(&self, id: &ItemId) -> bool {
        let removed = self.store.remove(id);
        if removed {
            tracing::info!(item_id = %id, "item deleted");
        } else {
            tracing::debug!(item_id = %id, "delete ignored: item not found");
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::read_model::InMemoryItemStore;
    use crate::seed::demo_catalogue;
    use std::sync::Arc;
    use stockroom_inventory::UnitPrice;

    fn fields(name: &str, stock: u64) -> ItemFields {
        ItemFields {
            product_name: name.to_string(),
            sku: "GD-0001".to_string(),
            category: "Electronics".to_string(),
            current_stock: stock,
            unit_price: UnitPrice::from_cents(2500),
        }
    }

    fn catalog() -> ItemCatalog<Arc<InMemoryItemStore>> {
        ItemCatalog::new(Arc::new(InMemoryItemStore::new()), IdStrategy::Sequential)
    }

    #[test]
    fn add_then_get_returns_input_plus_id() {
        let catalog = catalog();
        let input = fields("Graphics Dock", 4);

        let added = catalog.add(input.clone()).unwrap();
        let fetched = catalog.store().get(added.id_typed()).unwrap();

        assert_eq!(fetched, added);
        assert_eq!(fetched.fields, input);
    }

    #[test]
    fn add_rejects_invalid_fields_without_storing() {
        let catalog = catalog();
        let err = catalog.add(fields("", 1)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(catalog.store().is_empty());
    }

    #[test]
    fn sequential_ids_skip_seeded_ones() {
        let store = Arc::new(InMemoryItemStore::with_items(demo_catalogue()));
        let catalog = ItemCatalog::new(store, IdStrategy::Sequential);

        let added = catalog.add(fields("Graphics Dock", 1)).unwrap();
        assert_eq!(added.id_typed().as_str(), "11");
        assert_eq!(catalog.store().len(), 11);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let catalog = catalog();
        let first = catalog.add(fields("A", 1)).unwrap();
        assert!(catalog.delete(first.id_typed()));

        let second = catalog.add(fields("B", 1)).unwrap();
        assert_ne!(first.id_typed(), second.id_typed());
    }

    #[test]
    fn uuid_ids_are_unique() {
        let catalog = ItemCatalog::new(InMemoryItemStore::new(), IdStrategy::Uuid);
        let a = catalog.add(fields("A", 1)).unwrap();
        let b = catalog.add(fields("B", 1)).unwrap();
        assert_ne!(a.id_typed(), b.id_typed());
        assert_eq!(catalog.store().len(), 2);
    }

    #[test]
    fn edit_overwrites_fields_and_keeps_id() {
        let catalog = catalog();
        let added = catalog.add(fields("Graphics Dock", 4)).unwrap();

        let mut changed = added.clone();
        changed.fields.product_name = "Graphics Dock Pro".to_string();
        changed.fields.current_stock = 12;

        let edited = catalog.edit(changed.clone()).unwrap();
        assert_eq!(edited, changed);
        assert_eq!(catalog.store().get(added.id_typed()).unwrap(), changed);
    }

    #[test]
    fn edit_unknown_id_is_not_found_and_changes_nothing() {
        let store = Arc::new(InMemoryItemStore::with_items(demo_catalogue()));
        let catalog = ItemCatalog::new(store.clone(), IdStrategy::Sequential);
        let before = store.list();

        let ghost = InventoryItem::new(ItemId::parse("404").unwrap(), fields("Ghost", 1));
        assert_eq!(catalog.edit(ghost.clone()), Err(DomainError::NotFound));
        assert_eq!(catalog.edit(ghost), Err(DomainError::NotFound));

        assert_eq!(store.list(), before);
    }

    #[test]
    fn edit_with_invalid_fields_is_rejected() {
        let catalog = catalog();
        let added = catalog.add(fields("Graphics Dock", 4)).unwrap();

        let mut bad = added.clone();
        bad.fields.sku = " ".to_string();
        assert!(matches!(catalog.edit(bad), Err(DomainError::Validation(_))));
        assert_eq!(catalog.store().get(added.id_typed()).unwrap(), added);
    }

    #[test]
    fn delete_reports_presence() {
        let catalog = catalog();
        let added = catalog.add(fields("A", 1)).unwrap();
        assert!(catalog.delete(added.id_typed()));
        assert!(!catalog.delete(added.id_typed()));
        assert!(catalog.store().get(added.id_typed()).is_none());
    }
}
