use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use stockroom_inventory::{InventoryItem, ItemId};

/// Authoritative id → item storage.
///
/// Every read hands out clones; callers never hold references into the store.
/// `modify` is the only read-modify-write path and must run its closure under
/// exclusive access so concurrent adjustments cannot lose updates.
pub trait ItemStore: Send + Sync {
    fn list(&self) -> Vec<InventoryItem>;
    fn get(&self, id: &ItemId) -> Option<InventoryItem>;
    fn upsert(&self, item: InventoryItem);
    /// Insert only if the id is free. Returns whether the item was inserted.
    fn insert_new(&self, item: InventoryItem) -> bool;
    /// Remove by id. Returns whether an item existed.
    fn remove(&self, id: &ItemId) -> bool;
    /// Run `f` against the stored item while holding exclusive access.
    ///
    /// Returns `None` when the id is absent (and `f` is not called). When `f`
    /// fails the stored item is left as it was.
    fn modify<E>(
        &self,
        id: &ItemId,
        f: &mut dyn FnMut(&mut InventoryItem) -> Result<(), E>,
    ) -> Option<Result<InventoryItem, E>>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S> ItemStore for Arc<S>
where
    S: ItemStore,
{
    fn list(&self) -> Vec<InventoryItem> {
        (**self).list()
    }

    fn get(&self, id: &ItemId) -> Option<InventoryItem> {
        (**self).get(id)
    }

    fn upsert(&self, item: InventoryItem) {
        (**self).upsert(item)
    }

    fn insert_new(&self, item: InventoryItem) -> bool {
        (**self).insert_new(item)
    }

    fn remove(&self, id: &ItemId) -> bool {
        (**self).remove(id)
    }

    fn modify<E>(
        &self,
        id: &ItemId,
        f: &mut dyn FnMut(&mut InventoryItem) -> Result<(), E>,
    ) -> Option<Result<InventoryItem, E>> {
        (**self).modify(id, f)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

/// In-memory store guarded by a single lock.
///
/// Critical sections never leave the map half-updated, so a poisoned lock is
/// recovered rather than propagated.
#[derive(Debug, Default)]
pub struct InMemoryItemStore {
    inner: RwLock<HashMap<ItemId, InventoryItem>>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `items` (later duplicates win).
    pub fn with_items(items: impl IntoIterator<Item = InventoryItem>) -> Self {
        let map = items
            .into_iter()
            .map(|item| (item.id_typed().clone(), item))
            .collect();
        Self {
            inner: RwLock::new(map),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<ItemId, InventoryItem>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<ItemId, InventoryItem>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ItemStore for InMemoryItemStore {
    fn list(&self) -> Vec<InventoryItem> {
        let mut items: Vec<InventoryItem> = self.read().values().cloned().collect();
        items.sort_by(|a, b| a.id_typed().cmp(b.id_typed()));
        items
    }

    fn get(&self, id: &ItemId) -> Option<InventoryItem> {
        self.read().get(id).cloned()
    }

    fn upsert(&self, item: InventoryItem) {
        self.write().insert(item.id_typed().clone(), item);
    }

    fn insert_new(&self, item: InventoryItem) -> bool {
        let mut map = self.write();
        if map.contains_key(item.id_typed()) {
            return false;
        }
        map.insert(item.id_typed().clone(), item);
        true
    }

    fn remove(&self, id: &ItemId) -> bool {
        self.write().remove(id).is_some()
    }

    fn modify<E>(
        &self,
        id: &ItemId,
        f: &mut dyn FnMut(&mut InventoryItem) -> Result<(), E>,
    ) -> Option<Result<InventoryItem, E>> {
        let mut map = self.write();
        let stored = map.get_mut(id)?;

        // Work on a copy so a failing closure cannot leave partial edits behind.
        let mut draft = stored.clone();
        match f(&mut draft) {
            Ok(()) => {
                *stored = draft.clone();
                Some(Ok(draft))
            }
            Err(e) => Some(Err(e)),
        }
    }

    fn len(&self) -> usize {
        self.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_inventory::{ItemFields, UnitPrice};

    fn item(id: &str, stock: u64) -> InventoryItem {
        InventoryItem::new(
            ItemId::parse(id).unwrap(),
            ItemFields {
                product_name: format!("Item {id}"),
                sku: format!("SKU-{id}"),
                category: "Accessories".to_string(),
                current_stock: stock,
                unit_price: UnitPrice::from_cents(100),
            },
        )
    }

    fn id(raw: &str) -> ItemId {
        ItemId::parse(raw).unwrap()
    }

    #[test]
    fn upsert_get_remove() {
        let store = InMemoryItemStore::new();
        assert!(store.is_empty());

        store.upsert(item("1", 5));
        assert_eq!(store.get(&id("1")).unwrap().current_stock(), 5);

        store.upsert(item("1", 9));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&id("1")).unwrap().current_stock(), 9);

        assert!(store.remove(&id("1")));
        assert!(!store.remove(&id("1")));
        assert!(store.get(&id("1")).is_none());
    }

    #[test]
    fn reads_are_copies() {
        let store = InMemoryItemStore::with_items([item("1", 5)]);

        let mut copy = store.get(&id("1")).unwrap();
        copy.fields.current_stock = 500;
        let mut listed = store.list();
        listed[0].fields.product_name = "Mutated".to_string();

        let stored = store.get(&id("1")).unwrap();
        assert_eq!(stored.current_stock(), 5);
        assert_eq!(stored.product_name(), "Item 1");
    }

    #[test]
    fn insert_new_refuses_taken_ids() {
        let store = InMemoryItemStore::with_items([item("1", 5)]);
        assert!(!store.insert_new(item("1", 0)));
        assert_eq!(store.get(&id("1")).unwrap().current_stock(), 5);
        assert!(store.insert_new(item("2", 0)));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn list_is_sorted_by_id() {
        let store = InMemoryItemStore::with_items([item("b", 1), item("a", 2), item("c", 3)]);
        let ids: Vec<String> = store.list().iter().map(|i| i.id_typed().to_string()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn modify_missing_item_does_not_call_closure() {
        let store = InMemoryItemStore::new();
        let mut called = false;
        let out = store.modify::<()>(&id("9"), &mut |_| {
            called = true;
            Ok(())
        });
        assert!(out.is_none());
        assert!(!called);
    }

    #[test]
    fn failed_modify_leaves_item_unchanged() {
        let store = InMemoryItemStore::with_items([item("1", 5)]);
        let out = store.modify::<&str>(&id("1"), &mut |it| {
            it.fields.current_stock = 0;
            Err("nope")
        });
        assert_eq!(out, Some(Err("nope")));
        assert_eq!(store.get(&id("1")).unwrap().current_stock(), 5);
    }

    #[test]
    fn concurrent_modifies_lose_no_updates() {
        let store = Arc::new(InMemoryItemStore::with_items([item("1", 0)]));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for _ in 0..500 {
                        store
                            .modify::<()>(&id("1"), &mut |it| {
                                it.fields.current_stock += 1;
                                Ok(())
                            })
                            .unwrap()
                            .unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(store.get(&id("1")).unwrap().current_stock(), 8 * 500);
    }
}
