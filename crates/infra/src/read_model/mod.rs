//! Item storage abstractions.

pub mod item_store;

pub use item_store::{InMemoryItemStore, ItemStore};
