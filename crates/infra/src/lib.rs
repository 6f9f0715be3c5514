//! Infrastructure layer: storage, configuration, and the async service
//! wiring that sits between callers and the inventory domain.

pub mod catalog;
pub mod config;
pub mod processor;
pub mod read_model;
pub mod seed;
pub mod service;

pub use catalog::ItemCatalog;
pub use config::{ConfigError, InventoryConfig};
pub use processor::TransactionProcessor;
pub use read_model::{InMemoryItemStore, ItemStore};
pub use seed::demo_catalogue;
pub use service::InventoryService;
