//! Demo catalogue used to populate a fresh store.

use stockroom_core::EntityId;
use stockroom_inventory::{InventoryItem, ItemFields, ItemId, UnitPrice};

const DEMO_ITEMS: [(&str, &str, &str, &str, u64, u64); 10] = [
    ("1", "Wireless Mouse", "WM-1001", "Accessories", 25, 1599),
    ("2", "Mechanical Keyboard", "MK-2002", "Accessories", 8, 5999),
    ("3", "HD Monitor", "HDM-3003", "Displays", 0, 12999),
    ("4", "USB-C Hub", "USBC-4004", "Accessories", 15, 2999),
    ("5", "Laptop Stand", "LS-5005", "Accessories", 12, 2499),
    ("6", "Webcam", "WC-6006", "Cameras", 20, 4999),
    ("7", "Bluetooth Speaker", "BS-7007", "Audio", 10, 3999),
    ("8", "Portable SSD", "SSD-8008", "Storage", 5, 9999),
    ("9", "Ergonomic Chair", "EC-9009", "Furniture", 3, 19999),
    ("10", "Desk Lamp", "DL-1010", "Lighting", 18, 1999),
];

/// The ten sample items shown on a fresh dashboard (ids `"1"` to `"10"`).
pub fn demo_catalogue() -> Vec<InventoryItem> {
    DEMO_ITEMS
        .iter()
        .filter_map(|&(id, name, sku, category, stock, cents)| {
            let id = EntityId::parse(id).ok()?;
            Some(InventoryItem::new(
                ItemId::new(id),
                ItemFields {
                    product_name: name.to_string(),
                    sku: sku.to_string(),
                    category: category.to_string(),
                    current_stock: stock,
                    unit_price: UnitPrice::from_cents(cents),
                },
            ))
        })
        .collect()
}
