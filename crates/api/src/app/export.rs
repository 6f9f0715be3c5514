//! CSV rendering for the inventory list download.

use serde::Serialize;

use stockroom_inventory::{InventoryItem, UnitPrice};

pub const CSV_FILENAME: &str = "inventory-list.csv";

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "ID")]
    id: &'a str,
    #[serde(rename = "Product Name")]
    product_name: &'a str,
    #[serde(rename = "SKU")]
    sku: &'a str,
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Current Stock")]
    current_stock: u64,
    #[serde(rename = "Status")]
    status: &'static str,
    #[serde(rename = "Unit Price")]
    unit_price: String,
    #[serde(rename = "Total Value")]
    total_value: String,
}

/// One header row, then one row per item in the given order.
pub fn items_to_csv(
    items: &[InventoryItem],
    low_stock_threshold: u64,
) -> Result<Vec<u8>, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if items.is_empty() {
        writer.write_record([
            "ID",
            "Product Name",
            "SKU",
            "Category",
            "Current Stock",
            "Status",
            "Unit Price",
            "Total Value",
        ])?;
    }
    for item in items {
        writer.serialize(CsvRow {
            id: item.id_typed().as_str(),
            product_name: item.product_name(),
            sku: item.sku(),
            category: item.category(),
            current_stock: item.current_stock(),
            status: item.status(low_stock_threshold).label(),
            unit_price: item.unit_price().to_string(),
            total_value: UnitPrice::from_cents(item.stock_value()).to_string(),
        })?;
    }
    writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))
}
