// Adapters layer: the file-backed edges around the in-memory analysis.
// JSON input loading on one side, CSV/JSON report export on the other.

use crate::domain::model::SellerReportRow;
use crate::utils::error::Result;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Reads a raw JSON sales bundle from disk. Structural validation happens
/// in the analyzer, not here.
pub fn load_sales_data(path: impl AsRef<Path>) -> Result<Value> {
    let content = fs::read_to_string(path)?;
    let value = serde_json::from_str(&content)?;
    Ok(value)
}

pub fn write_json_report(path: impl AsRef<Path>, rows: &[SellerReportRow]) -> Result<()> {
    ensure_parent(path.as_ref())?;
    let json = serde_json::to_string_pretty(rows)?;
    fs::write(path, json)?;
    Ok(())
}

/// CSV export. Top products are flattened into one `sku:quantity` column
/// joined with `;`, keeping the row shape tabular.
pub fn write_csv_report(path: impl AsRef<Path>, rows: &[SellerReportRow]) -> Result<()> {
    ensure_parent(path.as_ref())?;
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "seller_id",
        "name",
        "revenue",
        "profit",
        "sales_count",
        "bonus",
        "top_products",
    ])?;

    for row in rows {
        let top_products = row
            .top_products
            .iter()
            .map(|product| format!("{}:{}", product.sku, product.quantity))
            .collect::<Vec<_>>()
            .join(";");
        let record = [
            row.seller_id.clone(),
            row.name.clone(),
            row.revenue.to_string(),
            row.profit.to_string(),
            row.sales_count.to_string(),
            row.bonus.to_string(),
            top_products,
        ];
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
