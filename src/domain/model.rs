use serde::{Deserialize, Serialize};

/// Seller reference data. Upstream sources disagree on the name schema, so
/// both a `first_name`/`last_name` pair and a single `name` field are
/// accepted; `display_name` reconciles them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seller {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub position: String,
}

impl Seller {
    /// First/last joined with a single space when either is present,
    /// otherwise the plain `name` field, otherwise the seller id.
    pub fn display_name(&self) -> String {
        let first = self.first_name.as_deref().unwrap_or("").trim();
        let last = self.last_name.as_deref().unwrap_or("").trim();
        if !first.is_empty() || !last.is_empty() {
            return [first, last]
                .iter()
                .filter(|part| !part.is_empty())
                .copied()
                .collect::<Vec<_>>()
                .join(" ");
        }
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name.trim().to_string(),
            _ => self.id.clone(),
        }
    }
}

/// Catalog item with its cost basis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub purchase_price: f64,
}

/// One product sale within a purchase. Numeric fields absent from the
/// input deserialize as zero, so the aggregation code never handles nulls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub sale_price: f64,
    #[serde(default)]
    pub discount: f64,
    #[serde(default)]
    pub quantity: u64,
}

impl LineItem {
    /// Unit price after the percentage discount (clamped to 0-100).
    pub fn discounted_price(&self) -> f64 {
        self.sale_price * (1.0 - self.discount.clamp(0.0, 100.0) / 100.0)
    }
}

/// One transaction attributed to one seller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseRecord {
    #[serde(default)]
    pub seller_id: String,
    #[serde(default)]
    pub items: Vec<LineItem>,
}

/// The full input bundle for one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesData {
    pub sellers: Vec<Seller>,
    pub products: Vec<Product>,
    pub purchase_records: Vec<PurchaseRecord>,
}

/// One of a seller's highest-quantity products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopProduct {
    pub sku: String,
    pub quantity: u64,
}

/// Final report row for one seller, ordered by profit descending in the
/// report. Revenue and profit are rounded to whole currency units; the
/// float accumulators stay internal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SellerReportRow {
    pub seller_id: String,
    pub name: String,
    pub revenue: i64,
    pub profit: i64,
    pub sales_count: u64,
    pub top_products: Vec<TopProduct>,
    pub bonus: f64,
}
