use crate::domain::model::{Product, PurchaseRecord};
use crate::domain::ports::RevenueStrategy;

/// Round half away from zero to two fractional digits.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Default profit policy: unit margin after discount, times quantity.
///
/// Looks up the line item in the purchase whose sku matches the product;
/// a purchase without such an item contributes nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct CostBasisRevenue;

impl RevenueStrategy for CostBasisRevenue {
    fn line_profit(&self, purchase: &PurchaseRecord, product: &Product) -> f64 {
        match purchase.items.iter().find(|item| item.sku == product.sku) {
            Some(item) => {
                let margin = item.discounted_price() - product.purchase_price;
                round2(margin * item.quantity as f64)
            }
            None => 0.0,
        }
    }
}

/// Alternate policy: discounted sale revenue with no cost basis, kept from
/// an earlier incarnation of the report.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRevenue;

impl RevenueStrategy for SimpleRevenue {
    fn line_profit(&self, purchase: &PurchaseRecord, product: &Product) -> f64 {
        match purchase.items.iter().find(|item| item.sku == product.sku) {
            Some(item) => round2(item.discounted_price() * item.quantity as f64),
            None => 0.0,
        }
    }
}
