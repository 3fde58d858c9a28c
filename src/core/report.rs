use crate::core::aggregate::SellerAccumulator;
use crate::domain::model::{Seller, SellerReportRow, TopProduct};
use crate::domain::ports::BonusStrategy;
use std::collections::HashMap;

const TOP_PRODUCTS_LIMIT: usize = 10;

/// Ranks accumulators by profit descending and shapes the final rows.
///
/// Profit ties keep the order sellers were first seen during aggregation
/// (the sort is stable). Sellers without a single resolved line item are
/// dropped before ranking, so `total` only counts sellers that appear in
/// the report.
pub fn build_report<B: BonusStrategy>(
    accumulators: Vec<SellerAccumulator>,
    sellers: &[Seller],
    bonus: &B,
) -> Vec<SellerReportRow> {
    let by_id: HashMap<&str, &Seller> = sellers
        .iter()
        .map(|seller| (seller.id.as_str(), seller))
        .collect();

    let mut ranked: Vec<SellerAccumulator> = accumulators
        .into_iter()
        .filter(SellerAccumulator::has_resolved_items)
        .collect();
    ranked.sort_by(|a, b| b.profit.total_cmp(&a.profit));

    let total = ranked.len();
    let mut rows = Vec::with_capacity(total);
    for (index, accumulator) in ranked.iter().enumerate() {
        let seller = match by_id.get(accumulator.seller_id.as_str()) {
            Some(seller) => *seller,
            None => {
                // Cannot happen when accumulators come from aggregate(),
                // which only admits known seller ids.
                tracing::warn!(
                    "No reference data for seller {}, dropping row",
                    accumulator.seller_id
                );
                continue;
            }
        };

        rows.push(SellerReportRow {
            seller_id: accumulator.seller_id.clone(),
            name: seller.display_name(),
            revenue: accumulator.revenue.round() as i64,
            profit: accumulator.profit.round() as i64,
            sales_count: accumulator.sales_count,
            top_products: top_products(accumulator),
            bonus: bonus.bonus(index, total, seller),
        });
    }
    rows
}

/// Highest-quantity skus for one seller, capped at ten. Quantity ties keep
/// first-seen sku order.
fn top_products(accumulator: &SellerAccumulator) -> Vec<TopProduct> {
    let mut products: Vec<TopProduct> = accumulator
        .quantities()
        .iter()
        .map(|entry| TopProduct {
            sku: entry.sku.clone(),
            quantity: entry.quantity,
        })
        .collect();
    products.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    products.truncate(TOP_PRODUCTS_LIMIT);
    products
}
