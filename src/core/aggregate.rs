use crate::domain::model::{Product, PurchaseRecord, SalesData, Seller};
use crate::domain::ports::RevenueStrategy;
use std::collections::HashMap;

/// Accumulated quantity for one sku.
#[derive(Debug, Clone)]
pub struct ProductQuantity {
    pub sku: String,
    pub quantity: u64,
}

/// Running totals for one seller, built over the purchase scan.
///
/// Per-sku quantities are stored in first-seen order behind an index map,
/// so later tie-breaks on equal quantities stay deterministic.
#[derive(Debug, Clone)]
pub struct SellerAccumulator {
    pub seller_id: String,
    pub revenue: f64,
    pub profit: f64,
    pub sales_count: u64,
    sku_index: HashMap<String, usize>,
    quantities: Vec<ProductQuantity>,
}

impl SellerAccumulator {
    fn new(seller_id: &str) -> Self {
        Self {
            seller_id: seller_id.to_string(),
            revenue: 0.0,
            profit: 0.0,
            sales_count: 0,
            sku_index: HashMap::new(),
            quantities: Vec::new(),
        }
    }

    fn add_quantity(&mut self, sku: &str, quantity: u64) {
        match self.sku_index.get(sku) {
            Some(&slot) => self.quantities[slot].quantity += quantity,
            None => {
                self.sku_index.insert(sku.to_string(), self.quantities.len());
                self.quantities.push(ProductQuantity {
                    sku: sku.to_string(),
                    quantity,
                });
            }
        }
    }

    /// Per-sku quantities in the order the skus were first seen.
    pub fn quantities(&self) -> &[ProductQuantity] {
        &self.quantities
    }

    /// True once at least one line item resolved against the catalog.
    pub fn has_resolved_items(&self) -> bool {
        !self.quantities.is_empty()
    }
}

/// One deterministic pass over the purchase records.
///
/// Seller and product lookups are built once up front. Accumulators live
/// in a Vec arena addressed through a seller-id index and come back in
/// first-seen order. Purchases with an unknown seller id and line items
/// with an unknown sku are skipped, never failing the run.
pub fn aggregate<R: RevenueStrategy>(data: &SalesData, revenue: &R) -> Vec<SellerAccumulator> {
    let sellers: HashMap<&str, &Seller> = data
        .sellers
        .iter()
        .map(|seller| (seller.id.as_str(), seller))
        .collect();
    let products: HashMap<&str, &Product> = data
        .products
        .iter()
        .map(|product| (product.sku.as_str(), product))
        .collect();

    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut accumulators: Vec<SellerAccumulator> = Vec::new();

    for purchase in &data.purchase_records {
        if !sellers.contains_key(purchase.seller_id.as_str()) {
            tracing::debug!("Skipping purchase for unknown seller: {}", purchase.seller_id);
            continue;
        }

        let slot = *index.entry(purchase.seller_id.as_str()).or_insert_with(|| {
            accumulators.push(SellerAccumulator::new(&purchase.seller_id));
            accumulators.len() - 1
        });
        let accumulator = &mut accumulators[slot];

        // One sale per purchase record, regardless of line item count.
        accumulator.sales_count += 1;

        for item in &purchase.items {
            let product = match products.get(item.sku.as_str()) {
                Some(product) => *product,
                None => {
                    tracing::debug!("Skipping line item with unknown sku: {}", item.sku);
                    continue;
                }
            };

            // The strategy locates the line item by sku itself. Hand it a
            // view holding only the current item, so a purchase carrying
            // duplicate skus has each item's profit counted exactly once,
            // the same way revenue and quantities walk the items.
            let line_view = PurchaseRecord {
                seller_id: purchase.seller_id.clone(),
                items: vec![item.clone()],
            };

            accumulator.revenue += item.discounted_price() * item.quantity as f64;
            accumulator.profit += revenue.line_profit(&line_view, product);
            accumulator.add_quantity(&item.sku, item.quantity);
        }
    }

    accumulators
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{LineItem, PurchaseRecord};
    use crate::strategies::CostBasisRevenue;

    fn seller(id: &str) -> Seller {
        Seller {
            id: id.to_string(),
            first_name: None,
            last_name: None,
            name: None,
            position: String::new(),
        }
    }

    fn product(sku: &str, purchase_price: f64) -> Product {
        Product {
            sku: sku.to_string(),
            purchase_price,
        }
    }

    fn item(sku: &str, sale_price: f64, discount: f64, quantity: u64) -> LineItem {
        LineItem {
            sku: sku.to_string(),
            sale_price,
            discount,
            quantity,
        }
    }

    fn purchase(seller_id: &str, items: Vec<LineItem>) -> PurchaseRecord {
        PurchaseRecord {
            seller_id: seller_id.to_string(),
            items,
        }
    }

    #[test]
    fn test_sales_count_increments_per_purchase_record() {
        let data = SalesData {
            sellers: vec![seller("s1")],
            products: vec![product("A", 10.0)],
            purchase_records: vec![
                purchase("s1", vec![item("A", 20.0, 0.0, 3), item("A", 20.0, 0.0, 2)]),
                purchase("s1", vec![item("A", 20.0, 0.0, 1)]),
            ],
        };

        let accumulators = aggregate(&data, &CostBasisRevenue);
        assert_eq!(accumulators.len(), 1);
        assert_eq!(accumulators[0].sales_count, 2);
    }

    #[test]
    fn test_duplicate_sku_items_each_count_toward_profit() {
        let data = SalesData {
            sellers: vec![seller("s1")],
            products: vec![product("A", 10.0)],
            purchase_records: vec![purchase(
                "s1",
                vec![item("A", 20.0, 0.0, 3), item("A", 20.0, 0.0, 2)],
            )],
        };

        let accumulators = aggregate(&data, &CostBasisRevenue);
        assert_eq!(accumulators.len(), 1);
        // (20 - 10) * 3 + (20 - 10) * 2, not the first item twice
        assert_eq!(accumulators[0].profit, 50.0);
        assert_eq!(accumulators[0].revenue, 100.0);
        assert_eq!(accumulators[0].quantities()[0].quantity, 5);
    }

    #[test]
    fn test_unknown_sku_skips_line_item_only() {
        let data = SalesData {
            sellers: vec![seller("s1")],
            products: vec![product("A", 10.0)],
            purchase_records: vec![purchase(
                "s1",
                vec![item("MISSING", 99.0, 0.0, 5), item("A", 20.0, 0.0, 2)],
            )],
        };

        let accumulators = aggregate(&data, &CostBasisRevenue);
        assert_eq!(accumulators.len(), 1);
        assert_eq!(accumulators[0].revenue, 40.0);
        assert_eq!(accumulators[0].quantities().len(), 1);
        assert_eq!(accumulators[0].quantities()[0].sku, "A");
    }

    #[test]
    fn test_unknown_seller_skips_purchase() {
        let data = SalesData {
            sellers: vec![seller("s1")],
            products: vec![product("A", 10.0)],
            purchase_records: vec![purchase("ghost", vec![item("A", 20.0, 0.0, 1)])],
        };

        let accumulators = aggregate(&data, &CostBasisRevenue);
        assert!(accumulators.is_empty());
    }

    #[test]
    fn test_quantities_accumulate_across_purchases() {
        let data = SalesData {
            sellers: vec![seller("s1")],
            products: vec![product("A", 10.0), product("B", 5.0)],
            purchase_records: vec![
                purchase("s1", vec![item("A", 20.0, 0.0, 2)]),
                purchase("s1", vec![item("B", 10.0, 0.0, 1), item("A", 20.0, 0.0, 3)]),
            ],
        };

        let accumulators = aggregate(&data, &CostBasisRevenue);
        let quantities = accumulators[0].quantities();
        // first-seen order: A before B
        assert_eq!(quantities[0].sku, "A");
        assert_eq!(quantities[0].quantity, 5);
        assert_eq!(quantities[1].sku, "B");
        assert_eq!(quantities[1].quantity, 1);
    }

    #[test]
    fn test_accumulators_in_first_seen_seller_order() {
        let data = SalesData {
            sellers: vec![seller("s1"), seller("s2")],
            products: vec![product("A", 10.0)],
            purchase_records: vec![
                purchase("s2", vec![item("A", 20.0, 0.0, 1)]),
                purchase("s1", vec![item("A", 20.0, 0.0, 1)]),
                purchase("s2", vec![item("A", 20.0, 0.0, 1)]),
            ],
        };

        let accumulators = aggregate(&data, &CostBasisRevenue);
        assert_eq!(accumulators[0].seller_id, "s2");
        assert_eq!(accumulators[1].seller_id, "s1");
    }

    #[test]
    fn test_closure_as_revenue_strategy() {
        let data = SalesData {
            sellers: vec![seller("s1")],
            products: vec![product("A", 10.0)],
            purchase_records: vec![purchase("s1", vec![item("A", 20.0, 0.0, 2)])],
        };

        let flat = |_purchase: &PurchaseRecord, _product: &Product| 7.0;
        let accumulators = aggregate(&data, &flat);
        assert_eq!(accumulators[0].profit, 7.0);
    }
}
