use crate::domain::model::{Product, PurchaseRecord, Seller};

/// Policy for the profit contributed by one product's line item within one
/// purchase. Implementations must be pure: same inputs, same result.
pub trait RevenueStrategy: Send + Sync {
    fn line_profit(&self, purchase: &PurchaseRecord, product: &Product) -> f64;
}

/// Policy for a seller's bonus given its zero-based profit rank and the
/// total number of ranked sellers. Callers guarantee `total >= 1`.
pub trait BonusStrategy: Send + Sync {
    fn bonus(&self, index: usize, total: usize, seller: &Seller) -> f64;
}

// Plain functions and closures with the matching signature work as
// strategies, mirroring how callers originally passed bare functions.
impl<F> RevenueStrategy for F
where
    F: Fn(&PurchaseRecord, &Product) -> f64 + Send + Sync,
{
    fn line_profit(&self, purchase: &PurchaseRecord, product: &Product) -> f64 {
        self(purchase, product)
    }
}

impl<F> BonusStrategy for F
where
    F: Fn(usize, usize, &Seller) -> f64 + Send + Sync,
{
    fn bonus(&self, index: usize, total: usize, seller: &Seller) -> f64 {
        self(index, total, seller)
    }
}
