use crate::core::aggregate::aggregate;
use crate::core::report::build_report;
use crate::domain::model::{SalesData, SellerReportRow};
use crate::domain::ports::{BonusStrategy, RevenueStrategy};
use crate::strategies::{CostBasisRevenue, RankScaledBonus};
use crate::utils::error::Result;
use crate::utils::validation::parse_sales_data;

/// Computes the per-seller sales performance report.
///
/// The two policies are fixed at construction; swap them to change how
/// line profit and bonuses are scored. `SalesAnalyzer::default()` wires
/// the cost-basis profit and rank-scaled bonus policies.
pub struct SalesAnalyzer<R: RevenueStrategy, B: BonusStrategy> {
    revenue: R,
    bonus: B,
}

impl<R: RevenueStrategy, B: BonusStrategy> SalesAnalyzer<R, B> {
    pub fn new(revenue: R, bonus: B) -> Self {
        Self { revenue, bonus }
    }

    /// Runs one full analysis over an already-typed input bundle.
    pub fn analyze(&self, data: &SalesData) -> Vec<SellerReportRow> {
        let accumulators = aggregate(data, &self.revenue);
        tracing::debug!(
            "Aggregated {} purchase records into {} seller accumulators",
            data.purchase_records.len(),
            accumulators.len()
        );
        build_report(accumulators, &data.sellers, &self.bonus)
    }

    /// Validates a raw JSON bundle, then runs the analysis.
    ///
    /// Fails with `ReportError::InvalidInput` before touching any record
    /// when the bundle is not an object carrying the `sellers`, `products`
    /// and `purchase_records` collections.
    pub fn analyze_value(&self, value: &serde_json::Value) -> Result<Vec<SellerReportRow>> {
        let data = parse_sales_data(value)?;
        Ok(self.analyze(&data))
    }
}

impl Default for SalesAnalyzer<CostBasisRevenue, RankScaledBonus> {
    fn default() -> Self {
        Self::new(CostBasisRevenue, RankScaledBonus::default())
    }
}
