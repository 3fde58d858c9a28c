// Concrete revenue/profit and bonus policies, plus the selector enums used
// by the configuration layer to pick one at runtime.

pub mod bonus;
pub mod revenue;

pub use bonus::{FlatTierBonus, RankScaledBonus};
pub use revenue::{CostBasisRevenue, SimpleRevenue};

use crate::domain::model::{Product, PurchaseRecord, Seller};
use crate::domain::ports::{BonusStrategy, RevenueStrategy};
use serde::{Deserialize, Serialize};

/// Selectable revenue/profit policies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum RevenueKind {
    /// Discounted unit price minus cost basis, times quantity.
    #[default]
    CostBasis,
    /// Discounted sale revenue without a cost basis.
    Simple,
}

/// Selectable bonus policies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum BonusKind {
    /// Currency bonus scaled by rank tier, title and distance from the
    /// bottom of the ranking.
    #[default]
    RankScaled,
    /// Flat rate by rank tier, no currency base.
    FlatTier,
}

impl RevenueStrategy for RevenueKind {
    fn line_profit(&self, purchase: &PurchaseRecord, product: &Product) -> f64 {
        match self {
            RevenueKind::CostBasis => CostBasisRevenue.line_profit(purchase, product),
            RevenueKind::Simple => SimpleRevenue.line_profit(purchase, product),
        }
    }
}

impl BonusStrategy for BonusKind {
    fn bonus(&self, index: usize, total: usize, seller: &Seller) -> f64 {
        match self {
            BonusKind::RankScaled => RankScaledBonus::default().bonus(index, total, seller),
            BonusKind::FlatTier => FlatTierBonus.bonus(index, total, seller),
        }
    }
}
