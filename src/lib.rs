pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod strategies;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::ReportConfig;
pub use core::analyzer::SalesAnalyzer;
pub use domain::model::{SalesData, SellerReportRow};
pub use strategies::{BonusKind, RevenueKind};
pub use utils::error::{ReportError, Result};
