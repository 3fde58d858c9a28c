pub mod aggregate;
pub mod analyzer;
pub mod report;

pub use crate::domain::model::{SalesData, SellerReportRow};
pub use crate::domain::ports::{BonusStrategy, RevenueStrategy};
pub use crate::utils::error::Result;
