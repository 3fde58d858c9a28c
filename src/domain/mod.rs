// Domain layer: the sales data model and the strategy ports injected into
// the analysis core.

pub mod model;
pub mod ports;
