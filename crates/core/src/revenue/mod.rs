//! Portfolio and per-agent revenue aggregation.

pub mod aggregator;
pub mod attribution;
pub mod types;


pub use aggregator::RevenueAggregator;
pub use attribution::AgentAttributionAggregator;
pub use types::{AgentMetrics, RevenueMetrics};
