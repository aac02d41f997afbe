//! Aggregation feature
//!
//! Calendar heatmap and yearly statistics rollups over the audit store.

pub mod queries;
pub mod routes;

pub use queries::heatmap_by_year::HeatmapDay;
pub use queries::yearly_stats::YearlyStats;
pub use routes::{heatmap_routes, stats_routes};
