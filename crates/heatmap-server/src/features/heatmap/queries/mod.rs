//! Aggregation queries
//!
//! Read-only rollups over stored audits. Both operate on one calendar
//! year and never fail for an empty year.

pub mod heatmap_by_year;
pub mod yearly_stats;
