//! Audit queries
//!
//! Read operations over stored audits.

pub mod by_date;
pub mod get;
pub mod list;
