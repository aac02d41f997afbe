//! Audit tracking feature
//!
//! CRUD and filtered reads over audit events, organized as commands
//! (writes) and queries (reads) with HTTP routes on top.

pub mod commands;
pub mod predicates;
pub mod queries;
pub mod routes;
pub mod types;

pub use routes::audits_routes;
pub use types::{Audit, AuditType};
