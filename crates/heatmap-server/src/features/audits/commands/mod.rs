//! Audit commands
//!
//! Write operations on stored audits. Each command validates its input
//! before touching the store.

pub mod create;
pub mod delete;
pub mod update;
