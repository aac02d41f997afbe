//! Audit Heatmap Server Library
//!
//! HTTP backend for tracking audit events on a calendar and serving
//! heatmap-style aggregations over them.
//!
//! # Overview
//!
//! - **API Endpoints**: RESTful API for audit management and aggregation
//! - **Database Management**: SQLite integration with SQLx
//! - **Configuration**: Environment-based configuration management
//! - **Middleware**: CORS and request logging
//!
//! # Architecture
//!
//! The server follows a **CQRS (Command Query Responsibility Segregation)**
//! architecture:
//!
//! - **Commands** (Write Operations): Create, Update, Delete operations that
//!   modify state, executed via HTTP POST, PUT, DELETE methods
//! - **Queries** (Read Operations): Filtered listings, single-row lookups,
//!   and the heatmap/stats aggregations, executed via HTTP GET
//!
//! ## Framework Stack
//!
//! - **Axum**: Modern, ergonomic web framework
//! - **SQLx**: Async SQL with typed row mapping
//! - **Tower**: Middleware and service abstractions
//!
//! # Example
//!
//! ```no_run
//! use heatmap_server::{api, config::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     api::serve(config).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod features;
pub mod middleware;

// Re-export commonly used types
pub use features::audits::{Audit, AuditType};
pub use features::heatmap::{HeatmapDay, YearlyStats};
