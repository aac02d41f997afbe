//! Feature modules implementing the audit heatmap API
//!
//! Each feature is a vertical slice with its own commands, queries, and
//! routes.
//!
//! # Features
//!
//! - **audits**: CRUD and filtered reads over audit events
//! - **heatmap**: calendar heatmap and yearly statistics rollups
//!
//! # Architecture
//!
//! Each feature module follows the structure:
//! - `commands/` - Write operations (create, update, delete)
//! - `queries/` - Read operations (get, list, aggregate)
//! - `routes.rs` - HTTP route definitions
//! - `types.rs` - Shared types (if needed)

pub mod audits;
pub mod heatmap;
pub mod shared;

use axum::Router;
use sqlx::SqlitePool;

/// Shared state for all feature routes
#[derive(Clone)]
pub struct FeatureState {
    /// SQLite connection pool for database operations
    pub db: SqlitePool,
}

/// Creates the main API router with all feature routes mounted
///
/// Each feature is mounted under its own path prefix:
/// - `/audits` - Audit CRUD, filtered listing, and by-date lookup
/// - `/heatmap` - Per-day counts for one year
/// - `/stats` - Whole-year totals
pub fn router(state: FeatureState) -> Router<()> {
    Router::new()
        .nest("/audits", audits::audits_routes().with_state(state.db.clone()))
        .nest("/heatmap", heatmap::heatmap_routes().with_state(state.db.clone()))
        .nest("/stats", heatmap::stats_routes().with_state(state.db.clone()))
}
