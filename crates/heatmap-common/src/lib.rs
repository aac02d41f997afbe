//! Shared error type and logging bootstrap for the audit heatmap workspace.
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! # Overview
//!
//! This crate holds the pieces every workspace member needs:
//!
//! - **Error Handling**: the `HeatmapError` type and `Result` alias
//! - **Logging**: `tracing`-based logging configuration and initialization
//!
//! # Example
//!
//! ```no_run
//! use heatmap_common::logging::{init_logging, LogConfig};
//!
//! fn main() -> heatmap_common::Result<()> {
//!     let config = LogConfig::from_env()?;
//!     init_logging(&config)?;
//!     tracing::info!("started");
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod logging;

// Re-export commonly used types
pub use error::{HeatmapError, Result};
