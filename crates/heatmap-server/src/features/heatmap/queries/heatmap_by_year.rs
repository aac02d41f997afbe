//! Calendar heatmap query
//!
//! Per-day audit counts for one calendar year, split by type. Days with no
//! audits are omitted; the consumer treats a missing day as zero.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::features::shared::validation::{validate_year, ValidationError};

/// Query for the per-day heatmap of one year
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatmapByYearQuery {
    pub year: i32,
}

/// Aggregated counts for one calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct HeatmapDay {
    pub date: NaiveDate,
    pub internal: i64,
    pub external: i64,
    pub total: i64,
}

/// Errors that can occur when building the heatmap
#[derive(Debug, thiserror::Error)]
pub enum HeatmapByYearError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl HeatmapByYearQuery {
    pub fn validate(&self) -> Result<(), HeatmapByYearError> {
        validate_year(self.year)?;
        Ok(())
    }
}

/// Handler function for the heatmap aggregation
///
/// Grouping and counting happen in the store; one row comes back per day
/// that has at least one audit, in ascending date order.
#[tracing::instrument(skip(pool), fields(year = query.year))]
pub async fn handle(
    pool: SqlitePool,
    query: HeatmapByYearQuery,
) -> Result<Vec<HeatmapDay>, HeatmapByYearError> {
    query.validate()?;

    let days = sqlx::query_as::<_, HeatmapDay>(
        r#"
        SELECT
            audit_date AS date,
            SUM(CASE WHEN audit_type = 'internal' THEN 1 ELSE 0 END) AS internal,
            SUM(CASE WHEN audit_type = 'external' THEN 1 ELSE 0 END) AS external,
            COUNT(*) AS total
        FROM audits
        WHERE CAST(strftime('%Y', audit_date) AS INTEGER) = ?
        GROUP BY audit_date
        ORDER BY audit_date
        "#,
    )
    .bind(query.year)
    .fetch_all(&pool)
    .await?;

    tracing::debug!(year = query.year, days = days.len(), "Heatmap built");

    Ok(days)
}
