//! Yearly statistics query
//!
//! Whole-year audit totals, split by type. A year with no audits yields an
//! all-zero record rather than an error.

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::features::shared::validation::{validate_year, ValidationError};

/// Query for the aggregate statistics of one year
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearlyStatsQuery {
    pub year: i32,
}

/// Aggregate audit counts for one year
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyStats {
    pub year: i32,
    pub total_audits: i64,
    pub internal_count: i64,
    pub external_count: i64,
}

/// Errors that can occur when computing yearly statistics
#[derive(Debug, thiserror::Error)]
pub enum YearlyStatsError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl YearlyStatsQuery {
    pub fn validate(&self) -> Result<(), YearlyStatsError> {
        validate_year(self.year)?;
        Ok(())
    }
}

// SUM over an empty set is NULL in SQLite, so the typed sums are optional
// at the row level.
#[derive(Debug, sqlx::FromRow)]
struct StatsRow {
    total_audits: i64,
    internal_count: Option<i64>,
    external_count: Option<i64>,
}

/// Handler function for the yearly statistics aggregation
#[tracing::instrument(skip(pool), fields(year = query.year))]
pub async fn handle(
    pool: SqlitePool,
    query: YearlyStatsQuery,
) -> Result<YearlyStats, YearlyStatsError> {
    query.validate()?;

    let row = sqlx::query_as::<_, StatsRow>(
        r#"
        SELECT
            COUNT(*) AS total_audits,
            SUM(CASE WHEN audit_type = 'internal' THEN 1 ELSE 0 END) AS internal_count,
            SUM(CASE WHEN audit_type = 'external' THEN 1 ELSE 0 END) AS external_count
        FROM audits
        WHERE CAST(strftime('%Y', audit_date) AS INTEGER) = ?
        "#,
    )
    .bind(query.year)
    .fetch_one(&pool)
    .await?;

    let stats = YearlyStats {
        year: query.year,
        total_audits: row.total_audits,
        internal_count: row.internal_count.unwrap_or(0),
        external_count: row.external_count.unwrap_or(0),
    };

    tracing::debug!(
        year = stats.year,
        total = stats.total_audits,
        "Yearly stats computed"
    );

    Ok(stats)
}
