//! Audits-by-date query
//!
//! Fetches every audit tracked under one exact calendar date. The date
//! arrives as a raw path segment and is validated for shape before it is
//! parsed, so `2025-1-15` and `2025-02-30` fail differently.

use serde::{Deserialize, Serialize};
use sqlx::{QueryBuilder, SqlitePool};

use crate::features::audits::predicates::{push_where, AuditOrdering, AuditPredicate};
use crate::features::audits::types::Audit;
use crate::features::shared::validation::{validate_date_string, ValidationError};

/// Query to fetch all audits on a single date
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditsByDateQuery {
    /// Raw `YYYY-MM-DD` date string
    pub date: String,
}

/// Errors that can occur when fetching audits by date
#[derive(Debug, thiserror::Error)]
pub enum AuditsByDateError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Handler function for the by-date lookup
///
/// A date with no audits returns an empty list, not an error. Results are
/// ordered by audit type, then creation time.
#[tracing::instrument(skip(pool), fields(date = %query.date))]
pub async fn handle(
    pool: SqlitePool,
    query: AuditsByDateQuery,
) -> Result<Vec<Audit>, AuditsByDateError> {
    let date = validate_date_string(&query.date)?;

    let mut qb = QueryBuilder::new(
        "SELECT id, audit_type, title, description, audit_date, created_at, updated_at FROM audits",
    );
    push_where(&mut qb, &[AuditPredicate::DateEquals(date)]);
    qb.push(AuditOrdering::TypeThenCreated.as_sql());

    let audits = qb.build_query_as::<Audit>().fetch_all(&pool).await?;

    tracing::debug!(count = audits.len(), "Audits fetched for date");

    Ok(audits)
}
