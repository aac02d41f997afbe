//! List audits query
//!
//! Filtered read-many over stored audits. Raw query-string parameters are
//! validated and converted into typed predicates before any SQL is built.

use serde::{Deserialize, Serialize};
use sqlx::{QueryBuilder, SqlitePool};
use std::str::FromStr;

use crate::features::audits::predicates::{compose, push_where, AuditFilter, AuditOrdering};
use crate::features::audits::types::{Audit, AuditType};
use crate::features::shared::validation::{
    validate_date_range, validate_date_string, validate_year, ValidationError,
};

/// Query parameters for listing audits
///
/// All fields are optional; an empty query returns every stored audit.
/// Dates arrive as raw strings so malformed input is reported as a
/// validation failure rather than a deserialization error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListAuditsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

/// Errors that can occur when listing audits
#[derive(Debug, thiserror::Error)]
pub enum ListAuditsError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ListAuditsQuery {
    /// Validates the parameters and converts them into a typed filter
    ///
    /// Checks run in order, first failure wins: audit type, year range,
    /// start date, end date, then start <= end.
    pub fn validate(&self) -> Result<AuditFilter, ListAuditsError> {
        let audit_type = match self.audit_type.as_deref() {
            Some(raw) => Some(AuditType::from_str(raw)?),
            None => None,
        };

        if let Some(year) = self.year {
            validate_year(year)?;
        }

        let start_date = match self.start_date.as_deref() {
            Some(raw) => Some(validate_date_string(raw)?),
            None => None,
        };
        let end_date = match self.end_date.as_deref() {
            Some(raw) => Some(validate_date_string(raw)?),
            None => None,
        };
        validate_date_range(start_date, end_date)?;

        Ok(AuditFilter {
            audit_type,
            year: self.year,
            start_date,
            end_date,
        })
    }
}

/// Handler function for listing audits
///
/// Results are ordered by audit date, newest first.
#[tracing::instrument(skip(pool, query))]
pub async fn handle(pool: SqlitePool, query: ListAuditsQuery) -> Result<Vec<Audit>, ListAuditsError> {
    let filter = query.validate()?;
    let predicates = compose(&filter);

    let mut qb = QueryBuilder::new(
        "SELECT id, audit_type, title, description, audit_date, created_at, updated_at FROM audits",
    );
    push_where(&mut qb, &predicates);
    qb.push(AuditOrdering::DateDesc.as_sql());

    let audits = qb.build_query_as::<Audit>().fetch_all(&pool).await?;

    tracing::debug!(count = audits.len(), "Audits listed");

    Ok(audits)
}
