//! Get audit by id query

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::features::audits::types::Audit;
use crate::features::shared::validation::{validate_audit_id, ValidationError};

/// Query to fetch a single audit by id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetAuditQuery {
    pub id: i64,
}

/// Errors that can occur when fetching an audit
#[derive(Debug, thiserror::Error)]
pub enum GetAuditError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Audit with id {0} not found")]
    NotFound(i64),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl GetAuditQuery {
    pub fn validate(&self) -> Result<(), GetAuditError> {
        validate_audit_id(self.id)?;
        Ok(())
    }
}

/// Handler function for fetching a single audit
#[tracing::instrument(skip(pool), fields(audit_id = query.id))]
pub async fn handle(pool: SqlitePool, query: GetAuditQuery) -> Result<Audit, GetAuditError> {
    query.validate()?;

    let audit = sqlx::query_as::<_, Audit>(
        r#"
        SELECT id, audit_type, title, description, audit_date, created_at, updated_at
        FROM audits
        WHERE id = ?
        "#,
    )
    .bind(query.id)
    .fetch_optional(&pool)
    .await?
    .ok_or(GetAuditError::NotFound(query.id))?;

    Ok(audit)
}
