//! Update audit command
//!
//! Partially updates an existing audit. Only the fields present in the
//! patch are changed; `audit_type` is immutable and `updated_at` is
//! refreshed on every successful update.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::features::audits::types::Audit;
use crate::features::shared::validation::{validate_audit_id, validate_title, ValidationError};

/// Command to update an existing audit
///
/// The `id` comes from the request path; at least one of the remaining
/// fields must be present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAuditCommand {
    #[serde(default)]
    pub id: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit_date: Option<NaiveDate>,
}

/// Errors that can occur when updating an audit
#[derive(Debug, thiserror::Error)]
pub enum UpdateAuditError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Audit with id {0} not found")]
    NotFound(i64),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl UpdateAuditCommand {
    /// Validates the command parameters
    ///
    /// Checks run in order, first failure wins:
    /// 1. `id` must be strictly positive
    /// 2. the patch must contain at least one field
    /// 3. `title`, when present, must be non-blank and at most 255 characters
    pub fn validate(&self) -> Result<(), UpdateAuditError> {
        validate_audit_id(self.id)?;

        if self.title.is_none() && self.description.is_none() && self.audit_date.is_none() {
            return Err(ValidationError::NoFieldsToUpdate.into());
        }

        if let Some(ref title) = self.title {
            validate_title(title)?;
        }

        Ok(())
    }
}

/// Handler function for updating audits
///
/// Absent patch fields keep their stored value via COALESCE NULL-guards,
/// so the update is a single atomic statement with read-back.
#[tracing::instrument(skip(pool, command), fields(audit_id = command.id))]
pub async fn handle(
    pool: SqlitePool,
    command: UpdateAuditCommand,
) -> Result<Audit, UpdateAuditError> {
    command.validate()?;

    let now = Utc::now();

    let audit = sqlx::query_as::<_, Audit>(
        r#"
        UPDATE audits SET
            title = COALESCE(?, title),
            description = COALESCE(?, description),
            audit_date = COALESCE(?, audit_date),
            updated_at = ?
        WHERE id = ?
        RETURNING id, audit_type, title, description, audit_date, created_at, updated_at
        "#,
    )
    .bind(&command.title)
    .bind(&command.description)
    .bind(command.audit_date)
    .bind(now)
    .bind(command.id)
    .fetch_optional(&pool)
    .await?
    .ok_or(UpdateAuditError::NotFound(command.id))?;

    tracing::info!(audit_id = audit.id, "Audit updated");

    Ok(audit)
}
