//! Create audit command
//!
//! Inserts a new audit and returns the fully materialized row in the same
//! statement, so there is no read-after-write race. Both timestamps are
//! bound to the same instant; `updated_at == created_at` on a fresh row.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use std::str::FromStr;

use crate::features::audits::types::{Audit, AuditType};
use crate::features::shared::validation::{
    validate_audit_type, validate_title, ValidationError,
};

/// Command to create a new audit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAuditCommand {
    /// One of "internal" or "external"
    pub audit_type: String,

    /// Display title, non-blank, at most 255 characters
    pub title: String,

    /// Optional free-text description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The calendar date the audit is tracked under
    pub audit_date: NaiveDate,
}

/// Errors that can occur when creating an audit
#[derive(Debug, thiserror::Error)]
pub enum CreateAuditError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The store accepted the insert but returned no materialized row
    #[error("Failed to create audit - database returned no data")]
    CreateFailed,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl CreateAuditCommand {
    /// Validates the command parameters
    ///
    /// Checks run in order, first failure wins:
    /// 1. `audit_type` must be a known type
    /// 2. `title` must be non-blank and at most 255 characters
    pub fn validate(&self) -> Result<(), CreateAuditError> {
        validate_audit_type(&self.audit_type)?;
        validate_title(&self.title)?;
        Ok(())
    }
}

/// Handler function for creating audits
///
/// # Errors
///
/// - Validation errors if command parameters are invalid
/// - `CreateFailed` if the insert returned no row
/// - Database errors if the operation fails
#[tracing::instrument(
    skip(pool, command),
    fields(audit_type = %command.audit_type, audit_date = %command.audit_date)
)]
pub async fn handle(
    pool: SqlitePool,
    command: CreateAuditCommand,
) -> Result<Audit, CreateAuditError> {
    command.validate()?;
    let audit_type = AuditType::from_str(&command.audit_type)?;

    let now = Utc::now();

    let audit = sqlx::query_as::<_, Audit>(
        r#"
        INSERT INTO audits (audit_type, title, description, audit_date, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING id, audit_type, title, description, audit_date, created_at, updated_at
        "#,
    )
    .bind(audit_type.as_str())
    .bind(&command.title)
    .bind(&command.description)
    .bind(command.audit_date)
    .bind(now)
    .bind(now)
    .fetch_optional(&pool)
    .await?
    .ok_or(CreateAuditError::CreateFailed)?;

    tracing::info!(audit_id = audit.id, audit_type = %audit.audit_type, "Audit created");

    Ok(audit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn command(audit_type: &str, title: &str) -> CreateAuditCommand {
        CreateAuditCommand {
            audit_type: audit_type.to_string(),
            title: title.to_string(),
            description: None,
            audit_date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        }
    }

    #[test]
    fn test_validation_success() {
        assert!(command("internal", "Q1 compliance review").validate().is_ok());
        assert!(command("external", "ISO 27001 surveillance").validate().is_ok());
    }

    #[test]
    fn test_validation_invalid_audit_type() {
        let result = command("vendor", "Some title").validate();
        assert!(matches!(
            result,
            Err(CreateAuditError::Validation(ValidationError::InvalidEnum))
        ));
    }

    #[test]
    fn test_validation_whitespace_title() {
        let result = command("internal", "   \t").validate();
        assert!(matches!(
            result,
            Err(CreateAuditError::Validation(ValidationError::EmptyField))
        ));
    }

    #[test]
    fn test_validation_title_too_long() {
        let long_title = "a".repeat(256);
        let result = command("internal", &long_title).validate();
        assert!(matches!(
            result,
            Err(CreateAuditError::Validation(ValidationError::FieldTooLong))
        ));
    }

    #[test]
    fn test_validation_type_checked_before_title() {
        // first failure wins: invalid type is reported even when the title
        // is also blank
        let result = command("neither", "").validate();
        assert!(matches!(
            result,
            Err(CreateAuditError::Validation(ValidationError::InvalidEnum))
        ));
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_creates_audit(pool: SqlitePool) -> sqlx::Result<()> {
        let cmd = CreateAuditCommand {
            audit_type: "internal".to_string(),
            title: "Q1 compliance review".to_string(),
            description: Some("Annual internal controls check".to_string()),
            audit_date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        };

        let audit = handle(pool.clone(), cmd).await.unwrap();

        assert!(audit.id > 0);
        assert_eq!(audit.audit_type, AuditType::Internal);
        assert_eq!(audit.title, "Q1 compliance review");
        assert_eq!(audit.description.as_deref(), Some("Annual internal controls check"));
        assert_eq!(audit.audit_date, NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
        assert_eq!(audit.created_at, audit.updated_at);
        Ok(())
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_assigns_distinct_ids(pool: SqlitePool) -> sqlx::Result<()> {
        let first = handle(pool.clone(), command("internal", "First")).await.unwrap();
        let second = handle(pool.clone(), command("external", "Second")).await.unwrap();

        assert_ne!(first.id, second.id);
        Ok(())
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_rejects_before_store_access(pool: SqlitePool) -> sqlx::Result<()> {
        let result = handle(pool.clone(), command("internal", "  ")).await;
        assert!(matches!(
            result,
            Err(CreateAuditError::Validation(ValidationError::EmptyField))
        ));

        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM audits")
            .fetch_one(&pool)
            .await?;
        assert_eq!(count.0, 0);
        Ok(())
    }
}
