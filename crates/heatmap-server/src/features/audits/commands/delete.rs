//! Delete audit command

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::features::shared::validation::{validate_audit_id, ValidationError};

/// Command to delete an audit by id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteAuditCommand {
    pub id: i64,
}

/// Confirmation payload returned after a successful delete
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteAuditResponse {
    pub id: i64,
    pub message: String,
}

/// Errors that can occur when deleting an audit
#[derive(Debug, thiserror::Error)]
pub enum DeleteAuditError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Audit with id {0} not found")]
    NotFound(i64),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl DeleteAuditCommand {
    pub fn validate(&self) -> Result<(), DeleteAuditError> {
        validate_audit_id(self.id)?;
        Ok(())
    }
}

/// Handler function for deleting audits
///
/// Idempotency is not provided; deleting an id that no longer exists is
/// `NotFound`, same as an id that never existed.
#[tracing::instrument(skip(pool), fields(audit_id = command.id))]
pub async fn handle(
    pool: SqlitePool,
    command: DeleteAuditCommand,
) -> Result<DeleteAuditResponse, DeleteAuditError> {
    command.validate()?;

    let deleted = sqlx::query_scalar::<_, i64>("DELETE FROM audits WHERE id = ? RETURNING id")
        .bind(command.id)
        .fetch_optional(&pool)
        .await?
        .ok_or(DeleteAuditError::NotFound(command.id))?;

    tracing::info!(audit_id = deleted, "Audit deleted");

    Ok(DeleteAuditResponse {
        id: deleted,
        message: format!("Audit {deleted} deleted"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::audits::commands::create::{self, CreateAuditCommand};
    use chrono::NaiveDate;

    #[test]
    fn test_validation_rejects_non_positive_ids() {
        assert!(matches!(
            DeleteAuditCommand { id: 0 }.validate(),
            Err(DeleteAuditError::Validation(ValidationError::InvalidIdentifier))
        ));
        assert!(matches!(
            DeleteAuditCommand { id: -7 }.validate(),
            Err(DeleteAuditError::Validation(ValidationError::InvalidIdentifier))
        ));
        assert!(DeleteAuditCommand { id: 1 }.validate().is_ok());
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_deletes_existing_audit(pool: SqlitePool) -> sqlx::Result<()> {
        let created = create::handle(
            pool.clone(),
            CreateAuditCommand {
                audit_type: "external".to_string(),
                title: "SOC 2 fieldwork".to_string(),
                description: None,
                audit_date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            },
        )
        .await
        .unwrap();

        let response = handle(pool.clone(), DeleteAuditCommand { id: created.id })
            .await
            .unwrap();
        assert_eq!(response.id, created.id);

        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM audits WHERE id = ?")
            .bind(created.id)
            .fetch_one(&pool)
            .await?;
        assert_eq!(count.0, 0);
        Ok(())
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_not_found(pool: SqlitePool) -> sqlx::Result<()> {
        let result = handle(pool.clone(), DeleteAuditCommand { id: 42 }).await;
        assert!(matches!(result, Err(DeleteAuditError::NotFound(42))));
        Ok(())
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_second_delete_is_not_found(pool: SqlitePool) -> sqlx::Result<()> {
        let created = create::handle(
            pool.clone(),
            CreateAuditCommand {
                audit_type: "internal".to_string(),
                title: "Access review".to_string(),
                description: None,
                audit_date: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
            },
        )
        .await
        .unwrap();

        handle(pool.clone(), DeleteAuditCommand { id: created.id })
            .await
            .unwrap();
        let second = handle(pool.clone(), DeleteAuditCommand { id: created.id }).await;
        assert!(matches!(second, Err(DeleteAuditError::NotFound(_))));
        Ok(())
    }
}
