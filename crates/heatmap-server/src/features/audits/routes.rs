//! Audit API routes
//!
//! Wires the audit commands and queries to Axum HTTP handlers.
//!
//! # Route Structure
//!
//! - `POST /api/v1/audits` - Create a new audit
//! - `GET /api/v1/audits` - List audits with optional filters
//! - `GET /api/v1/audits/:id` - Get a single audit by id
//! - `PUT /api/v1/audits/:id` - Partially update an audit
//! - `DELETE /api/v1/audits/:id` - Delete an audit
//! - `GET /api/v1/audits/date/:date` - List all audits on one date

use crate::api::response::{ApiResponse, ErrorResponse};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use sqlx::SqlitePool;

use super::commands::{
    create::{CreateAuditCommand, CreateAuditError},
    delete::{DeleteAuditCommand, DeleteAuditError},
    update::{UpdateAuditCommand, UpdateAuditError},
};
use super::queries::{
    by_date::{AuditsByDateError, AuditsByDateQuery},
    get::{GetAuditError, GetAuditQuery},
    list::{ListAuditsError, ListAuditsQuery},
};

// ============================================================================
// Router Configuration
// ============================================================================

/// Creates the audits router with all routes configured
///
/// The static `date/:date` segment is registered alongside `:id`; Axum
/// gives the literal segment priority, so `GET /audits/date/2025-01-15`
/// never reaches the by-id handler.
pub fn audits_routes() -> Router<SqlitePool> {
    Router::new()
        .route("/", post(create_audit))
        .route("/", get(list_audits))
        .route("/:id", get(get_audit))
        .route("/:id", put(update_audit))
        .route("/:id", delete(delete_audit))
        .route("/date/:date", get(audits_by_date))
}

// ============================================================================
// Command Handlers (Write Operations)
// ============================================================================

/// Create a new audit
///
/// # Endpoint
///
/// `POST /api/v1/audits`
///
/// # Response
///
/// - `201 Created` - Audit created successfully
/// - `400 Bad Request` - Validation error
/// - `500 Internal Server Error` - Database error
#[tracing::instrument(
    skip(pool, command),
    fields(audit_type = %command.audit_type, audit_date = %command.audit_date)
)]
async fn create_audit(
    State(pool): State<SqlitePool>,
    Json(command): Json<CreateAuditCommand>,
) -> Result<Response, AuditApiError> {
    let audit = super::commands::create::handle(pool, command).await?;

    tracing::info!(audit_id = audit.id, "Audit created via API");

    Ok((StatusCode::CREATED, Json(ApiResponse::success(audit))).into_response())
}

/// Partially update an audit
///
/// # Endpoint
///
/// `PUT /api/v1/audits/:id`
///
/// # Response
///
/// - `200 OK` - Audit updated successfully
/// - `400 Bad Request` - Validation error or empty patch
/// - `404 Not Found` - Audit not found
/// - `500 Internal Server Error` - Database error
#[tracing::instrument(skip(pool, command), fields(audit_id = id))]
async fn update_audit(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Json(mut command): Json<UpdateAuditCommand>,
) -> Result<Response, AuditApiError> {
    // Set id from path parameter
    command.id = id;

    let audit = super::commands::update::handle(pool, command).await?;

    tracing::info!(audit_id = audit.id, "Audit updated via API");

    Ok((StatusCode::OK, Json(ApiResponse::success(audit))).into_response())
}

/// Delete an audit
///
/// # Endpoint
///
/// `DELETE /api/v1/audits/:id`
///
/// # Response
///
/// - `200 OK` - Audit deleted successfully
/// - `400 Bad Request` - Non-positive id
/// - `404 Not Found` - Audit not found
/// - `500 Internal Server Error` - Database error
#[tracing::instrument(skip(pool), fields(audit_id = id))]
async fn delete_audit(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Response, AuditApiError> {
    let response = super::commands::delete::handle(pool, DeleteAuditCommand { id }).await?;

    tracing::info!(audit_id = response.id, "Audit deleted via API");

    Ok((StatusCode::OK, Json(ApiResponse::success(response))).into_response())
}

// ============================================================================
// Query Handlers (Read Operations)
// ============================================================================

/// List audits with optional filters
///
/// # Endpoint
///
/// `GET /api/v1/audits?audit_type=internal&year=2025&start_date=2025-01-01&end_date=2025-06-30`
///
/// # Response
///
/// - `200 OK` - List of matching audits, newest audit date first
/// - `400 Bad Request` - Invalid filter parameters
/// - `500 Internal Server Error` - Database error
#[tracing::instrument(
    skip(pool, query),
    fields(audit_type = ?query.audit_type, year = ?query.year)
)]
async fn list_audits(
    State(pool): State<SqlitePool>,
    Query(query): Query<ListAuditsQuery>,
) -> Result<Response, AuditApiError> {
    let audits = super::queries::list::handle(pool, query).await?;

    tracing::debug!(count = audits.len(), "Audits listed via API");

    Ok((StatusCode::OK, Json(ApiResponse::success(audits))).into_response())
}

/// Get a single audit by id
///
/// # Endpoint
///
/// `GET /api/v1/audits/:id`
///
/// # Response
///
/// - `200 OK` - Audit found
/// - `400 Bad Request` - Non-positive id
/// - `404 Not Found` - Audit not found
/// - `500 Internal Server Error` - Database error
#[tracing::instrument(skip(pool), fields(audit_id = id))]
async fn get_audit(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Response, AuditApiError> {
    let audit = super::queries::get::handle(pool, GetAuditQuery { id }).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(audit))).into_response())
}

/// List all audits on one calendar date
///
/// # Endpoint
///
/// `GET /api/v1/audits/date/:date`
///
/// # Response
///
/// - `200 OK` - Audits on that date, possibly empty
/// - `400 Bad Request` - Malformed or impossible date
/// - `500 Internal Server Error` - Database error
#[tracing::instrument(skip(pool), fields(date = %date))]
async fn audits_by_date(
    State(pool): State<SqlitePool>,
    Path(date): Path<String>,
) -> Result<Response, AuditApiError> {
    let audits = super::queries::by_date::handle(pool, AuditsByDateQuery { date }).await?;

    tracing::debug!(count = audits.len(), "Audits fetched by date via API");

    Ok((StatusCode::OK, Json(ApiResponse::success(audits))).into_response())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Unified error type for audit API endpoints
#[derive(Debug)]
enum AuditApiError {
    CreateError(CreateAuditError),
    UpdateError(UpdateAuditError),
    DeleteError(DeleteAuditError),
    GetError(GetAuditError),
    ListError(ListAuditsError),
    ByDateError(AuditsByDateError),
}

impl From<CreateAuditError> for AuditApiError {
    fn from(err: CreateAuditError) -> Self {
        Self::CreateError(err)
    }
}

impl From<UpdateAuditError> for AuditApiError {
    fn from(err: UpdateAuditError) -> Self {
        Self::UpdateError(err)
    }
}

impl From<DeleteAuditError> for AuditApiError {
    fn from(err: DeleteAuditError) -> Self {
        Self::DeleteError(err)
    }
}

impl From<GetAuditError> for AuditApiError {
    fn from(err: GetAuditError) -> Self {
        Self::GetError(err)
    }
}

impl From<ListAuditsError> for AuditApiError {
    fn from(err: ListAuditsError) -> Self {
        Self::ListError(err)
    }
}

impl From<AuditsByDateError> for AuditApiError {
    fn from(err: AuditsByDateError) -> Self {
        Self::ByDateError(err)
    }
}

impl IntoResponse for AuditApiError {
    fn into_response(self) -> Response {
        match self {
            // Validation failures across all operations
            AuditApiError::CreateError(CreateAuditError::Validation(_))
            | AuditApiError::UpdateError(UpdateAuditError::Validation(_))
            | AuditApiError::DeleteError(DeleteAuditError::Validation(_))
            | AuditApiError::GetError(GetAuditError::Validation(_))
            | AuditApiError::ListError(ListAuditsError::Validation(_))
            | AuditApiError::ByDateError(AuditsByDateError::Validation(_)) => {
                let error = ErrorResponse::new("VALIDATION_ERROR", self.to_string());
                (StatusCode::BAD_REQUEST, Json(error)).into_response()
            },

            // Missing rows
            AuditApiError::UpdateError(UpdateAuditError::NotFound(_))
            | AuditApiError::DeleteError(DeleteAuditError::NotFound(_))
            | AuditApiError::GetError(GetAuditError::NotFound(_)) => {
                let error = ErrorResponse::new("NOT_FOUND", self.to_string());
                (StatusCode::NOT_FOUND, Json(error)).into_response()
            },

            // Store failures; details go to the log, not the client
            AuditApiError::CreateError(CreateAuditError::CreateFailed)
            | AuditApiError::CreateError(CreateAuditError::Database(_))
            | AuditApiError::UpdateError(UpdateAuditError::Database(_))
            | AuditApiError::DeleteError(DeleteAuditError::Database(_))
            | AuditApiError::GetError(GetAuditError::Database(_))
            | AuditApiError::ListError(ListAuditsError::Database(_))
            | AuditApiError::ByDateError(AuditsByDateError::Database(_)) => {
                tracing::error!("Database error during audit operation: {}", self);
                let error = ErrorResponse::new("INTERNAL_ERROR", "A database error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
            },
        }
    }
}

impl std::fmt::Display for AuditApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CreateError(e) => write!(f, "{}", e),
            Self::UpdateError(e) => write!(f, "{}", e),
            Self::DeleteError(e) => write!(f, "{}", e),
            Self::GetError(e) => write!(f, "{}", e),
            Self::ListError(e) => write!(f, "{}", e),
            Self::ByDateError(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::validation::ValidationError;

    #[test]
    fn test_error_display() {
        let err = AuditApiError::CreateError(CreateAuditError::Validation(
            ValidationError::InvalidEnum,
        ));
        assert!(err.to_string().contains("audit_type"));
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response =
            AuditApiError::GetError(GetAuditError::NotFound(7)).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let response = AuditApiError::ByDateError(AuditsByDateError::Validation(
            ValidationError::MalformedDate,
        ))
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_routes_structure() {
        let router = audits_routes();
        assert!(format!("{:?}", router).contains("Router"));
    }
}
