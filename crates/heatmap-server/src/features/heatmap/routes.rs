//! Aggregation API routes
//!
//! # Route Structure
//!
//! - `GET /api/v1/heatmap/:year` - Per-day counts for one year
//! - `GET /api/v1/stats/:year` - Whole-year totals

use crate::api::response::{ApiResponse, ErrorResponse};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use sqlx::SqlitePool;

use super::queries::{
    heatmap_by_year::{HeatmapByYearError, HeatmapByYearQuery},
    yearly_stats::{YearlyStatsError, YearlyStatsQuery},
};

/// Creates the heatmap router
pub fn heatmap_routes() -> Router<SqlitePool> {
    Router::new().route("/:year", get(heatmap_by_year))
}

/// Creates the stats router
pub fn stats_routes() -> Router<SqlitePool> {
    Router::new().route("/:year", get(yearly_stats))
}

/// Per-day audit counts for one year
///
/// # Endpoint
///
/// `GET /api/v1/heatmap/:year`
///
/// # Response
///
/// - `200 OK` - One entry per day with at least one audit
/// - `400 Bad Request` - Year outside 1900..=2100
/// - `500 Internal Server Error` - Database error
#[tracing::instrument(skip(pool), fields(year = year))]
async fn heatmap_by_year(
    State(pool): State<SqlitePool>,
    Path(year): Path<i32>,
) -> Result<Response, AggregationApiError> {
    let days =
        super::queries::heatmap_by_year::handle(pool, HeatmapByYearQuery { year }).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(days))).into_response())
}

/// Whole-year audit totals
///
/// # Endpoint
///
/// `GET /api/v1/stats/:year`
///
/// # Response
///
/// - `200 OK` - Totals, all-zero for an empty year
/// - `400 Bad Request` - Year outside 1900..=2100
/// - `500 Internal Server Error` - Database error
#[tracing::instrument(skip(pool), fields(year = year))]
async fn yearly_stats(
    State(pool): State<SqlitePool>,
    Path(year): Path<i32>,
) -> Result<Response, AggregationApiError> {
    let stats = super::queries::yearly_stats::handle(pool, YearlyStatsQuery { year }).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(stats))).into_response())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Unified error type for aggregation API endpoints
#[derive(Debug)]
enum AggregationApiError {
    HeatmapError(HeatmapByYearError),
    StatsError(YearlyStatsError),
}

impl From<HeatmapByYearError> for AggregationApiError {
    fn from(err: HeatmapByYearError) -> Self {
        Self::HeatmapError(err)
    }
}

impl From<YearlyStatsError> for AggregationApiError {
    fn from(err: YearlyStatsError) -> Self {
        Self::StatsError(err)
    }
}

impl IntoResponse for AggregationApiError {
    fn into_response(self) -> Response {
        match self {
            AggregationApiError::HeatmapError(HeatmapByYearError::Validation(_))
            | AggregationApiError::StatsError(YearlyStatsError::Validation(_)) => {
                let error = ErrorResponse::new("VALIDATION_ERROR", self.to_string());
                (StatusCode::BAD_REQUEST, Json(error)).into_response()
            },
            AggregationApiError::HeatmapError(HeatmapByYearError::Database(_))
            | AggregationApiError::StatsError(YearlyStatsError::Database(_)) => {
                tracing::error!("Database error during aggregation: {}", self);
                let error = ErrorResponse::new("INTERNAL_ERROR", "A database error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
            },
        }
    }
}

impl std::fmt::Display for AggregationApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HeatmapError(e) => write!(f, "{}", e),
            Self::StatsError(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::validation::ValidationError;

    #[test]
    fn test_year_validation_maps_to_400() {
        let response = AggregationApiError::HeatmapError(HeatmapByYearError::Validation(
            ValidationError::OutOfRange,
        ))
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_routes_structure() {
        assert!(format!("{:?}", heatmap_routes()).contains("Router"));
        assert!(format!("{:?}", stats_routes()).contains("Router"));
    }
}
