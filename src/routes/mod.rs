// Route exports
pub mod browse;
pub mod ownership;
pub mod ranking;

use crate::core::Ranker;
use crate::models::{ErrorResponse, PoolSource};
use crate::services::{PostgresClient, PostgresError, ReferenceCache};
use actix_web::{http::StatusCode, web, HttpResponse};
use std::sync::Arc;
use std::time::Duration;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub postgres: Arc<PostgresClient>,
    pub reference: Arc<ReferenceCache>,
    pub ranker: Ranker,
    pub default_limit: usize,
    pub default_pool: PoolSource,
    pub fetch_timeout: Duration,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(ranking::configure)
            .configure(browse::configure)
            .configure(ownership::configure),
    );
}

/// Build a JSON error response
pub(crate) fn error_response(
    status: StatusCode,
    error: &str,
    message: impl ToString,
) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse {
        error: error.to_string(),
        message: message.to_string(),
        status_code: status.as_u16(),
    })
}

/// Map a data provider failure to a response
pub(crate) fn postgres_error_response(error: &str, err: &PostgresError) -> HttpResponse {
    let status = match err {
        PostgresError::NotFound(_) => StatusCode::NOT_FOUND,
        PostgresError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        tracing::error!("{}: {}", error, err);
    } else {
        tracing::info!("{}: {}", error, err);
    }

    error_response(status, error, err)
}

/// Map request validation errors to a 400 response
pub(crate) fn validation_error_response(errors: validator::ValidationErrors) -> HttpResponse {
    tracing::info!("Validation failed: field_errors={:?}", errors);
    error_response(StatusCode::BAD_REQUEST, "Validation failed", errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = postgres_error_response(
            "Failed to fetch trainer",
            &PostgresError::NotFound("Trainer Brock in kanto".to_string()),
        );
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_invalid_input_maps_to_400() {
        let response = postgres_error_response(
            "Failed to search trainers",
            &PostgresError::InvalidInput("Search prefix is empty".to_string()),
        );
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_error_response_status() {
        let response = error_response(StatusCode::GATEWAY_TIMEOUT, "Timed out", "slow database");
        assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    }
}
