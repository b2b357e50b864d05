pub mod events;
pub mod health;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use campus_events_core::CampusEventsError;
use serde::Serialize;

/// Standard API error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        ErrorResponse {
            error: error.into(),
        }
    }
}

/// Body of every 500; the underlying error only goes to the log
pub const INTERNAL_ERROR_MESSAGE: &str = "Failed to retrieve events";

/// Convert handler errors to HTTP responses
///
/// Unknown events become 404s; anything else is logged and reported as a 500.
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Some(CampusEventsError::NotFound(id)) = self.0.downcast_ref::<CampusEventsError>() {
            tracing::debug!(%id, "event not found");
            let body = Json(ErrorResponse::new("Event not found"));
            return (StatusCode::NOT_FOUND, body).into_response();
        }

        tracing::error!(error = ?self.0, "request failed");
        let body = Json(ErrorResponse::new(INTERNAL_ERROR_MESSAGE));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

/// Unmatched paths under /api
pub async fn api_not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new("Not found"))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn respond(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn service_failure_is_500_with_error_body() {
        let (status, body) =
            respond(AppError::from(CampusEventsError::Service("boom".into()))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to retrieve events");
    }

    #[tokio::test]
    async fn arbitrary_failure_does_not_leak_details() {
        let (status, body) = respond(AppError::from(anyhow::anyhow!("db password wrong"))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({ "error": "Failed to retrieve events" }));
    }

    #[tokio::test]
    async fn not_found_stays_404() {
        let (status, body) = respond(AppError::from(CampusEventsError::not_found(9))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Event not found");
    }
}
