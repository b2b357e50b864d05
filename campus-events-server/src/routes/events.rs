//! Event catalog endpoints

use axum::{
    Router,
    extract::{Path, Query, State},
    routing::get,
    Json,
};
use serde::Deserialize;

use campus_events_core::{Event, EventCatalog};

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/events", get(list_events))
        .route("/api/events/{id}", get(get_event))
}

#[derive(Deserialize)]
pub struct EventsQuery {
    pub category: Option<String>,
}

/// GET /api/events - List events, optionally filtered by category
async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<EventsQuery>,
) -> Result<Json<Vec<Event>>, AppError> {
    // An empty ?category= means no filter
    let category = query.category.as_deref().filter(|c| !c.is_empty());
    let events = state.catalog().list_events(category);

    tracing::debug!(?category, count = events.len(), "listing events");
    Ok(Json(events))
}

/// GET /api/events/:id - Fetch a single event
async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Event>, AppError> {
    let id = EventCatalog::parse_id(&id)?;
    let event = state.catalog().get_event(id)?;

    Ok(Json(event.clone()))
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use campus_events_core::EventCatalog;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::state::AppState;

    async fn get(uri: &str) -> (StatusCode, Value) {
        let app = crate::app(AppState::new(EventCatalog::seeded()), None);
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn ids(body: &Value) -> Vec<u64> {
        body.as_array()
            .unwrap()
            .iter()
            .map(|e| e["id"].as_u64().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn lists_every_event() {
        let (status, body) = get("/api/events").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&body), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(body[0]["title"], "AWS Student Community Day");
        assert_eq!(body[0]["date"], "2025-02-10");
    }

    #[tokio::test]
    async fn filters_by_category_case_insensitively() {
        let (status, body) = get("/api/events?category=workshop").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&body), vec![1, 5]);

        let (_, body) = get("/api/events?category=Tech%20Talk").await;
        assert_eq!(ids(&body), vec![3]);

        let (_, body) = get("/api/events?category=Concert").await;
        assert!(ids(&body).is_empty());
    }

    #[tokio::test]
    async fn empty_category_is_no_filter() {
        let (_, body) = get("/api/events?category=").await;
        assert_eq!(ids(&body).len(), 6);
    }

    #[tokio::test]
    async fn fetches_single_event() {
        let (status, body) = get("/api/events/5").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["capacity"], 50);
        assert_eq!(body["registered"], 48);
    }

    #[tokio::test]
    async fn unknown_or_malformed_id_is_404() {
        for uri in ["/api/events/42", "/api/events/abc"] {
            let (status, body) = get(uri).await;
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(body["error"], "Event not found");
        }
    }

    #[tokio::test]
    async fn unknown_api_path_is_json_404() {
        let (status, body) = get("/api/nothing-here").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Not found");
    }
}
