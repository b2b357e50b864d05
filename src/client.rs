//! HTTP client for the campus-events API

use std::time::Duration;

use serde::Deserialize;

use campus_events_core::{CampusEventsError, CampusEventsResult, Event, EventId};

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// HTTP client for campus-events-server
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl Client {
    pub fn new(base_url: &str) -> CampusEventsResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| CampusEventsError::Service(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// GET /api/events
    pub async fn list_events(&self, category: Option<&str>) -> CampusEventsResult<Vec<Event>> {
        let mut request = self.http.get(format!("{}/api/events", self.base_url));
        if let Some(category) = category {
            request = request.query(&[("category", category)]);
        }

        let resp = request.send().await.map_err(service_error)?;

        if !resp.status().is_success() {
            return Err(CampusEventsError::Service(error_message(resp).await));
        }

        let events: Vec<Event> = resp.json().await.map_err(service_error)?;
        tracing::debug!(count = events.len(), "fetched events");
        Ok(events)
    }

    /// GET /api/events/:id
    pub async fn get_event(&self, id: EventId) -> CampusEventsResult<Event> {
        let resp = self
            .http
            .get(format!("{}/api/events/{}", self.base_url, id))
            .send()
            .await
            .map_err(service_error)?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(CampusEventsError::not_found(id));
        }

        if !resp.status().is_success() {
            return Err(CampusEventsError::Service(error_message(resp).await));
        }

        resp.json().await.map_err(service_error)
    }
}

fn service_error(err: reqwest::Error) -> CampusEventsError {
    tracing::debug!(error = ?err, "request failed");
    CampusEventsError::Service(err.to_string())
}

async fn error_message(resp: reqwest::Response) -> String {
    let status = resp.status();
    match resp.json::<ErrorResponse>().await {
        Ok(body) => body.error,
        Err(_) => format!("server responded with {status}"),
    }
}
