//! Search handlers

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use validator::Validate;

use crate::AppState;
use dojo_common::{
    errors::{AppError, Result},
    metrics,
};
use dojo_search::SearchResult;

/// Search request
#[derive(Debug, Deserialize, Validate)]
pub struct SearchRequest {
    /// An empty query matches every entity
    #[serde(default)]
    #[validate(length(max = 1000))]
    pub query: String,
}

/// Search response
#[derive(Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub total_results: usize,
    pub results: Vec<SearchResult>,
    pub processing_time_ms: u64,
}

/// Search the whole corpus
pub async fn search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>> {
    let start = Instant::now();

    request.validate().map_err(|e| AppError::Validation {
        message: e.to_string(),
        field: Some("query".to_string()),
    })?;

    let results = state.engine.search(&request.query);

    let elapsed = start.elapsed();
    metrics::record_search(elapsed.as_secs_f64(), results.len());

    let processing_time_ms = elapsed.as_millis() as u64;
    tracing::info!(
        query = %request.query,
        results = results.len(),
        latency_ms = processing_time_ms,
        "Search completed"
    );

    Ok(Json(SearchResponse {
        query: request.query,
        total_results: results.len(),
        results,
        processing_time_ms,
    }))
}

#[cfg(test)]
mod tests {
    use crate::test_router;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn post_search(body: Value) -> (StatusCode, Value) {
        let request = Request::post("/v1/search")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = test_router().oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_search_returns_results_with_type_field() {
        let (status, json) = post_search(json!({ "query": "governance" })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["query"], "governance");

        let results = json["results"].as_array().unwrap();
        assert_eq!(json["total_results"], results.len());
        assert!(!results.is_empty());
        assert!(results.iter().all(|r| r.get("type").is_some()));
    }

    #[tokio::test]
    async fn test_empty_query_returns_everything() {
        let (status, json) = post_search(json!({ "query": "" })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["total_results"], 29);
    }

    #[tokio::test]
    async fn test_overlong_query_rejected() {
        let (status, json) = post_search(json!({ "query": "a".repeat(1001) })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }
}
