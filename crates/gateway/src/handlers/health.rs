//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;
use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Serialize)]
pub struct ReadyResponse {
    pub status: String,
    pub checks: HealthChecks,
}

#[derive(Serialize)]
pub struct HealthChecks {
    pub corpus: CorpusCheck,
    pub prompts: usize,
}

#[derive(Serialize)]
pub struct CorpusCheck {
    pub seeds: usize,
    pub resources: usize,
    pub entities: usize,
}

/// Liveness probe - always returns healthy if server is running
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: dojo_common::VERSION.to_string(),
    })
}

/// Readiness probe - reports what was loaded at startup
pub async fn ready(State(state): State<AppState>) -> Json<ReadyResponse> {
    let corpus = &state.corpus;
    let ready = !corpus.seeds().is_empty();

    Json(ReadyResponse {
        status: if ready { "ready" } else { "not_ready" }.to_string(),
        checks: HealthChecks {
            corpus: CorpusCheck {
                seeds: corpus.seeds().len(),
                resources: corpus.resources().len(),
                entities: corpus.len(),
            },
            prompts: state.prompts.len(),
        },
    })
}

#[cfg(test)]
mod tests {
    use crate::test_router;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_ready_reports_corpus() {
        let response = test_router()
            .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ready");
        assert_eq!(json["checks"]["corpus"]["seeds"], 20);
        assert_eq!(json["checks"]["corpus"]["entities"], 29);
        assert_eq!(json["checks"]["prompts"], 20);
    }
}
