//! Seed, principle and resource handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::AppState;
use dojo_common::{
    corpus::{Principles, Resource, Seed, SeedSummary},
    errors::Result,
};

#[derive(Debug, Default, Deserialize)]
pub struct SeedFilter {
    pub category: Option<String>,
}

#[derive(Serialize)]
pub struct PrinciplesResponse {
    pub name: &'static str,
    pub description: &'static str,
    pub content: String,
}

/// Resource listing row; content is fetched separately
#[derive(Serialize)]
pub struct ResourceSummary {
    pub uri: String,
    pub name: String,
    pub description: String,
    pub mime_type: String,
}

/// List seeds, optionally restricted to one category
pub async fn list_seeds(
    State(state): State<AppState>,
    Query(filter): Query<SeedFilter>,
) -> Json<Vec<SeedSummary>> {
    let seeds = match filter.category.as_deref() {
        Some(category) => state
            .corpus
            .seeds_in_category(category)
            .map(SeedSummary::from)
            .collect(),
        None => state.corpus.seed_summaries(),
    };
    Json(seeds)
}

pub async fn get_seed(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Seed>> {
    Ok(Json(state.corpus.seed(&name)?.clone()))
}

pub async fn get_principles(State(state): State<AppState>) -> Json<PrinciplesResponse> {
    Json(PrinciplesResponse {
        name: Principles::NAME,
        description: Principles::DESCRIPTION,
        content: state.corpus.principles().content.clone(),
    })
}

pub async fn list_resources(State(state): State<AppState>) -> Json<Vec<ResourceSummary>> {
    Json(
        state
            .corpus
            .resources()
            .iter()
            .map(|r| ResourceSummary {
                uri: r.uri.clone(),
                name: r.name.clone(),
                description: r.description.clone(),
                mime_type: r.mime_type.clone(),
            })
            .collect(),
    )
}

/// Read a resource by the slug of its `dojo://` URI
pub async fn get_resource(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Resource>> {
    let uri = format!("dojo://{}", slug);
    Ok(Json(state.corpus.resource_by_uri(&uri)?.clone()))
}

#[cfg(test)]
mod tests {
    use crate::test_router;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    async fn get(uri: &str) -> (StatusCode, Value) {
        let response = test_router()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_list_seeds() {
        let (status, json) = get("/v1/seeds").await;
        assert_eq!(status, StatusCode::OK);
        let seeds = json.as_array().unwrap();
        assert_eq!(seeds.len(), 20);
        assert_eq!(seeds[0]["name"], "three_tiered_governance");
        assert!(seeds[0].get("content").is_none());
    }

    #[tokio::test]
    async fn test_list_seeds_by_category() {
        let (_, json) = get("/v1/seeds?category=serenity_valley").await;
        let names: Vec<_> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["inter_acceptance", "radical_freedom"]);

        // Seed names are not categories
        let (_, json) = get("/v1/seeds?category=radical_freedom").await;
        assert!(json.as_array().unwrap().is_empty());

        let (_, json) = get("/v1/seeds?category=nothing_here").await;
        assert!(json.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_seed() {
        let (status, json) = get("/v1/seeds/three_tiered_governance").await;
        assert_eq!(status, StatusCode::OK);
        assert!(!json["content"].as_str().unwrap().is_empty());

        let (status, json) = get("/v1/seeds/missing").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["code"], "SEED_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_get_principles() {
        let (status, json) = get("/v1/principles").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["name"], "Core Dojo Principles");
        assert!(!json["content"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_resources() {
        let (_, json) = get("/v1/resources").await;
        let resources = json.as_array().unwrap();
        assert_eq!(resources.len(), 8);
        assert!(resources[0]["uri"].as_str().unwrap().starts_with("dojo://"));

        let (status, json) = get("/v1/resources/four_modes").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["uri"], "dojo://four_modes");
        assert_eq!(json["mime_type"], "text/markdown");

        let (status, _) = get("/v1/resources/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
