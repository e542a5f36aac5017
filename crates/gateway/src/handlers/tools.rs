//! Tool handlers

use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::tools::{self, Tool, ToolDefinition, ToolResult};
use crate::AppState;
use dojo_common::{errors::Result, metrics::ToolMetrics};

#[derive(Serialize)]
pub struct ToolListResponse {
    pub tools: Vec<ToolDefinition>,
}

pub async fn list_tools() -> Json<ToolListResponse> {
    Json(ToolListResponse {
        tools: Tool::ALL.iter().map(Tool::definition).collect(),
    })
}

/// Call a tool; the request body is its argument object
pub async fn call_tool(
    State(state): State<AppState>,
    Path(name): Path<String>,
    body: Bytes,
) -> Result<Json<ToolResult>> {
    let tool: Tool = name.parse()?;
    let timer = ToolMetrics::start(tool.name());

    let result = match parse_arguments(&body) {
        Ok(args) => tools::call(&state, tool, args),
        Err(err) => Ok(ToolResult::error(format!("Invalid arguments: {}", err))),
    };

    let is_error = result.as_ref().map_or(true, |r| r.is_error);
    let latency_ms = timer.finish(is_error);
    tracing::info!(tool = %tool, is_error, latency_ms, "Tool call completed");

    Ok(Json(result?))
}

/// An empty body is an empty argument object
fn parse_arguments(body: &[u8]) -> serde_json::Result<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Default::default()));
    }
    serde_json::from_slice(body)
}
