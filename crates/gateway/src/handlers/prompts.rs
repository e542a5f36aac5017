//! Prompt handlers

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::AppState;
use dojo_common::errors::Result;
use dojo_context::{PromptDescriptor, PromptMessage};

#[derive(Serialize)]
pub struct PromptResponse {
    pub name: String,
    pub messages: Vec<PromptMessage>,
}

pub async fn list_prompts(State(state): State<AppState>) -> Json<Vec<PromptDescriptor>> {
    Json(state.prompts.list())
}

pub async fn get_prompt(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<PromptResponse>> {
    let messages = state.prompts.render(&name)?;
    Ok(Json(PromptResponse { name, messages }))
}
