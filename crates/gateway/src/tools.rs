//! Tool catalog
//!
//! Maps transport tool names onto the library operations. Arguments are
//! decoded with serde; a malformed argument object becomes an error result
//! rather than a transport failure.

use crate::AppState;
use dojo_common::errors::{AppError, Result};
use dojo_common::metrics;
use dojo_context::{
    apply_seed, check_pace, create_thinking_room, explore_radical_freedom,
    practice_inter_acceptance, reflect, trace_lineage,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;
use std::time::Instant;

/// Every callable tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Reflect,
    SearchWisdom,
    GetSeed,
    ApplySeed,
    ListSeeds,
    GetPrinciples,
    TraceLineage,
    CreateThinkingRoom,
    PracticeInterAcceptance,
    ExploreRadicalFreedom,
    CheckPace,
}

impl Tool {
    pub const ALL: [Tool; 11] = [
        Tool::Reflect,
        Tool::SearchWisdom,
        Tool::GetSeed,
        Tool::ApplySeed,
        Tool::ListSeeds,
        Tool::GetPrinciples,
        Tool::TraceLineage,
        Tool::CreateThinkingRoom,
        Tool::PracticeInterAcceptance,
        Tool::ExploreRadicalFreedom,
        Tool::CheckPace,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Tool::Reflect => "dojo.reflect",
            Tool::SearchWisdom => "dojo.search_wisdom",
            Tool::GetSeed => "dojo.get_seed",
            Tool::ApplySeed => "dojo.apply_seed",
            Tool::ListSeeds => "dojo.list_seeds",
            Tool::GetPrinciples => "dojo.get_principles",
            Tool::TraceLineage => "dojo.trace_lineage",
            Tool::CreateThinkingRoom => "dojo.create_thinking_room",
            Tool::PracticeInterAcceptance => "dojo.practice_inter_acceptance",
            Tool::ExploreRadicalFreedom => "dojo.explore_radical_freedom",
            Tool::CheckPace => "dojo.check_pace",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Tool::Reflect => {
                "Reflect on a situation in one of four modes: mirror, scout, gardener, or implementation"
            }
            Tool::SearchWisdom => "Search across all Dojo wisdom: seeds, resources and principles",
            Tool::GetSeed => "Get a specific seed by name",
            Tool::ApplySeed => "Apply a seed to a specific situation",
            Tool::ListSeeds => "List all available seeds",
            Tool::GetPrinciples => "Get the core Dojo principles",
            Tool::TraceLineage => "Trace the lineage of an idea through related wisdom",
            Tool::CreateThinkingRoom => "Create a structured space for focused reflection",
            Tool::PracticeInterAcceptance => {
                "Practice accepting yourself through the eyes of a compassionate witness"
            }
            Tool::ExploreRadicalFreedom => {
                "Separate what you can and cannot control, then choose a response"
            }
            Tool::CheckPace => "Check whether a session is driven by understanding or extraction",
        }
    }

    /// JSON schema of the argument object
    pub fn input_schema(&self) -> Value {
        match self {
            Tool::Reflect => json!({
                "type": "object",
                "properties": {
                    "situation": { "type": "string", "description": "The situation to reflect on" },
                    "perspectives": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "Perspectives to weigh"
                    },
                    "mode": {
                        "type": "string",
                        "enum": ["mirror", "scout", "gardener", "implementation"],
                        "description": "Reflection mode"
                    }
                },
                "required": ["situation", "perspectives", "mode"]
            }),
            Tool::SearchWisdom => string_args(&[("query", "Free-text search query")]),
            Tool::GetSeed => string_args(&[("name", "Seed name")]),
            Tool::ApplySeed => string_args(&[
                ("seed_name", "Seed to apply"),
                ("situation", "Situation to apply it to"),
            ]),
            Tool::ListSeeds | Tool::GetPrinciples => json!({
                "type": "object",
                "properties": {}
            }),
            Tool::TraceLineage => string_args(&[("idea_or_insight", "Idea to trace")]),
            Tool::CreateThinkingRoom => string_args(&[
                ("topic", "Topic for the room"),
                ("agent_name", "Who is opening the room"),
            ]),
            Tool::PracticeInterAcceptance | Tool::ExploreRadicalFreedom => {
                string_args(&[("situation", "The situation to work with")])
            }
            Tool::CheckPace => string_args(&[("session_description", "What the session looked like")]),
        }
    }

    pub fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name().to_string(),
            description: self.description().to_string(),
            input_schema: self.input_schema(),
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tool {
    type Err = AppError;

    fn from_str(name: &str) -> Result<Self> {
        Tool::ALL
            .into_iter()
            .find(|tool| tool.name() == name)
            .ok_or_else(|| AppError::UnknownTool {
                name: name.to_string(),
            })
    }
}

fn string_args(fields: &[(&str, &str)]) -> Value {
    let properties: serde_json::Map<String, Value> = fields
        .iter()
        .map(|(name, description)| {
            (
                name.to_string(),
                json!({ "type": "string", "description": description }),
            )
        })
        .collect();
    let required: Vec<&str> = fields.iter().map(|(name, _)| *name).collect();

    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

/// Listed tool
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// One content block of a tool result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolContent {
    #[serde(rename = "type")]
    pub content_type: String,
    pub text: String,
}

/// Outcome of a tool call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolResult {
    pub content: Vec<ToolContent>,
    #[serde(rename = "isError")]
    pub is_error: bool,
}

impl ToolResult {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent {
                content_type: "text".to_string(),
                text: text.into(),
            }],
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            is_error: true,
            ..Self::text(text)
        }
    }
}

// Missing fields decode to empty values, so an absent `mode` falls through
// to the unknown-mode guidance and an absent `query` matches everything.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ReflectArgs {
    situation: String,
    perspectives: Vec<String>,
    mode: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct QueryArgs {
    query: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct NameArgs {
    name: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ApplySeedArgs {
    seed_name: String,
    situation: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LineageArgs {
    idea_or_insight: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ThinkingRoomArgs {
    topic: String,
    agent_name: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SituationArgs {
    situation: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PaceArgs {
    session_description: String,
}

/// Run a tool against the shared state
pub fn call(state: &AppState, tool: Tool, args: Value) -> Result<ToolResult> {
    match tool {
        Tool::Reflect => with_args(args, |a: ReflectArgs| {
            Ok(ToolResult::text(reflect(&a.situation, &a.perspectives, &a.mode)))
        }),
        Tool::SearchWisdom => with_args(args, |a: QueryArgs| {
            let start = Instant::now();
            let results = state.engine.search(&a.query);
            metrics::record_search(start.elapsed().as_secs_f64(), results.len());
            Ok(ToolResult::text(serde_json::to_string_pretty(&results)?))
        }),
        Tool::GetSeed => with_args(args, |a: NameArgs| match state.corpus.seed(&a.name) {
            Ok(seed) => Ok(ToolResult::text(serde_json::to_string_pretty(seed)?)),
            Err(err) => Ok(ToolResult::error(format!("Seed not found: {}", err))),
        }),
        Tool::ApplySeed => with_args(args, |a: ApplySeedArgs| {
            Ok(ToolResult::text(apply_seed(&state.corpus, &a.seed_name, &a.situation)))
        }),
        Tool::ListSeeds => Ok(ToolResult::text(serde_json::to_string_pretty(
            &state.corpus.seed_summaries(),
        )?)),
        Tool::GetPrinciples => Ok(ToolResult::text(state.corpus.principles().content.clone())),
        Tool::TraceLineage => with_args(args, |a: LineageArgs| {
            Ok(ToolResult::text(trace_lineage(&state.engine, &a.idea_or_insight)))
        }),
        Tool::CreateThinkingRoom => with_args(args, |a: ThinkingRoomArgs| {
            Ok(ToolResult::text(create_thinking_room(&a.topic, &a.agent_name)))
        }),
        Tool::PracticeInterAcceptance => with_args(args, |a: SituationArgs| {
            Ok(ToolResult::text(practice_inter_acceptance(&a.situation)))
        }),
        Tool::ExploreRadicalFreedom => with_args(args, |a: SituationArgs| {
            Ok(ToolResult::text(explore_radical_freedom(&a.situation)))
        }),
        Tool::CheckPace => with_args(args, |a: PaceArgs| {
            Ok(ToolResult::text(check_pace(&a.session_description)))
        }),
    }
}

fn with_args<A, F>(args: Value, run: F) -> Result<ToolResult>
where
    A: DeserializeOwned,
    F: FnOnce(A) -> Result<ToolResult>,
{
    match serde_json::from_value::<A>(args) {
        Ok(parsed) => run(parsed),
        Err(err) => {
            tracing::debug!(error = %err, "Rejected tool arguments");
            Ok(ToolResult::error(format!("Invalid arguments: {}", err)))
        }
    }
}
