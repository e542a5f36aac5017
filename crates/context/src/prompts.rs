//! Seed prompt catalog
//!
//! One prompt per seed, named `dojo.seed.<seed name>`. The catalog is built
//! once from the corpus as a name to render-function table.

use dojo_common::corpus::{Corpus, Seed};
use dojo_common::errors::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Prefix of every seed prompt name
pub const SEED_PROMPT_PREFIX: &str = "dojo.seed.";

/// Renders a seed into prompt text
pub type PromptRenderer = fn(&Seed) -> String;

fn seed_content(seed: &Seed) -> String {
    seed.content.clone()
}

/// Speaker of a prompt message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
}

/// Text payload of a prompt message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextContent {
    #[serde(rename = "type")]
    pub content_type: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PromptMessage {
    pub role: Role,
    pub content: TextContent,
}

/// Listing row for a prompt
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PromptDescriptor {
    pub name: String,
    pub description: String,
}

struct PromptEntry {
    descriptor: PromptDescriptor,
    seed_name: String,
    render: PromptRenderer,
}

/// Static table of seed prompts
pub struct PromptCatalog {
    corpus: Arc<Corpus>,
    entries: Vec<PromptEntry>,
    index: HashMap<String, usize>,
}

impl PromptCatalog {
    pub fn new(corpus: Arc<Corpus>) -> Self {
        let entries: Vec<PromptEntry> = corpus
            .seeds()
            .iter()
            .map(|seed| PromptEntry {
                descriptor: PromptDescriptor {
                    name: format!("{}{}", SEED_PROMPT_PREFIX, seed.name),
                    description: seed.description.clone(),
                },
                seed_name: seed.name.clone(),
                render: seed_content,
            })
            .collect();

        let index = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.descriptor.name.clone(), i))
            .collect();

        Self {
            corpus,
            entries,
            index,
        }
    }

    /// Prompts in seed order
    pub fn list(&self) -> Vec<PromptDescriptor> {
        self.entries.iter().map(|e| e.descriptor.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render a prompt into its messages
    pub fn render(&self, name: &str) -> Result<Vec<PromptMessage>> {
        let entry = self
            .index
            .get(name)
            .map(|&i| &self.entries[i])
            .ok_or_else(|| AppError::PromptNotFound {
                name: name.to_string(),
            })?;

        let seed = self.corpus.seed(&entry.seed_name)?;

        Ok(vec![PromptMessage {
            role: Role::User,
            content: TextContent {
                content_type: "text".to_string(),
                text: (entry.render)(seed),
            },
        }])
    }
}
