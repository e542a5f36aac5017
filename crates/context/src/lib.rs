//! Dojo Context Engine
//!
//! Narrative responses built on top of the corpus and the relevance engine:
//! - Mode dispatch (mirror, scout, gardener, implementation)
//! - Seed application and lineage tracing
//! - Guided practices
//! - The seed prompt catalog

pub mod guidance;
pub mod modes;
pub mod practice;
pub mod prompts;
pub mod template;

pub use guidance::{apply_seed, trace_lineage, LINEAGE_LIMIT};
pub use modes::{reflect, Mode, Reflection, UNKNOWN_MODE_GUIDANCE};
pub use practice::{check_pace, create_thinking_room, explore_radical_freedom, practice_inter_acceptance};
pub use prompts::{PromptCatalog, PromptDescriptor, PromptMessage};
