//! Dojo Relevance Engine
//!
//! Deterministic keyword search over the wisdom corpus:
//! - Additive substring scoring with a fixed inclusion threshold
//! - Snippet extraction anchored on the first match
//! - Results in corpus scan order

pub mod retrieval;

pub use retrieval::{RelevanceEngine, Retriever, SearchResult};
