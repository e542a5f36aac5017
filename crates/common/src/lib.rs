//! Dojo Common Library
//!
//! Shared code for the Dojo wisdom services including:
//! - The in-memory Corpus Store (seeds, resources, principles)
//! - Error types and handling
//! - Configuration management
//! - Metrics and observability

pub mod config;
pub mod corpus;
pub mod errors;
pub mod metrics;

// Re-export commonly used types
pub use config::AppConfig;
pub use corpus::{Corpus, EntityKind, EntityRef, Principles, Resource, Searchable, Seed, SeedSummary};
pub use errors::{AppError, Result};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
