//! Keyword relevance retrieval over the corpus
//!
//! Provides:
//! - Additive substring scoring of name, description and content
//! - Snippet extraction around the first match
//! - A full linear scan in corpus order (seeds, resources, principles)

pub mod keyword;
pub mod snippet;

use dojo_common::corpus::{Corpus, EntityKind, EntityRef};
use keyword::{NormalizedFields, NormalizedQuery};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A single ranked hit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    /// Entity variant (`seed`, `resource`, `principle`)
    #[serde(rename = "type")]
    pub entity_type: EntityKind,

    /// Entity name
    pub name: String,

    /// Entity description
    pub description: String,

    /// Additive keyword score; only comparable within one result set
    pub relevance: f64,

    /// Lower-cased excerpt of the content near the match
    pub snippet: String,
}

/// Common trait for anything that answers free-text queries
pub trait Retriever: Send + Sync {
    /// Retrieve matching entities in corpus scan order
    fn retrieve(&self, query: &str) -> Vec<SearchResult>;
}

/// Scores every entity in the corpus against a query
#[derive(Debug, Clone)]
pub struct RelevanceEngine {
    corpus: Arc<Corpus>,
}

impl RelevanceEngine {
    /// Create a new engine over a shared corpus
    pub fn new(corpus: Arc<Corpus>) -> Self {
        Self { corpus }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Score every entity and keep those above the inclusion threshold.
    ///
    /// Results keep scan order; they are not sorted by relevance.
    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        let query = NormalizedQuery::new(query);

        let results: Vec<SearchResult> = self
            .corpus
            .entities()
            .filter_map(|entity| score_entity(&query, entity))
            .collect();

        tracing::debug!(
            query = %query.text(),
            tokens = query.tokens().len(),
            results = results.len(),
            "Wisdom search completed"
        );

        results
    }
}

impl Retriever for RelevanceEngine {
    fn retrieve(&self, query: &str) -> Vec<SearchResult> {
        self.search(query)
    }
}

fn score_entity(query: &NormalizedQuery, entity: EntityRef<'_>) -> Option<SearchResult> {
    let searchable = entity.as_searchable();
    let fields = NormalizedFields::new(
        searchable.search_name(),
        searchable.search_description(),
        searchable.content(),
    );

    let relevance = keyword::score(query, &fields);
    if !keyword::is_relevant(relevance) {
        return None;
    }

    Some(SearchResult {
        entity_type: searchable.kind(),
        name: searchable.name().to_string(),
        description: searchable.description().to_string(),
        relevance,
        snippet: snippet::extract(&fields.content, query),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use dojo_common::corpus::{Principles, Resource, Seed};

    fn seed(name: &str, description: &str, content: &str) -> Seed {
        Seed {
            name: name.to_string(),
            description: description.to_string(),
            content: content.to_string(),
            category: "test".to_string(),
            triggers: String::new(),
        }
    }

    fn builtin() -> RelevanceEngine {
        RelevanceEngine::new(Arc::new(Corpus::builtin().unwrap()))
    }

    fn small() -> RelevanceEngine {
        let corpus = Corpus::builder()
            .seed(seed("mirror_mode", "reflect back", "a plain body"))
            .seed(seed("other", "something else", "talks about the mirror once"))
            .seed(seed("scout_mode", "routes", "nothing here"))
            .resource(Resource {
                uri: "dojo://guide".into(),
                name: "Guide".into(),
                description: "A Guide to the mirror".into(),
                mime_type: "text/markdown".into(),
                content: "Mirror, Scout and friends".into(),
            })
            .principles(Principles::new("Beginner's Mind"))
            .build()
            .unwrap();
        RelevanceEngine::new(Arc::new(corpus))
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let engine = builtin();
        let results = engine.search("");
        assert_eq!(results.len(), engine.corpus().len());
        assert!(results.iter().all(|r| r.relevance >= 1.7 - 1e-9));

        let base = results[0].relevance;
        assert!(results.iter().all(|r| (r.relevance - base).abs() < 1e-9));
    }

    #[test]
    fn test_results_follow_scan_order() {
        let engine = builtin();
        let results = engine.search("");
        assert_eq!(results[0].entity_type, EntityKind::Seed);
        assert_eq!(results[0].name, "three_tiered_governance");
        assert_eq!(results[20].entity_type, EntityKind::Resource);
        let last = results.last().unwrap();
        assert_eq!(last.entity_type, EntityKind::Principle);
        assert_eq!(last.name, "Core Dojo Principles");
        assert_eq!(last.description, "The three foundational principles of Dojo");
    }

    #[test]
    fn test_unmatched_query_is_empty() {
        assert!(builtin().search("xyzabc123").is_empty());
    }

    #[test]
    fn test_short_tokens_without_full_match_are_empty() {
        assert!(small().search("zz qq").is_empty());
    }

    #[test]
    fn test_search_is_deterministic() {
        let engine = builtin();
        let first = engine.search("context governance");
        for _ in 0..5 {
            assert_eq!(engine.search("context governance"), first);
        }
    }

    #[test]
    fn test_name_match_dominates_content_match() {
        let results = small().search("mirror");
        let by_name = results.iter().find(|r| r.name == "mirror_mode").unwrap();
        let by_content = results.iter().find(|r| r.name == "other").unwrap();
        assert!(by_name.relevance - by_content.relevance >= 1.0 - 1e-9);
    }

    #[test]
    fn test_scout_double_counting() {
        let results = small().search("scout");
        let scout = results.iter().find(|r| r.name == "scout_mode").unwrap();
        assert!((scout.relevance - 1.3).abs() < 1e-9);

        // "Scout" appears only in the resource content: 0.2 + 0.1
        let guide = results.iter().find(|r| r.name == "Guide").unwrap();
        assert!((guide.relevance - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_results_are_not_sorted_by_relevance() {
        let results = small().search("mirror");
        let names: Vec<_> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["mirror_mode", "other", "Guide"]);
        assert!(results[1].relevance < results[2].relevance);
    }

    #[test]
    fn test_principles_scored_by_search_key() {
        let results = small().search("principles");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].entity_type, EntityKind::Principle);
        // name "principles" (1.0 + 0.3) and description "core dojo principles" (0.5 + 0.2)
        assert!((results[0].relevance - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_snippet_is_lower_cased() {
        let results = small().search("guide");
        let guide = results.iter().find(|r| r.name == "Guide").unwrap();
        assert_eq!(guide.snippet, "mirror, scout and friends");
    }

    #[test]
    fn test_seed_lookup_round_trip_via_search() {
        let results = builtin().search("three_tiered_governance");
        assert_eq!(results[0].name, "three_tiered_governance");
        assert_eq!(results[0].entity_type, EntityKind::Seed);
    }

    #[test]
    fn test_result_serializes_type_field() {
        let results = small().search("guide");
        let json = serde_json::to_value(&results[0]).unwrap();
        assert_eq!(json["type"], "resource");
        assert_eq!(json["name"], "Guide");
        assert!(json.get("entity_type").is_none());
    }

    #[test]
    fn test_retriever_trait_matches_search() {
        let engine = builtin();
        let retriever: &dyn Retriever = &engine;
        assert_eq!(retriever.retrieve("rest"), engine.search("rest"));
    }
}
