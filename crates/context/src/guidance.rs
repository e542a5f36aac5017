//! Seed application and lineage tracing

use crate::template;
use dojo_common::corpus::Corpus;
use dojo_search::Retriever;

/// Lineage traces list at most this many related entities
pub const LINEAGE_LIMIT: usize = 5;

/// Rendered when a lineage search finds nothing
pub const NO_LINEAGE_MATCHES: &str =
    "No direct matches found in the knowledge base. This may be a new insight worth documenting!\n\n";

/// Apply a seed to a situation.
///
/// A missing seed yields a "not found" narrative rather than an error.
pub fn apply_seed(corpus: &Corpus, seed_name: &str, situation: &str) -> String {
    match corpus.seed(seed_name) {
        Ok(seed) => template::APPLY_SEED.render(&[
            ("seed_name", seed.name.as_str()),
            ("situation", situation),
            ("seed_content", seed.content.as_str()),
        ]),
        Err(err) => {
            tracing::debug!(error = %err, "Seed lookup failed");
            format!("Seed '{}' not found.", seed_name)
        }
    }
}

/// Trace related wisdom for an idea using the first few search results
pub fn trace_lineage<R: Retriever + ?Sized>(retriever: &R, idea_or_insight: &str) -> String {
    let results = retriever.retrieve(idea_or_insight);

    let related = if results.is_empty() {
        NO_LINEAGE_MATCHES.to_string()
    } else {
        let mut text = String::from("## Related Wisdom in the Knowledge Base\n\n");
        for (i, result) in results.iter().take(LINEAGE_LIMIT).enumerate() {
            text.push_str(&format!(
                "### {}. {} ({})\n\n{}\n\n**Relevance:** {:.1}%\n\n",
                i + 1,
                result.name,
                result.entity_type,
                result.description,
                result.relevance * 100.0
            ));
        }
        text
    };

    template::LINEAGE.render(&[("idea", idea_or_insight), ("related_wisdom", related.as_str())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use dojo_common::corpus::EntityKind;
    use dojo_search::{RelevanceEngine, SearchResult};
    use std::sync::Arc;

    fn corpus() -> Arc<Corpus> {
        Arc::new(Corpus::builtin().unwrap())
    }

    struct Fixed(Vec<SearchResult>);

    impl Retriever for Fixed {
        fn retrieve(&self, _query: &str) -> Vec<SearchResult> {
            self.0.clone()
        }
    }

    fn hit(name: &str, relevance: f64) -> SearchResult {
        SearchResult {
            entity_type: EntityKind::Seed,
            name: name.to_string(),
            description: format!("{} description", name),
            relevance,
            snippet: String::new(),
        }
    }

    #[test]
    fn test_apply_seed_embeds_content_verbatim() {
        let corpus = corpus();
        let out = apply_seed(&corpus, "safety_switch", "An agent wants to auto-merge PRs");
        let seed = corpus.seed("safety_switch").unwrap();
        assert!(out.starts_with("**Applying Seed: safety_switch**"));
        assert!(out.contains("**Situation:** An agent wants to auto-merge PRs"));
        assert!(out.contains(&seed.content));
    }

    #[test]
    fn test_apply_missing_seed() {
        let out = apply_seed(&corpus(), "nonexistent_xyz", "anything");
        assert_eq!(out, "Seed 'nonexistent_xyz' not found.");
    }

    #[test]
    fn test_lineage_truncates_to_five() {
        let results = (0..8).map(|i| hit(&format!("seed_{}", i), 0.5)).collect();
        let out = trace_lineage(&Fixed(results), "idea");
        assert!(out.contains("### 5. seed_4 (seed)"));
        assert!(!out.contains("### 6."));
        assert!(!out.contains("seed_5"));
    }

    #[test]
    fn test_lineage_formats_relevance_percent() {
        let out = trace_lineage(&Fixed(vec![hit("graceful_failure", 1.3)]), "failure");
        assert!(out.starts_with("# Lineage Trace: failure"));
        assert!(out.contains("## Related Wisdom in the Knowledge Base"));
        assert!(out.contains("graceful_failure description"));
        assert!(out.contains("**Relevance:** 130.0%"));
    }

    #[test]
    fn test_lineage_without_matches() {
        let out = trace_lineage(&Fixed(Vec::new()), "xyzabc123");
        assert!(out.contains(NO_LINEAGE_MATCHES));
        assert!(!out.contains("Related Wisdom"));
    }

    #[test]
    fn test_lineage_over_real_engine() {
        let engine = RelevanceEngine::new(corpus());
        let out = trace_lineage(&engine, "lineage");
        assert!(out.contains("lineage_transmission (seed)"));
    }
}
