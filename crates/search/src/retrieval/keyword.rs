//! Keyword relevance scoring
//!
//! Additive substring scoring over lower-cased fields: the full query and
//! every token of three or more characters each earn a fixed weight per
//! field they occur in. Full-query and token bonuses stack.

/// Full query found in the name
pub const NAME_MATCH: f64 = 1.0;
/// Full query found in the description
pub const DESCRIPTION_MATCH: f64 = 0.5;
/// Full query found in the content
pub const CONTENT_MATCH: f64 = 0.2;

/// Token found in the name
pub const NAME_TOKEN_MATCH: f64 = 0.3;
/// Token found in the description
pub const DESCRIPTION_TOKEN_MATCH: f64 = 0.2;
/// Token found in the content
pub const CONTENT_TOKEN_MATCH: f64 = 0.1;

/// Tokens shorter than this are ignored. Counted in characters, not bytes:
/// `"éa"` is three bytes but only two characters, so it does not score.
pub const MIN_TOKEN_LEN: usize = 3;

/// Entities must score strictly above this to be returned
pub const INCLUSION_THRESHOLD: f64 = 0.1;

/// A lower-cased query and its scoring tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuery {
    text: String,
    tokens: Vec<String>,
}

impl NormalizedQuery {
    pub fn new(raw: &str) -> Self {
        let text = raw.to_lowercase();
        let tokens = text
            .split_whitespace()
            .filter(|token| token.chars().count() >= MIN_TOKEN_LEN)
            .map(str::to_string)
            .collect();

        Self { text, tokens }
    }

    /// The full lower-cased query, whitespace untouched
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whitespace-delimited tokens long enough to score, in query order
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

/// Entity fields after lower-casing
#[derive(Debug, Clone)]
pub struct NormalizedFields {
    pub name: String,
    pub description: String,
    pub content: String,
}

impl NormalizedFields {
    pub fn new(name: &str, description: &str, content: &str) -> Self {
        Self {
            name: name.to_lowercase(),
            description: description.to_lowercase(),
            content: content.to_lowercase(),
        }
    }
}

/// Score already-normalized fields against a query.
///
/// Weights are added in a fixed order so equal inputs always produce
/// bit-identical scores.
pub fn score(query: &NormalizedQuery, fields: &NormalizedFields) -> f64 {
    let mut score = 0.0;

    let text = query.text();
    if fields.name.contains(text) {
        score += NAME_MATCH;
    }
    if fields.description.contains(text) {
        score += DESCRIPTION_MATCH;
    }
    if fields.content.contains(text) {
        score += CONTENT_MATCH;
    }

    for token in query.tokens() {
        if fields.name.contains(token.as_str()) {
            score += NAME_TOKEN_MATCH;
        }
        if fields.description.contains(token.as_str()) {
            score += DESCRIPTION_TOKEN_MATCH;
        }
        if fields.content.contains(token.as_str()) {
            score += CONTENT_TOKEN_MATCH;
        }
    }

    score
}

/// Whether a score clears the inclusion threshold
pub fn is_relevant(score: f64) -> bool {
    score > INCLUSION_THRESHOLD
}
