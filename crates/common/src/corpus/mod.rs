//! Corpus Store
//!
//! Holds every searchable entity (seed patches, documentation resources and
//! the singleton principles document) in memory. The corpus is built once at
//! startup, never mutated, and shared read-only between callers.

mod catalog;

use crate::errors::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Entity variants held by the corpus
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Seed,
    Resource,
    Principle,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Seed => "seed",
            EntityKind::Resource => "resource",
            EntityKind::Principle => "principle",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A Dojo Seed Patch
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Seed {
    /// Unique, case-sensitive identifier
    pub name: String,

    /// Short human-readable summary
    pub description: String,

    /// Full body text (markdown)
    pub content: String,

    /// Grouping tag, not used in ranking
    pub category: String,

    /// When the seed applies
    pub triggers: String,
}

/// A Dojo documentation resource
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Resource {
    /// Addressable URI (`dojo://<slug>`)
    pub uri: String,

    /// Unique, case-sensitive identifier
    pub name: String,

    /// Short human-readable summary
    pub description: String,

    /// Content type of `content`
    pub mime_type: String,

    /// Full body text (markdown)
    pub content: String,
}

/// The singleton principles document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Principles {
    pub content: String,
}

impl Principles {
    /// Display name reported in results
    pub const NAME: &'static str = "Core Dojo Principles";

    /// Display description reported in results
    pub const DESCRIPTION: &'static str = "The three foundational principles of Dojo";

    /// Name the ranking pass compares the query against
    pub const SEARCH_NAME: &'static str = "principles";

    /// Description the ranking pass compares the query against
    pub const SEARCH_DESCRIPTION: &'static str = "Core Dojo Principles";

    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Summary row returned by seed listings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeedSummary {
    pub name: String,
    pub description: String,
    pub category: String,
}

/// Common view over every entity variant.
///
/// `search_name` and `search_description` are the fields the relevance
/// engine scores; they default to the display fields.
pub trait Searchable {
    fn kind(&self) -> EntityKind;
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn content(&self) -> &str;

    fn search_name(&self) -> &str {
        self.name()
    }

    fn search_description(&self) -> &str {
        self.description()
    }
}

impl Searchable for Seed {
    fn kind(&self) -> EntityKind {
        EntityKind::Seed
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn description(&self) -> &str {
        &self.description
    }
    fn content(&self) -> &str {
        &self.content
    }
}

impl Searchable for Resource {
    fn kind(&self) -> EntityKind {
        EntityKind::Resource
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn description(&self) -> &str {
        &self.description
    }
    fn content(&self) -> &str {
        &self.content
    }
}

impl Searchable for Principles {
    fn kind(&self) -> EntityKind {
        EntityKind::Principle
    }
    fn name(&self) -> &str {
        Self::NAME
    }
    fn description(&self) -> &str {
        Self::DESCRIPTION
    }
    fn content(&self) -> &str {
        &self.content
    }
    fn search_name(&self) -> &str {
        Self::SEARCH_NAME
    }
    fn search_description(&self) -> &str {
        Self::SEARCH_DESCRIPTION
    }
}

/// Borrowed reference to any entity in the corpus
#[derive(Debug, Clone, Copy)]
pub enum EntityRef<'a> {
    Seed(&'a Seed),
    Resource(&'a Resource),
    Principles(&'a Principles),
}

impl<'a> EntityRef<'a> {
    /// View the entity through the common searchable interface
    pub fn as_searchable(&self) -> &'a dyn Searchable {
        match *self {
            EntityRef::Seed(seed) => seed,
            EntityRef::Resource(resource) => resource,
            EntityRef::Principles(principles) => principles,
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.as_searchable().kind()
    }

    pub fn name(&self) -> &'a str {
        self.as_searchable().name()
    }

    pub fn description(&self) -> &'a str {
        self.as_searchable().description()
    }

    pub fn content(&self) -> &'a str {
        self.as_searchable().content()
    }

    /// Seed category, if this is a seed
    pub fn category(&self) -> Option<&'a str> {
        match *self {
            EntityRef::Seed(seed) => Some(&seed.category),
            _ => None,
        }
    }
}

/// Immutable in-memory store of all entities
#[derive(Debug, Clone)]
pub struct Corpus {
    seeds: Vec<Seed>,
    seed_index: HashMap<String, usize>,
    resources: Vec<Resource>,
    resource_index: HashMap<String, usize>,
    uri_index: HashMap<String, usize>,
    principles: Principles,
}

impl Corpus {
    /// Build the corpus shipped with the binary
    pub fn builtin() -> Result<Self> {
        let corpus = CorpusBuilder::new()
            .seeds(catalog::seeds())
            .resources(catalog::resources())
            .principles(catalog::principles())
            .build()?;

        tracing::info!(
            seeds = corpus.seeds.len(),
            resources = corpus.resources.len(),
            "Corpus loaded"
        );

        Ok(corpus)
    }

    pub fn builder() -> CorpusBuilder {
        CorpusBuilder::new()
    }

    /// Exact, case-sensitive lookup of an entity of the given variant
    pub fn get(&self, kind: EntityKind, name: &str) -> Result<EntityRef<'_>> {
        match kind {
            EntityKind::Seed => self.seed(name).map(EntityRef::Seed),
            EntityKind::Resource => self.resource(name).map(EntityRef::Resource),
            EntityKind::Principle if name == Principles::NAME => {
                Ok(EntityRef::Principles(&self.principles))
            }
            EntityKind::Principle => Err(AppError::NotFound {
                resource_type: kind.to_string(),
                id: name.to_string(),
            }),
        }
    }

    /// All entities of a variant in construction order
    pub fn list(&self, kind: EntityKind) -> Vec<EntityRef<'_>> {
        match kind {
            EntityKind::Seed => self.seeds.iter().map(EntityRef::Seed).collect(),
            EntityKind::Resource => self.resources.iter().map(EntityRef::Resource).collect(),
            EntityKind::Principle => vec![EntityRef::Principles(&self.principles)],
        }
    }

    /// Every entity in scan order: seeds, then resources, then principles
    pub fn entities(&self) -> impl Iterator<Item = EntityRef<'_>> {
        self.seeds
            .iter()
            .map(EntityRef::Seed)
            .chain(self.resources.iter().map(EntityRef::Resource))
            .chain(std::iter::once(EntityRef::Principles(&self.principles)))
    }

    /// Total number of entities, principles included
    pub fn len(&self) -> usize {
        self.seeds.len() + self.resources.len() + 1
    }

    /// A corpus always holds the principles document
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn seed(&self, name: &str) -> Result<&Seed> {
        self.seed_index
            .get(name)
            .map(|&i| &self.seeds[i])
            .ok_or_else(|| AppError::SeedNotFound {
                name: name.to_string(),
            })
    }

    pub fn seeds(&self) -> &[Seed] {
        &self.seeds
    }

    pub fn seed_summaries(&self) -> Vec<SeedSummary> {
        self.seeds.iter().map(SeedSummary::from).collect()
    }

    pub fn seeds_in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Seed> + 'a {
        self.seeds.iter().filter(move |seed| seed.category == category)
    }

    pub fn resource(&self, name: &str) -> Result<&Resource> {
        self.resource_index
            .get(name)
            .map(|&i| &self.resources[i])
            .ok_or_else(|| AppError::ResourceNotFound {
                name: name.to_string(),
            })
    }

    pub fn resource_by_uri(&self, uri: &str) -> Result<&Resource> {
        self.uri_index
            .get(uri)
            .map(|&i| &self.resources[i])
            .ok_or_else(|| AppError::ResourceNotFound {
                name: uri.to_string(),
            })
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn principles(&self) -> &Principles {
        &self.principles
    }
}

impl From<&Seed> for SeedSummary {
    fn from(seed: &Seed) -> Self {
        Self {
            name: seed.name.clone(),
            description: seed.description.clone(),
            category: seed.category.clone(),
        }
    }
}

/// Assembles a [`Corpus`], rejecting duplicate names per variant, duplicate
/// resource URIs and a missing principles document
#[derive(Debug, Default)]
pub struct CorpusBuilder {
    seeds: Vec<Seed>,
    resources: Vec<Resource>,
    principles: Option<Principles>,
}

impl CorpusBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(mut self, seed: Seed) -> Self {
        self.seeds.push(seed);
        self
    }

    pub fn seeds(mut self, seeds: impl IntoIterator<Item = Seed>) -> Self {
        self.seeds.extend(seeds);
        self
    }

    pub fn resource(mut self, resource: Resource) -> Self {
        self.resources.push(resource);
        self
    }

    pub fn resources(mut self, resources: impl IntoIterator<Item = Resource>) -> Self {
        self.resources.extend(resources);
        self
    }

    pub fn principles(mut self, principles: Principles) -> Self {
        self.principles = Some(principles);
        self
    }

    pub fn build(self) -> Result<Corpus> {
        let seed_index = unique_index(
            EntityKind::Seed.as_str(),
            self.seeds.iter().map(|s| s.name.as_str()),
        )?;
        let resource_index = unique_index(
            EntityKind::Resource.as_str(),
            self.resources.iter().map(|r| r.name.as_str()),
        )?;
        let uri_index = unique_index(
            "resource uri",
            self.resources.iter().map(|r| r.uri.as_str()),
        )?;
        let principles = self.principles.ok_or(AppError::MissingPrinciples)?;

        Ok(Corpus {
            seeds: self.seeds,
            seed_index,
            resources: self.resources,
            resource_index,
            uri_index,
            principles,
        })
    }
}

fn unique_index<'a>(
    kind: &str,
    keys: impl Iterator<Item = &'a str>,
) -> Result<HashMap<String, usize>> {
    let mut index = HashMap::new();
    for (position, key) in keys.enumerate() {
        if index.insert(key.to_string(), position).is_some() {
            return Err(AppError::Duplicate {
                kind: kind.to_string(),
                name: key.to_string(),
            });
        }
    }
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed(name: &str, description: &str, content: &str) -> Seed {
        Seed {
            name: name.to_string(),
            description: description.to_string(),
            content: content.to_string(),
            category: "test".to_string(),
            triggers: String::new(),
        }
    }

    #[test]
    fn test_builtin_corpus_builds() {
        let corpus = Corpus::builtin().unwrap();
        assert_eq!(corpus.seeds().len(), 20);
        assert_eq!(corpus.resources().len(), 8);
        assert_eq!(corpus.len(), 29);
        assert!(corpus.principles().content.starts_with("# Core Dojo Principles"));
    }

    #[test]
    fn test_seed_lookup_is_exact() {
        let corpus = Corpus::builtin().unwrap();
        let seed = corpus.seed("three_tiered_governance").unwrap();
        assert_eq!(seed.name, "three_tiered_governance");
        assert_eq!(seed.category, "dojo_genesis");

        assert!(matches!(
            corpus.seed("nonexistent_xyz"),
            Err(AppError::SeedNotFound { .. })
        ));
        assert!(corpus.seed("Three_Tiered_Governance").is_err());
    }

    #[test]
    fn test_get_by_kind() {
        let corpus = Corpus::builtin().unwrap();

        let entity = corpus.get(EntityKind::Resource, "four_modes").unwrap();
        assert_eq!(entity.kind(), EntityKind::Resource);
        assert_eq!(entity.category(), None);

        let principles = corpus.get(EntityKind::Principle, Principles::NAME).unwrap();
        assert_eq!(principles.name(), "Core Dojo Principles");

        assert!(corpus.get(EntityKind::Seed, "four_modes").is_err());
        assert!(corpus.get(EntityKind::Principle, "principles").is_err());
    }

    #[test]
    fn test_list_preserves_construction_order() {
        let corpus = Corpus::builtin().unwrap();
        let names: Vec<_> = corpus.list(EntityKind::Seed).iter().map(|e| e.name()).collect();
        assert_eq!(names.first(), Some(&"three_tiered_governance"));
        assert_eq!(names.last(), Some(&"radical_freedom"));
        assert_eq!(corpus.list(EntityKind::Principle).len(), 1);
    }

    #[test]
    fn test_entities_scan_order() {
        let corpus = Corpus::builtin().unwrap();
        let kinds: Vec<_> = corpus.entities().map(|e| e.kind()).collect();
        assert_eq!(kinds.len(), corpus.len());
        assert_eq!(kinds[0], EntityKind::Seed);
        assert_eq!(kinds[20], EntityKind::Resource);
        assert_eq!(*kinds.last().unwrap(), EntityKind::Principle);
    }

    #[test]
    fn test_resource_by_uri() {
        let corpus = Corpus::builtin().unwrap();
        let resource = corpus.resource_by_uri("dojo://aroma_philosophy").unwrap();
        assert_eq!(resource.name, "AROMA Philosophy");
        assert_eq!(resource.mime_type, "text/markdown");
        assert!(corpus.resource_by_uri("dojo://missing").is_err());
    }

    #[test]
    fn test_seeds_in_category() {
        let corpus = Corpus::builtin().unwrap();
        let names: Vec<_> = corpus
            .seeds_in_category("serenity_valley")
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["inter_acceptance", "radical_freedom"]);
    }

    #[test]
    fn test_duplicate_seed_rejected() {
        let result = Corpus::builder()
            .seed(seed("dup", "a", "a"))
            .seed(seed("dup", "b", "b"))
            .build();
        assert!(matches!(result, Err(AppError::Duplicate { ref name, .. }) if name == "dup"));
    }

    fn resource(name: &str, uri: &str) -> Resource {
        Resource {
            uri: uri.into(),
            name: name.into(),
            description: "b".into(),
            mime_type: "text/markdown".into(),
            content: "b".into(),
        }
    }

    #[test]
    fn test_same_name_across_variants_allowed() {
        let corpus = Corpus::builder()
            .seed(seed("shared", "a", "a"))
            .resource(resource("shared", "dojo://shared"))
            .principles(Principles::new("p"))
            .build()
            .unwrap();
        assert_eq!(corpus.len(), 3);
    }

    #[test]
    fn test_duplicate_resource_uri_rejected() {
        let result = Corpus::builder()
            .resource(resource("first", "dojo://same"))
            .resource(resource("second", "dojo://same"))
            .principles(Principles::new("p"))
            .build();
        assert!(matches!(
            result,
            Err(AppError::Duplicate { ref kind, ref name }) if kind == "resource uri" && name == "dojo://same"
        ));
    }

    #[test]
    fn test_missing_principles_rejected() {
        let result = Corpus::builder().seed(seed("only", "a", "a")).build();
        assert!(matches!(result, Err(AppError::MissingPrinciples)));
    }

    #[test]
    fn test_principles_search_fields() {
        let principles = Principles::new("body");
        assert_eq!(principles.search_name(), "principles");
        assert_eq!(principles.search_description(), "Core Dojo Principles");
        assert_eq!(principles.name(), "Core Dojo Principles");
    }
}
