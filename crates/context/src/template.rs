//! Fixed narrative templates
//!
//! Templates are markdown embedded at compile time. `{name}` placeholders are
//! substituted in a single pass, so substituted text is never re-scanned and
//! caller input containing braces comes through untouched.

/// A compile-time markdown template
#[derive(Debug, Clone, Copy)]
pub struct Template {
    source: &'static str,
}

impl Template {
    pub const fn new(source: &'static str) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &'static str {
        self.source
    }

    /// Substitute `{key}` placeholders; unknown placeholders are left as-is
    pub fn render(&self, vars: &[(&str, &str)]) -> String {
        let mut out = String::with_capacity(
            self.source.len() + vars.iter().map(|(_, v)| v.len()).sum::<usize>(),
        );
        let mut rest = self.source;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];

            let substituted = after.find('}').and_then(|close| {
                let key = &after[..close];
                vars.iter()
                    .find(|(name, _)| *name == key)
                    .map(|(_, value)| (*value, close))
            });

            match substituted {
                Some((value, close)) => {
                    out.push_str(value);
                    rest = &after[close + 1..];
                }
                None => {
                    out.push('{');
                    rest = after;
                }
            }
        }

        out.push_str(rest);
        out
    }
}

pub(crate) const MIRROR: Template = Template::new(include_str!("../templates/mirror.md"));
pub(crate) const SCOUT: Template = Template::new(include_str!("../templates/scout.md"));
pub(crate) const GARDENER: Template = Template::new(include_str!("../templates/gardener.md"));
pub(crate) const IMPLEMENTATION: Template =
    Template::new(include_str!("../templates/implementation.md"));
pub(crate) const APPLY_SEED: Template = Template::new(include_str!("../templates/apply_seed.md"));
pub(crate) const LINEAGE: Template = Template::new(include_str!("../templates/lineage.md"));
pub(crate) const THINKING_ROOM: Template =
    Template::new(include_str!("../templates/thinking_room.md"));
pub(crate) const INTER_ACCEPTANCE: Template =
    Template::new(include_str!("../templates/inter_acceptance.md"));
pub(crate) const RADICAL_FREEDOM: Template =
    Template::new(include_str!("../templates/radical_freedom.md"));
pub(crate) const CHECK_PACE: Template = Template::new(include_str!("../templates/check_pace.md"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_all_occurrences() {
        let t = Template::new("{a} and {b}, again {a}");
        assert_eq!(t.render(&[("a", "x"), ("b", "y")]), "x and y, again x");
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let t = Template::new("Topic: {topic} by {agent}");
        let out = t.render(&[("topic", "{agent}"), ("agent", "bot")]);
        assert_eq!(out, "Topic: {agent} by bot");
    }

    #[test]
    fn test_unknown_and_unclosed_braces_kept() {
        let t = Template::new("{unknown} {open");
        assert_eq!(t.render(&[("x", "y")]), "{unknown} {open");
    }

    #[test]
    fn test_multibyte_text_around_placeholders() {
        let t = Template::new("é{v}ü");
        assert_eq!(t.render(&[("v", "—")]), "é—ü");
    }

    #[test]
    fn test_embedded_templates_use_expected_placeholders() {
        for template in [MIRROR, SCOUT, GARDENER, IMPLEMENTATION] {
            assert!(template.source().contains("{situation}"));
            assert!(template.source().contains("{perspective_count}"));
        }
        assert!(APPLY_SEED.source().contains("{seed_content}"));
        assert!(LINEAGE.source().contains("{related_wisdom}"));
        assert!(THINKING_ROOM.source().contains("{agent_name}"));
        assert!(CHECK_PACE.source().contains("{session_description}"));
        for template in [INTER_ACCEPTANCE, RADICAL_FREEDOM] {
            assert!(template.source().contains("{situation}"));
        }
    }
}
