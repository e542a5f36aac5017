//! Mode Dispatcher
//!
//! One-shot, stateless rendering of one of four reflection templates. Only
//! the subject and the number of perspectives reach the output; perspective
//! text is never echoed.

use crate::template::{self, Template};
use dojo_common::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Guidance returned for an unrecognized mode tag
pub const UNKNOWN_MODE_GUIDANCE: &str =
    "Unknown mode. Please use: mirror, scout, gardener, or implementation.";

/// The four reflection modes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Surface patterns, assumptions and a reframe
    Mirror,
    /// Map possible routes and the smallest test
    Scout,
    /// Sort strong ideas from ones that need growth
    Gardener,
    /// Concrete next steps
    Implementation,
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::Mirror, Mode::Scout, Mode::Gardener, Mode::Implementation];

    /// Wire tag for this mode
    pub fn tag(&self) -> &'static str {
        match self {
            Mode::Mirror => "mirror",
            Mode::Scout => "scout",
            Mode::Gardener => "gardener",
            Mode::Implementation => "implementation",
        }
    }

    fn template(&self) -> Template {
        match self {
            Mode::Mirror => template::MIRROR,
            Mode::Scout => template::SCOUT,
            Mode::Gardener => template::GARDENER,
            Mode::Implementation => template::IMPLEMENTATION,
        }
    }

    /// Render this mode's template for a subject
    pub fn render(&self, subject: &str, perspective_count: usize) -> String {
        let count = perspective_count.to_string();
        self.template()
            .render(&[("situation", subject), ("perspective_count", count.as_str())])
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Mode {
    type Err = AppError;

    /// Exact, case-sensitive tag match
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|mode| mode.tag() == tag)
            .ok_or_else(|| AppError::InvalidMode {
                mode: tag.to_string(),
            })
    }
}

/// Dispatch outcome for a caller-supplied tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reflection {
    /// One of the four recognized modes
    Guided(Mode),
    /// Any other tag; renders the fixed guidance string
    Unrecognized(String),
}

impl Reflection {
    pub fn from_tag(tag: &str) -> Self {
        match tag.parse::<Mode>() {
            Ok(mode) => Reflection::Guided(mode),
            Err(err) => {
                tracing::debug!(error = %err, "Falling back to mode guidance");
                Reflection::Unrecognized(tag.to_string())
            }
        }
    }

    pub fn render(&self, subject: &str, perspective_count: usize) -> String {
        match self {
            Reflection::Guided(mode) => mode.render(subject, perspective_count),
            Reflection::Unrecognized(_) => UNKNOWN_MODE_GUIDANCE.to_string(),
        }
    }
}

/// Reflect on a situation in the requested mode
pub fn reflect<S: AsRef<str>>(situation: &str, perspectives: &[S], mode: &str) -> String {
    Reflection::from_tag(mode).render(situation, perspectives.len())
}
