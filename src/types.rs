//! Closed categorical types shared across datasets.
//!
//! The source content uses small fixed sets of string literals for
//! classification (`industry`, `verdict`, `difficulty`, template `kind`).
//! They are closed enums here so a typo in a record fails to compile instead
//! of silently filtering to nothing. Serialized forms match the slug-style
//! strings the rendering layer expects.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Industry classification for roles, evaluations and templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Industry {
    Hospitality,
    Healthcare,
    Trades,
    Technology,
    Retail,
    Logistics,
}

/// Editorial verdict on a career evaluation page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Verdict {
    /// Worth pursuing for most readers.
    Recommended,
    /// Depends heavily on location or temperament.
    Mixed,
    /// Better alternatives exist for nearly everyone.
    NotRecommended,
}

/// How hard it is to enter a career, as shown on how-to-become guides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Moderate,
    Hard,
}

/// Document template category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateKind {
    Resume,
    CoverLetter,
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Industry::Hospitality => "hospitality",
            Industry::Healthcare => "healthcare",
            Industry::Trades => "trades",
            Industry::Technology => "technology",
            Industry::Retail => "retail",
            Industry::Logistics => "logistics",
        };
        f.write_str(s)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Verdict::Recommended => "recommended",
            Verdict::Mixed => "mixed",
            Verdict::NotRecommended => "not-recommended",
        };
        f.write_str(s)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Easy => "easy",
            Difficulty::Moderate => "moderate",
            Difficulty::Hard => "hard",
        };
        f.write_str(s)
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TemplateKind::Resume => "resume",
            TemplateKind::CoverLetter => "cover-letter",
        };
        f.write_str(s)
    }
}
