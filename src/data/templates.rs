//! Resume and cover-letter templates.

use crate::query::{Keyed, filter_records, find_by_key};
use crate::types::{Industry, TemplateKind};
use serde::Serialize;
use std::sync::LazyLock;

/// A downloadable document template.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentTemplate {
    pub slug: &'static str,
    pub title: &'static str,
    pub kind: TemplateKind,
    /// Industry the wording is tuned for.
    pub industry: Industry,
    /// One-line pitch shown on listing pages.
    pub tagline: &'static str,
}

impl Keyed for DocumentTemplate {
    fn key(&self) -> &str {
        self.slug
    }
}

pub static TEMPLATES: LazyLock<Vec<DocumentTemplate>> = LazyLock::new(|| {
    vec![
        DocumentTemplate {
            slug: "bartender-resume",
            title: "Bartender Resume Template",
            kind: TemplateKind::Resume,
            industry: Industry::Hospitality,
            tagline: "Leads with volume handled per shift instead of job duties.",
        },
        DocumentTemplate {
            slug: "server-cover-letter",
            title: "Server Cover Letter Template",
            kind: TemplateKind::CoverLetter,
            industry: Industry::Hospitality,
            tagline: "Three short paragraphs a hiring manager reads between seatings.",
        },
        DocumentTemplate {
            slug: "new-grad-nurse-resume",
            title: "New Grad Nurse Resume Template",
            kind: TemplateKind::Resume,
            industry: Industry::Healthcare,
            tagline: "Puts clinical rotations where work history would go.",
        },
        DocumentTemplate {
            slug: "electrician-apprentice-resume",
            title: "Electrician Apprentice Resume Template",
            kind: TemplateKind::Resume,
            industry: Industry::Trades,
            tagline: "Built around logged hours and code familiarity.",
        },
        DocumentTemplate {
            slug: "career-change-cover-letter",
            title: "Career Change Cover Letter Template",
            kind: TemplateKind::CoverLetter,
            industry: Industry::Technology,
            tagline: "Frames a pivot as directed experience, not a restart.",
        },
    ]
});

/// All templates in listing order.
pub fn all_templates() -> &'static [DocumentTemplate] {
    &TEMPLATES
}

/// Point lookup by slug.
pub fn get_template_by_slug(slug: &str) -> Option<&'static DocumentTemplate> {
    find_by_key(&TEMPLATES, slug)
}

/// Templates of one kind, in listing order.
pub fn get_templates_by_kind(kind: TemplateKind) -> Vec<&'static DocumentTemplate> {
    filter_records(&TEMPLATES, |t| t.kind == kind)
}
