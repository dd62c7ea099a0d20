//! How-to-become guides.
//!
//! Step-by-step entry paths for covered roles. Steps are ordered child
//! records with no identity of their own.

use crate::query::{Keyed, filter_records, find_by_key};
use crate::types::Difficulty;
use serde::Serialize;
use std::sync::LazyLock;

/// A full entry-path guide for one role.
#[derive(Debug, Clone, Serialize)]
pub struct HowToBecomeGuide {
    pub slug: &'static str,
    pub role_title: &'static str,
    pub difficulty: Difficulty,
    /// Rough calendar time from zero to employed, shown in the guide header.
    pub typical_timeline: &'static str,
    pub steps: Vec<GuideStep>,
}

/// One ordered step within a guide.
#[derive(Debug, Clone, Serialize)]
pub struct GuideStep {
    pub title: &'static str,
    pub description: &'static str,
}

impl Keyed for HowToBecomeGuide {
    fn key(&self) -> &str {
        self.slug
    }
}

pub static GUIDES: LazyLock<Vec<HowToBecomeGuide>> = LazyLock::new(|| {
    vec![
        HowToBecomeGuide {
            slug: "bartender",
            role_title: "Bartender",
            difficulty: Difficulty::Easy,
            typical_timeline: "2-6 weeks",
            steps: vec![
                GuideStep {
                    title: "Get certified to serve alcohol",
                    description: "Complete your state's alcohol-service course online; most \
                                  take under four hours.",
                },
                GuideStep {
                    title: "Start as a barback",
                    description: "Barbacking at a busy venue teaches the well layout and \
                                  earns a tip-out while you learn.",
                },
                GuideStep {
                    title: "Build a specs repertoire",
                    description: "Memorize the fifty classic cocktails every interview \
                                  drills before asking anything else.",
                },
            ],
        },
        HowToBecomeGuide {
            slug: "electrician",
            role_title: "Electrician",
            difficulty: Difficulty::Hard,
            typical_timeline: "4-5 years",
            steps: vec![
                GuideStep {
                    title: "Apply to an apprenticeship",
                    description: "IBEW locals and non-union ABC chapters both run paid \
                                  four-year programs; apply to several, waitlists are common.",
                },
                GuideStep {
                    title: "Log your hours",
                    description: "Licensing boards require documented on-the-job hours; keep \
                                  your own records rather than trusting the contractor's.",
                },
                GuideStep {
                    title: "Pass the journeyman exam",
                    description: "The exam is open-book on the NEC; speed navigating the code \
                                  matters more than memorization.",
                },
            ],
        },
        HowToBecomeGuide {
            slug: "registered-nurse",
            role_title: "Registered Nurse",
            difficulty: Difficulty::Hard,
            typical_timeline: "2-4 years",
            steps: vec![
                GuideStep {
                    title: "Finish prerequisites",
                    description: "Anatomy, physiology and microbiology gate every program; \
                                  community-college credits transfer fine.",
                },
                GuideStep {
                    title: "Complete an accredited program",
                    description: "ADN or BSN; clinical placements matter more than the \
                                  school's brand.",
                },
                GuideStep {
                    title: "Pass the NCLEX-RN",
                    description: "Most graduates sit it within two months of finishing; \
                                  first-time pass rates hover near ninety percent.",
                },
            ],
        },
        HowToBecomeGuide {
            slug: "truck-driver",
            role_title: "Truck Driver",
            difficulty: Difficulty::Moderate,
            typical_timeline: "1-2 months",
            steps: vec![
                GuideStep {
                    title: "Get your CDL permit",
                    description: "Pass the written knowledge test at the DMV to start \
                                  behind-the-wheel training.",
                },
                GuideStep {
                    title: "Attend CDL school",
                    description: "Three to eight weeks full time; carrier-sponsored schools \
                                  trade free tuition for a service commitment.",
                },
            ],
        },
        HowToBecomeGuide {
            slug: "dental-assistant",
            role_title: "Dental Assistant",
            difficulty: Difficulty::Moderate,
            typical_timeline: "9-12 months",
            steps: vec![
                GuideStep {
                    title: "Enroll in a certificate program",
                    description: "Nine-month certificate programs at community colleges are \
                                  the standard entry route.",
                },
                GuideStep {
                    title: "Earn radiology certification",
                    description: "Most states require a separate x-ray certification before \
                                  you can work chairside unsupervised.",
                },
            ],
        },
    ]
});

/// All guides in editorial order.
pub fn all_guides() -> &'static [HowToBecomeGuide] {
    &GUIDES
}

/// Point lookup by slug.
pub fn get_guide_by_slug(slug: &str) -> Option<&'static HowToBecomeGuide> {
    find_by_key(&GUIDES, slug)
}

/// Guides at a given entry difficulty, in editorial order.
pub fn get_guides_by_difficulty(difficulty: Difficulty) -> Vec<&'static HowToBecomeGuide> {
    filter_records(&GUIDES, |g| g.difficulty == difficulty)
}
