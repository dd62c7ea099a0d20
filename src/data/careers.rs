//! Career evaluation pages ("is X a good career?").
//!
//! The flagship dataset: one record per evaluated role, with a scored
//! verdict, reader FAQs, and pointers to alternative roles. Alternative-role
//! slugs reference [`crate::data::roles`] by convention only; the
//! cross-reference audit in [`crate::validate`] reports drift.

use crate::query::{Keyed, filter_records, find_by_key, top_by};
use crate::types::{Industry, Verdict};
use serde::Serialize;
use std::sync::LazyLock;

/// One evaluated career.
#[derive(Debug, Clone, Serialize)]
pub struct CareerEvaluation {
    /// URL slug, matches the role slug where both datasets cover the role.
    pub slug: &'static str,
    /// Role title shown in the page H1.
    pub role_title: &'static str,
    pub industry: Industry,
    pub verdict: Verdict,
    /// Editorial score out of 10, drives "highest rated" listings.
    pub overall_score: f64,
    /// One-paragraph summary for the verdict box.
    pub summary: &'static str,
    /// Reader FAQs rendered as an accordion.
    pub common_questions: Vec<CommonQuestion>,
    /// Related roles linked at the bottom of the page.
    pub alternative_roles: Vec<AlternativeRole>,
}

/// A question/answer pair embedded in an evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct CommonQuestion {
    pub question: &'static str,
    pub answer: &'static str,
}

/// A pointer to another role, resolved against the roles dataset at render
/// time.
#[derive(Debug, Clone, Serialize)]
pub struct AlternativeRole {
    pub slug: &'static str,
    pub title: &'static str,
}

impl Keyed for CareerEvaluation {
    fn key(&self) -> &str {
        self.slug
    }
}

pub static CAREER_EVALUATIONS: LazyLock<Vec<CareerEvaluation>> = LazyLock::new(|| {
    vec![
        CareerEvaluation {
            slug: "bartender",
            role_title: "Bartender",
            industry: Industry::Hospitality,
            verdict: Verdict::Mixed,
            overall_score: 7.5,
            summary: "Strong cash earnings in busy markets and a low barrier to entry, \
                      offset by late nights and uneven scheduling.",
            common_questions: vec![
                CommonQuestion {
                    question: "Do bartenders need a license?",
                    answer: "Most states require an alcohol-service certification, which \
                             takes a few hours online; a handful of counties add a local permit.",
                },
                CommonQuestion {
                    question: "How much of bartender pay is tips?",
                    answer: "In most metro markets tips are 60-80% of take-home pay, so \
                             venue and shift quality matter more than the base wage.",
                },
            ],
            alternative_roles: vec![
                AlternativeRole { slug: "server", title: "Server" },
                AlternativeRole { slug: "line-cook", title: "Line Cook" },
            ],
        },
        CareerEvaluation {
            slug: "server",
            role_title: "Server",
            industry: Industry::Hospitality,
            verdict: Verdict::Mixed,
            overall_score: 7.0,
            summary: "Flexible scheduling and quick hiring, with earnings that swing \
                      heavily by venue tier.",
            common_questions: vec![CommonQuestion {
                question: "Is serving a good student job?",
                answer: "Yes; evening and weekend shifts fit class schedules, and top \
                         earners at full-service restaurants out-earn many entry office jobs.",
            }],
            alternative_roles: vec![AlternativeRole { slug: "bartender", title: "Bartender" }],
        },
        CareerEvaluation {
            slug: "electrician",
            role_title: "Electrician",
            industry: Industry::Trades,
            verdict: Verdict::Recommended,
            overall_score: 8.6,
            summary: "Licensed trade with durable demand, paid apprenticeships, and a \
                      clear path to self-employment.",
            common_questions: vec![CommonQuestion {
                question: "How long is an electrician apprenticeship?",
                answer: "Typically four years of paid on-the-job training plus classroom \
                         hours before the journeyman exam.",
            }],
            alternative_roles: vec![
                AlternativeRole { slug: "hvac-technician", title: "HVAC Technician" },
                AlternativeRole { slug: "plumber", title: "Plumber" },
            ],
        },
        CareerEvaluation {
            slug: "registered-nurse",
            role_title: "Registered Nurse",
            industry: Industry::Healthcare,
            verdict: Verdict::Recommended,
            overall_score: 8.2,
            summary: "High median pay and strong job security, balanced against shift \
                      work and a demanding credential path.",
            common_questions: vec![CommonQuestion {
                question: "ADN or BSN?",
                answer: "An ADN gets you licensed in two years; many hospital systems now \
                         prefer or require a BSN for new hires, so check your target market.",
            }],
            alternative_roles: vec![
                AlternativeRole { slug: "dental-assistant", title: "Dental Assistant" },
                AlternativeRole { slug: "pharmacy-technician", title: "Pharmacy Technician" },
            ],
        },
        CareerEvaluation {
            slug: "truck-driver",
            role_title: "Truck Driver",
            industry: Industry::Logistics,
            verdict: Verdict::Mixed,
            overall_score: 6.4,
            summary: "Solid pay without a degree, but long-haul schedules strain home \
                      life and autonomous freight clouds the long-term outlook.",
            common_questions: vec![CommonQuestion {
                question: "How fast can I get a CDL?",
                answer: "Full-time CDL school runs three to eight weeks; many carriers \
                         reimburse tuition after a year on the road.",
            }],
            alternative_roles: vec![AlternativeRole {
                slug: "warehouse-associate",
                title: "Warehouse Associate",
            }],
        },
        CareerEvaluation {
            slug: "retail-manager",
            role_title: "Retail Manager",
            industry: Industry::Retail,
            verdict: Verdict::NotRecommended,
            overall_score: 5.5,
            summary: "Salaried hours regularly exceed fifty per week for middling pay; \
                      the promotion ladder above store level is narrow.",
            common_questions: vec![CommonQuestion {
                question: "Does retail management experience transfer?",
                answer: "Yes; P&L ownership and scheduling experience map well onto \
                         operations roles in logistics and hospitality.",
            }],
            alternative_roles: vec![AlternativeRole {
                slug: "warehouse-associate",
                title: "Warehouse Associate",
            }],
        },
        CareerEvaluation {
            slug: "software-developer",
            role_title: "Software Developer",
            industry: Industry::Technology,
            verdict: Verdict::Recommended,
            overall_score: 8.9,
            summary: "Top-quartile pay and remote flexibility, with a hiring bar that has \
                      risen sharply for entry-level candidates.",
            common_questions: vec![CommonQuestion {
                question: "Do I need a CS degree?",
                answer: "No, but without one expect to substitute a substantial portfolio \
                         and referrals; bootcamp-only resumes clear fewer screens than in 2021.",
            }],
            alternative_roles: vec![AlternativeRole { slug: "data-analyst", title: "Data Analyst" }],
        },
    ]
});

/// All evaluations in editorial order.
pub fn all_career_evaluations() -> &'static [CareerEvaluation] {
    &CAREER_EVALUATIONS
}

/// Point lookup by slug. Absence means the role has no evaluation page.
pub fn get_career_evaluation_by_slug(slug: &str) -> Option<&'static CareerEvaluation> {
    find_by_key(&CAREER_EVALUATIONS, slug)
}

/// Evaluations within one industry, in editorial order.
pub fn get_careers_by_industry(industry: Industry) -> Vec<&'static CareerEvaluation> {
    filter_records(&CAREER_EVALUATIONS, |c| c.industry == industry)
}

/// The `limit` highest-scored evaluations, best first.
pub fn get_highest_rated_careers(limit: usize) -> Vec<&'static CareerEvaluation> {
    top_by(&CAREER_EVALUATIONS, |c| c.overall_score, limit)
}
