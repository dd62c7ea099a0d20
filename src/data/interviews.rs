//! Interview-question pages.

use crate::query::{Keyed, filter_records, find_by_key};
use crate::types::Industry;
use serde::Serialize;
use std::sync::LazyLock;

/// Interview prep content for one role.
#[derive(Debug, Clone, Serialize)]
pub struct InterviewGuide {
    pub slug: &'static str,
    pub role_title: &'static str,
    pub industry: Industry,
    pub questions: Vec<InterviewQuestion>,
}

/// One question with answering guidance.
#[derive(Debug, Clone, Serialize)]
pub struct InterviewQuestion {
    pub question: &'static str,
    pub answer_guidance: &'static str,
}

impl Keyed for InterviewGuide {
    fn key(&self) -> &str {
        self.slug
    }
}

pub static INTERVIEW_GUIDES: LazyLock<Vec<InterviewGuide>> = LazyLock::new(|| {
    vec![
        InterviewGuide {
            slug: "bartender",
            role_title: "Bartender",
            industry: Industry::Hospitality,
            questions: vec![
                InterviewQuestion {
                    question: "Make me a daiquiri.",
                    answer_guidance: "A practical pour test. Call the spec (2oz rum, 1oz lime, \
                                      0.75oz simple), shake hard, double strain. Speed and \
                                      cleanliness beat flair.",
                },
                InterviewQuestion {
                    question: "A guest seems overserved. What do you do?",
                    answer_guidance: "Show you know the legal stakes: slow service, offer water \
                                      and food, loop in a manager, never hand the decision to \
                                      the guest.",
                },
            ],
        },
        InterviewGuide {
            slug: "registered-nurse",
            role_title: "Registered Nurse",
            industry: Industry::Healthcare,
            questions: vec![
                InterviewQuestion {
                    question: "Tell me about a time you caught a medication error.",
                    answer_guidance: "Use a real near-miss. Interviewers want the verification \
                                      habit (five rights) and the escalation, not heroics.",
                },
                InterviewQuestion {
                    question: "How do you prioritize four patients at shift start?",
                    answer_guidance: "Walk an ABC-first triage and name what you would delegate \
                                      to techs; delegation judgment is the real question.",
                },
            ],
        },
        InterviewGuide {
            slug: "software-developer",
            role_title: "Software Developer",
            industry: Industry::Technology,
            questions: vec![InterviewQuestion {
                question: "Walk me through a production incident you handled.",
                answer_guidance: "Pick one with a clean timeline: detection, mitigation, root \
                                  cause, and the follow-up that prevented recurrence.",
            }],
        },
        InterviewGuide {
            slug: "retail-manager",
            role_title: "Retail Manager",
            industry: Industry::Retail,
            questions: vec![InterviewQuestion {
                question: "A shift is understaffed by two people. Walk me through your next hour.",
                answer_guidance: "Show triage: cover the registers first, cut restocking, call \
                                  the bench list, and communicate wait times rather than hiding them.",
            }],
        },
    ]
});

/// All interview guides in editorial order.
pub fn all_interview_guides() -> &'static [InterviewGuide] {
    &INTERVIEW_GUIDES
}

/// Point lookup by slug.
pub fn get_interview_guide_by_slug(slug: &str) -> Option<&'static InterviewGuide> {
    find_by_key(&INTERVIEW_GUIDES, slug)
}

/// Interview guides within one industry, in editorial order.
pub fn get_interview_guides_by_industry(industry: Industry) -> Vec<&'static InterviewGuide> {
    filter_records(&INTERVIEW_GUIDES, |g| g.industry == industry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_round_trip() {
        for guide in all_interview_guides() {
            assert_eq!(
                get_interview_guide_by_slug(guide.slug).unwrap().role_title,
                guide.role_title
            );
        }
        assert!(get_interview_guide_by_slug("nonexistent-role").is_none());
    }

    #[test]
    fn test_filter_by_industry() {
        let healthcare = get_interview_guides_by_industry(Industry::Healthcare);
        assert_eq!(healthcare.len(), 1);
        assert_eq!(healthcare[0].slug, "registered-nurse");
        assert!(get_interview_guides_by_industry(Industry::Trades).is_empty());
    }
}
