//! Cross-reference audit.
//!
//! Dataset records reference slugs in other datasets by convention only: a
//! career evaluation's alternative roles, a pay bracket's role and city, an
//! employer's city, a persona hub's featured roles. Lookups stay loose — a
//! dangling slug simply fails to resolve at render time — so this audit is
//! the one place drift becomes visible. Run it once at build start; it
//! reports, it never fails the build.

use crate::data::{careers, employers, locations, pay, personas, roles};
use crate::query::SlugIndex;
use thiserror::Error;
use tracing::warn;

/// One unresolved slug reference.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceError {
    #[error("career evaluation `{source_slug}` lists unknown alternative role `{role_slug}`")]
    UnknownAlternativeRole { source_slug: String, role_slug: String },

    #[error("pay bracket for `{role_slug}` in `{city_slug}` references unknown role")]
    UnknownPayRole { role_slug: String, city_slug: String },

    #[error("pay bracket for `{role_slug}` in `{city_slug}` references unknown city")]
    UnknownPayCity { role_slug: String, city_slug: String },

    #[error("employer `{employer_slug}` is filed under unknown city `{city_slug}`")]
    UnknownEmployerCity { employer_slug: String, city_slug: String },

    #[error("persona hub `{hub_slug}` features unknown role `{role_slug}`")]
    UnknownPersonaRole { hub_slug: String, role_slug: String },
}

/// Result of one audit pass.
#[derive(Debug, Default)]
pub struct ReferenceReport {
    /// Every dangling reference found, in dataset order.
    pub unresolved: Vec<ReferenceError>,
}

impl ReferenceReport {
    /// True when every cross-dataset slug resolved.
    pub fn is_clean(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Audit every cross-dataset slug reference in the shipped datasets.
///
/// Each dangling reference is also logged as a warning.
pub fn audit_cross_references() -> ReferenceReport {
    let report = audit_datasets(
        careers::all_career_evaluations(),
        pay::all_pay_brackets(),
        employers::all_employers(),
        personas::all_persona_hubs(),
        roles::all_roles(),
        locations::all_cities(),
    );

    for error in &report.unresolved {
        warn!(%error, "dangling cross-reference");
    }

    report
}

/// Audit explicit dataset slices. Split out so tests can feed fixtures.
fn audit_datasets(
    evaluations: &[careers::CareerEvaluation],
    brackets: &[pay::PayBracket],
    local_employers: &[employers::LocalEmployer],
    hubs: &[personas::PersonaHub],
    role_records: &[roles::Role],
    city_records: &[locations::City],
) -> ReferenceReport {
    let role_index = SlugIndex::build(role_records);
    let city_index = SlugIndex::build(city_records);
    let mut unresolved = Vec::new();

    for eval in evaluations {
        for alt in &eval.alternative_roles {
            if !role_index.contains(alt.slug) {
                unresolved.push(ReferenceError::UnknownAlternativeRole {
                    source_slug: eval.slug.to_string(),
                    role_slug: alt.slug.to_string(),
                });
            }
        }
    }

    for bracket in brackets {
        if !role_index.contains(bracket.role_slug) {
            unresolved.push(ReferenceError::UnknownPayRole {
                role_slug: bracket.role_slug.to_string(),
                city_slug: bracket.city_slug.to_string(),
            });
        }
        if !city_index.contains(bracket.city_slug) {
            unresolved.push(ReferenceError::UnknownPayCity {
                role_slug: bracket.role_slug.to_string(),
                city_slug: bracket.city_slug.to_string(),
            });
        }
    }

    for employer in local_employers {
        if !city_index.contains(employer.city_slug) {
            unresolved.push(ReferenceError::UnknownEmployerCity {
                employer_slug: employer.slug.to_string(),
                city_slug: employer.city_slug.to_string(),
            });
        }
    }

    for hub in hubs {
        for role_slug in &hub.featured_role_slugs {
            if !role_index.contains(role_slug) {
                unresolved.push(ReferenceError::UnknownPersonaRole {
                    hub_slug: hub.slug.to_string(),
                    role_slug: role_slug.to_string(),
                });
            }
        }
    }

    ReferenceReport { unresolved }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::personas::PersonaHub;

    #[test]
    fn test_shipped_datasets_are_clean() {
        let report = audit_cross_references();
        assert!(report.is_clean(), "dangling references: {:?}", report.unresolved);
    }

    #[test]
    fn test_dangling_persona_role_is_reported() {
        let hubs = vec![PersonaHub {
            slug: "jobs-for-time-travelers",
            title: "Jobs for Time Travelers",
            audience: "test fixture",
            featured_role_slugs: vec!["bartender", "chrononaut"],
        }];

        let report = audit_datasets(
            &[],
            &[],
            &[],
            &hubs,
            crate::data::roles::all_roles(),
            crate::data::locations::all_cities(),
        );

        assert_eq!(
            report.unresolved,
            [ReferenceError::UnknownPersonaRole {
                hub_slug: "jobs-for-time-travelers".to_string(),
                role_slug: "chrononaut".to_string(),
            }]
        );
    }

    #[test]
    fn test_dangling_pay_references_are_reported() {
        let brackets = vec![crate::data::pay::PayBracket {
            role_slug: "astronaut",
            city_slug: "moon-base",
            hourly_low: 1.0,
            hourly_median: 2.0,
            hourly_high: 3.0,
        }];

        let report = audit_datasets(
            &[],
            &brackets,
            &[],
            &[],
            crate::data::roles::all_roles(),
            crate::data::locations::all_cities(),
        );

        assert_eq!(report.unresolved.len(), 2);
        assert!(matches!(
            report.unresolved[0],
            ReferenceError::UnknownPayRole { .. }
        ));
        assert!(matches!(
            report.unresolved[1],
            ReferenceError::UnknownPayCity { .. }
        ));
    }

    #[test]
    fn test_error_display_names_the_slugs() {
        let error = ReferenceError::UnknownEmployerCity {
            employer_slug: "acme".to_string(),
            city_slug: "gotham".to_string(),
        };
        let text = error.to_string();
        assert!(text.contains("acme"));
        assert!(text.contains("gotham"));
    }
}
