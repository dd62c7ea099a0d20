//! State tax content for take-home-pay pages.
//!
//! Keyed by two-letter state code; city records link here through
//! `state_code`. Bracket figures are editorial content, not tax advice.

use crate::query::{Keyed, filter_records, find_by_key};
use serde::Serialize;
use std::sync::LazyLock;

/// Income-tax content for one state.
#[derive(Debug, Clone, Serialize)]
pub struct StateTaxGuide {
    /// Two-letter state code used as the URL slug (e.g., "tx").
    pub slug: &'static str,
    pub state_name: &'static str,
    pub has_income_tax: bool,
    /// Marginal brackets, lowest threshold first. Empty for no-tax states.
    pub brackets: Vec<TaxBracket>,
}

/// One marginal bracket.
#[derive(Debug, Clone, Serialize)]
pub struct TaxBracket {
    /// Annual income where this rate starts applying, in dollars.
    pub threshold: u32,
    /// Marginal rate as a fraction (0.045 = 4.5%).
    pub rate: f64,
}

impl Keyed for StateTaxGuide {
    fn key(&self) -> &str {
        self.slug
    }
}

pub static STATE_TAX_GUIDES: LazyLock<Vec<StateTaxGuide>> = LazyLock::new(|| {
    vec![
        StateTaxGuide { slug: "tx", state_name: "Texas", has_income_tax: false, brackets: vec![] },
        StateTaxGuide { slug: "fl", state_name: "Florida", has_income_tax: false, brackets: vec![] },
        StateTaxGuide { slug: "tn", state_name: "Tennessee", has_income_tax: false, brackets: vec![] },
        StateTaxGuide {
            slug: "az",
            state_name: "Arizona",
            has_income_tax: true,
            brackets: vec![TaxBracket { threshold: 0, rate: 0.025 }],
        },
        StateTaxGuide {
            slug: "co",
            state_name: "Colorado",
            has_income_tax: true,
            brackets: vec![TaxBracket { threshold: 0, rate: 0.044 }],
        },
        StateTaxGuide {
            slug: "ga",
            state_name: "Georgia",
            has_income_tax: true,
            brackets: vec![TaxBracket { threshold: 0, rate: 0.0539 }],
        },
    ]
});

/// All state guides in coverage order.
pub fn all_state_tax_guides() -> &'static [StateTaxGuide] {
    &STATE_TAX_GUIDES
}

/// Point lookup by state code.
pub fn get_state_tax_guide_by_slug(slug: &str) -> Option<&'static StateTaxGuide> {
    find_by_key(&STATE_TAX_GUIDES, slug)
}

/// Covered states with no income tax, in coverage order.
pub fn states_without_income_tax() -> Vec<&'static StateTaxGuide> {
    filter_records(&STATE_TAX_GUIDES, |s| !s.has_income_tax)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_round_trip() {
        for guide in all_state_tax_guides() {
            assert_eq!(
                get_state_tax_guide_by_slug(guide.slug).unwrap().state_name,
                guide.state_name
            );
        }
        assert!(get_state_tax_guide_by_slug("zz").is_none());
    }

    #[test]
    fn test_no_tax_states_have_no_brackets() {
        let no_tax = states_without_income_tax();
        let slugs: Vec<&str> = no_tax.iter().map(|g| g.slug).collect();
        assert_eq!(slugs, ["tx", "fl", "tn"]);
        for guide in no_tax {
            assert!(guide.brackets.is_empty());
        }
    }

    #[test]
    fn test_brackets_ordered_by_threshold() {
        for guide in all_state_tax_guides() {
            for pair in guide.brackets.windows(2) {
                assert!(pair[0].threshold < pair[1].threshold);
            }
        }
    }
}
