//! Pay brackets by role and metro.
//!
//! The one compound-keyed dataset: records are addressed by
//! `(role_slug, city_slug)`. Not every combination has a bracket — the page
//! enumeration still generates every role × city URL and the renderer falls
//! back to national figures when the local bracket is missing.

use crate::data::{locations, roles};
use crate::query::{filter_records, pairs};
use serde::Serialize;
use std::sync::LazyLock;

/// Hourly pay figures for one role in one metro.
#[derive(Debug, Clone, Serialize)]
pub struct PayBracket {
    pub role_slug: &'static str,
    pub city_slug: &'static str,
    pub hourly_low: f64,
    pub hourly_median: f64,
    pub hourly_high: f64,
}

pub static PAY_BRACKETS: LazyLock<Vec<PayBracket>> = LazyLock::new(|| {
    vec![
        PayBracket { role_slug: "bartender", city_slug: "austin", hourly_low: 11.4, hourly_median: 16.8, hourly_high: 28.5 },
        PayBracket { role_slug: "bartender", city_slug: "dallas", hourly_low: 10.9, hourly_median: 15.9, hourly_high: 26.0 },
        PayBracket { role_slug: "bartender", city_slug: "miami", hourly_low: 12.2, hourly_median: 18.1, hourly_high: 31.7 },
        PayBracket { role_slug: "server", city_slug: "austin", hourly_low: 10.2, hourly_median: 14.6, hourly_high: 24.3 },
        PayBracket { role_slug: "server", city_slug: "denver", hourly_low: 12.8, hourly_median: 16.4, hourly_high: 25.9 },
        PayBracket { role_slug: "electrician", city_slug: "houston", hourly_low: 22.5, hourly_median: 31.2, hourly_high: 44.8 },
        PayBracket { role_slug: "electrician", city_slug: "phoenix", hourly_low: 21.0, hourly_median: 29.7, hourly_high: 42.1 },
        PayBracket { role_slug: "registered-nurse", city_slug: "atlanta", hourly_low: 31.4, hourly_median: 39.8, hourly_high: 52.6 },
        PayBracket { role_slug: "registered-nurse", city_slug: "austin", hourly_low: 32.9, hourly_median: 41.2, hourly_high: 55.0 },
        PayBracket { role_slug: "software-developer", city_slug: "austin", hourly_low: 38.5, hourly_median: 57.7, hourly_high: 84.1 },
        PayBracket { role_slug: "truck-driver", city_slug: "nashville", hourly_low: 19.2, hourly_median: 25.5, hourly_high: 33.8 },
        PayBracket { role_slug: "warehouse-associate", city_slug: "dallas", hourly_low: 14.1, hourly_median: 17.3, hourly_high: 21.9 },
    ]
});

/// All brackets, grouped by role in authoring order.
pub fn all_pay_brackets() -> &'static [PayBracket] {
    &PAY_BRACKETS
}

/// Exact compound-key lookup. `None` means no local figures exist.
pub fn get_pay_bracket(role_slug: &str, city_slug: &str) -> Option<&'static PayBracket> {
    PAY_BRACKETS
        .iter()
        .find(|b| b.role_slug == role_slug && b.city_slug == city_slug)
}

/// Every bracket authored for one role, in authoring order.
pub fn get_pay_brackets_for_role(role_slug: &str) -> Vec<&'static PayBracket> {
    filter_records(&PAY_BRACKETS, |b| b.role_slug == role_slug)
}

/// Every role × city pair, in deterministic outer-role order.
///
/// This enumerates build targets for local pay pages, independent of whether
/// a bracket exists for the pair.
pub fn role_city_combinations() -> impl Iterator<Item = (&'static str, &'static str)> {
    pairs(roles::all_roles(), locations::all_cities()).map(|(role, city)| (role.slug, city.slug))
}
