//! Local employer profiles.

use crate::query::{Keyed, filter_records, find_by_key, top_by};
use crate::types::Industry;
use serde::Serialize;
use std::sync::LazyLock;

/// An employer profiled on city hiring pages.
#[derive(Debug, Clone, Serialize)]
pub struct LocalEmployer {
    pub slug: &'static str,
    pub name: &'static str,
    /// City the profile is filed under, references the cities dataset.
    pub city_slug: &'static str,
    pub industry: Industry,
    /// Open roles at last editorial refresh, drives "largest employers".
    pub open_roles: u32,
}

impl Keyed for LocalEmployer {
    fn key(&self) -> &str {
        self.slug
    }
}

pub static EMPLOYERS: LazyLock<Vec<LocalEmployer>> = LazyLock::new(|| {
    vec![
        LocalEmployer { slug: "rainey-street-hospitality", name: "Rainey Street Hospitality Group", city_slug: "austin", industry: Industry::Hospitality, open_roles: 42 },
        LocalEmployer { slug: "ascension-seton", name: "Ascension Seton", city_slug: "austin", industry: Industry::Healthcare, open_roles: 310 },
        LocalEmployer { slug: "lonestar-electric", name: "Lonestar Electric Supply", city_slug: "houston", industry: Industry::Trades, open_roles: 87 },
        LocalEmployer { slug: "baylor-scott-white", name: "Baylor Scott & White Health", city_slug: "dallas", industry: Industry::Healthcare, open_roles: 268 },
        LocalEmployer { slug: "deep-ellum-restaurant-group", name: "Deep Ellum Restaurant Group", city_slug: "dallas", industry: Industry::Hospitality, open_roles: 35 },
        LocalEmployer { slug: "banner-health", name: "Banner Health", city_slug: "phoenix", industry: Industry::Healthcare, open_roles: 402 },
        LocalEmployer { slug: "wynwood-kitchens", name: "Wynwood Kitchens", city_slug: "miami", industry: Industry::Hospitality, open_roles: 58 },
        LocalEmployer { slug: "western-distribution", name: "Western Distribution Co", city_slug: "denver", industry: Industry::Logistics, open_roles: 121 },
    ]
});

/// All employer profiles in authoring order.
pub fn all_employers() -> &'static [LocalEmployer] {
    &EMPLOYERS
}

/// Point lookup by slug.
pub fn get_employer_by_slug(slug: &str) -> Option<&'static LocalEmployer> {
    find_by_key(&EMPLOYERS, slug)
}

/// Employers filed under one city, in authoring order.
pub fn get_employers_in_city(city_slug: &str) -> Vec<&'static LocalEmployer> {
    filter_records(&EMPLOYERS, |e| e.city_slug == city_slug)
}

/// The `limit` employers with the most open roles, largest first.
pub fn get_largest_employers(limit: usize) -> Vec<&'static LocalEmployer> {
    top_by(&EMPLOYERS, |e| f64::from(e.open_roles), limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_round_trip() {
        for employer in all_employers() {
            assert_eq!(get_employer_by_slug(employer.slug).unwrap().name, employer.name);
        }
        assert!(get_employer_by_slug("acme").is_none());
    }

    #[test]
    fn test_employers_in_city() {
        let austin = get_employers_in_city("austin");
        let slugs: Vec<&str> = austin.iter().map(|e| e.slug).collect();
        assert_eq!(slugs, ["rainey-street-hospitality", "ascension-seton"]);
        assert!(get_employers_in_city("gotham").is_empty());
    }

    #[test]
    fn test_largest_employers() {
        let top = get_largest_employers(3);
        let slugs: Vec<&str> = top.iter().map(|e| e.slug).collect();
        assert_eq!(slugs, ["banner-health", "ascension-seton", "baylor-scott-white"]);
    }
}
