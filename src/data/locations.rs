//! Covered metro areas.
//!
//! The second dimension of the role × city page enumeration.

use crate::query::{Keyed, find_by_key};
use serde::Serialize;
use std::sync::LazyLock;

/// A metro area the site generates local pages for.
#[derive(Debug, Clone, Serialize)]
pub struct City {
    /// URL slug, unique within this dataset (e.g., "austin").
    pub slug: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Two-letter state code, links into the state tax dataset.
    pub state_code: &'static str,
}

impl Keyed for City {
    fn key(&self) -> &str {
        self.slug
    }
}

pub static CITIES: LazyLock<Vec<City>> = LazyLock::new(|| {
    vec![
        City { slug: "austin", name: "Austin", state_code: "tx" },
        City { slug: "dallas", name: "Dallas", state_code: "tx" },
        City { slug: "houston", name: "Houston", state_code: "tx" },
        City { slug: "phoenix", name: "Phoenix", state_code: "az" },
        City { slug: "miami", name: "Miami", state_code: "fl" },
        City { slug: "denver", name: "Denver", state_code: "co" },
        City { slug: "atlanta", name: "Atlanta", state_code: "ga" },
        City { slug: "nashville", name: "Nashville", state_code: "tn" },
    ]
});

/// All cities in coverage order.
pub fn all_cities() -> &'static [City] {
    &CITIES
}

/// Point lookup by slug.
pub fn get_city_by_slug(slug: &str) -> Option<&'static City> {
    find_by_key(&CITIES, slug)
}

/// Cities within one state, in coverage order.
pub fn get_cities_in_state(state_code: &str) -> Vec<&'static City> {
    crate::query::filter_records(&CITIES, |c| c.state_code == state_code)
}
