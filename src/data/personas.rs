//! Persona hub pages ("jobs for night owls", "jobs for new grads").
//!
//! Each hub curates a list of role slugs; the references resolve against the
//! roles dataset at render time.

use crate::query::{Keyed, find_by_key};
use serde::Serialize;
use std::sync::LazyLock;

/// An audience-targeted hub page.
#[derive(Debug, Clone, Serialize)]
pub struct PersonaHub {
    pub slug: &'static str,
    pub title: &'static str,
    /// Who the hub is written for, shown in the intro.
    pub audience: &'static str,
    /// Curated role slugs, in display order.
    pub featured_role_slugs: Vec<&'static str>,
}

impl Keyed for PersonaHub {
    fn key(&self) -> &str {
        self.slug
    }
}

pub static PERSONA_HUBS: LazyLock<Vec<PersonaHub>> = LazyLock::new(|| {
    vec![
        PersonaHub {
            slug: "jobs-for-night-owls",
            title: "Jobs for Night Owls",
            audience: "people who do their best work after 6pm",
            featured_role_slugs: vec!["bartender", "server", "warehouse-associate"],
        },
        PersonaHub {
            slug: "jobs-without-a-degree",
            title: "High-Paying Jobs Without a Degree",
            audience: "career changers who want to skip four more years of school",
            featured_role_slugs: vec!["electrician", "plumber", "truck-driver", "welder"],
        },
        PersonaHub {
            slug: "jobs-for-people-persons",
            title: "Jobs for People Persons",
            audience: "readers energized by constant customer contact",
            featured_role_slugs: vec!["server", "bartender", "retail-manager", "dental-assistant"],
        },
    ]
});

/// All hubs in editorial order.
pub fn all_persona_hubs() -> &'static [PersonaHub] {
    &PERSONA_HUBS
}

/// Point lookup by slug.
pub fn get_persona_hub_by_slug(slug: &str) -> Option<&'static PersonaHub> {
    find_by_key(&PERSONA_HUBS, slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_round_trip() {
        for hub in all_persona_hubs() {
            assert_eq!(get_persona_hub_by_slug(hub.slug).unwrap().title, hub.title);
        }
        assert!(get_persona_hub_by_slug("jobs-for-cats").is_none());
    }

    #[test]
    fn test_hubs_feature_at_least_one_role() {
        for hub in all_persona_hubs() {
            assert!(!hub.featured_role_slugs.is_empty());
        }
    }
}
