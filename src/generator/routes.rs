//! Page-route enumeration across all datasets.
//!
//! `all_page_routes()` is the build planner's input: one `PageRoute` per
//! page the site generates. Routes are concatenated dataset by dataset in a
//! fixed order and never deduplicated across datasets — two datasets may
//! legitimately produce the same slug under different section prefixes, and
//! disambiguation belongs to the external router.

use crate::data::{careers, employers, guides, interviews, pay, personas, taxes, templates};
use serde::Serialize;

/// One generated page, identified by URL section and slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageRoute {
    /// URL section prefix (e.g., "careers").
    pub section: &'static str,
    /// Slug within the section.
    pub slug: String,
}

impl PageRoute {
    fn new(section: &'static str, slug: impl Into<String>) -> Self {
        Self { section, slug: slug.into() }
    }

    /// The route's URL path, with leading and trailing slashes.
    pub fn url_path(&self) -> String {
        format!("/{}/{}/", self.section, self.slug)
    }
}

/// Every page identifier the site generates, in dataset order.
///
/// Role × city pay pages are expanded through the combination enumerator,
/// so the count grows with the product of those two dimensions.
pub fn all_page_routes() -> Vec<PageRoute> {
    let mut routes = Vec::new();

    routes.extend(
        careers::all_career_evaluations()
            .iter()
            .map(|c| PageRoute::new("careers", c.slug)),
    );
    routes.extend(
        guides::all_guides()
            .iter()
            .map(|g| PageRoute::new("how-to-become", g.slug)),
    );
    routes.extend(
        interviews::all_interview_guides()
            .iter()
            .map(|g| PageRoute::new("interview-questions", g.slug)),
    );
    routes.extend(
        pay::role_city_combinations()
            .map(|(role, city)| PageRoute::new("pay", format!("{role}-in-{city}"))),
    );
    routes.extend(
        employers::all_employers()
            .iter()
            .map(|e| PageRoute::new("employers", e.slug)),
    );
    routes.extend(
        personas::all_persona_hubs()
            .iter()
            .map(|h| PageRoute::new("best", h.slug)),
    );
    routes.extend(
        templates::all_templates()
            .iter()
            .map(|t| PageRoute::new("templates", t.slug)),
    );
    routes.extend(
        taxes::all_state_tax_guides()
            .iter()
            .map(|t| PageRoute::new("taxes", t.slug)),
    );

    routes
}

/// Serialize routes to pretty JSON for build tooling.
pub fn routes_to_json(routes: &[PageRoute]) -> String {
    serde_json::to_string_pretty(routes).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{locations, roles};

    #[test]
    fn test_route_count_covers_every_dataset() {
        let routes = all_page_routes();
        let expected = careers::all_career_evaluations().len()
            + guides::all_guides().len()
            + interviews::all_interview_guides().len()
            + roles::all_roles().len() * locations::all_cities().len()
            + employers::all_employers().len()
            + personas::all_persona_hubs().len()
            + templates::all_templates().len()
            + taxes::all_state_tax_guides().len();
        assert_eq!(routes.len(), expected);
    }

    #[test]
    fn test_colliding_slugs_across_sections_are_kept() {
        // "bartender" exists as a careers, how-to-become and
        // interview-questions page; all three routes must survive.
        let routes = all_page_routes();
        let bartender: Vec<&PageRoute> =
            routes.iter().filter(|r| r.slug == "bartender").collect();
        assert!(bartender.len() >= 3);
        let sections: Vec<&str> = bartender.iter().map(|r| r.section).collect();
        assert!(sections.contains(&"careers"));
        assert!(sections.contains(&"how-to-become"));
        assert!(sections.contains(&"interview-questions"));
    }

    #[test]
    fn test_enumeration_is_deterministic() {
        assert_eq!(all_page_routes(), all_page_routes());
    }

    #[test]
    fn test_pay_routes_use_combined_slugs() {
        let routes = all_page_routes();
        assert!(
            routes
                .iter()
                .any(|r| r.section == "pay" && r.slug == "bartender-in-austin")
        );
    }

    #[test]
    fn test_url_path_shape() {
        let route = PageRoute::new("careers", "bartender");
        assert_eq!(route.url_path(), "/careers/bartender/");
    }

    #[test]
    fn test_routes_to_json() {
        let routes = vec![PageRoute::new("careers", "bartender")];
        let json = routes_to_json(&routes);
        assert!(json.contains("\"section\": \"careers\""));
        assert!(json.contains("\"slug\": \"bartender\""));
    }
}
