//! Sitemap generation.
//!
//! Produces the sitemap.xml body for the generated site. This layer only
//! builds the string; writing it to disk is the build system's job.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/careers/bartender/</loc>
//!   </url>
//! </urlset>
//! ```

use super::routes::PageRoute;

/// XML namespace for sitemap
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Generate sitemap XML for the given routes.
///
/// `base_url` is the site origin without a trailing slash
/// (e.g., `https://example.com`). Route order is preserved so two builds
/// over the same data diff cleanly.
pub fn sitemap_xml(base_url: &str, routes: &[PageRoute]) -> String {
    let base = base_url.trim_end_matches('/');
    let mut xml = String::with_capacity(4096);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    xml.push_str(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
    xml.push('\n');

    for route in routes {
        let loc = format!("{base}{}", route.url_path());
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&loc)));
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(section: &'static str, slug: &str) -> PageRoute {
        PageRoute { section, slug: slug.to_string() }
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("hello"), "hello");
        assert_eq!(escape_xml("<test>"), "&lt;test&gt;");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(escape_xml("it's"), "it&apos;s");
    }

    #[test]
    fn test_sitemap_empty() {
        let xml = sitemap_xml("https://example.com", &[]);

        assert!(xml.contains(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#)));
        assert!(xml.contains("</urlset>"));
        assert!(!xml.contains("<url>"));
    }

    #[test]
    fn test_sitemap_single_route() {
        let routes = vec![route("careers", "bartender")];
        let xml = sitemap_xml("https://example.com", &routes);

        assert!(xml.contains("<url>"));
        assert!(xml.contains("<loc>https://example.com/careers/bartender/</loc>"));
        assert!(xml.contains("</url>"));
    }

    #[test]
    fn test_sitemap_multiple_routes_in_order() {
        let routes = vec![
            route("careers", "bartender"),
            route("pay", "bartender-in-austin"),
            route("taxes", "tx"),
        ];
        let xml = sitemap_xml("https://example.com", &routes);

        let first = xml.find("/careers/bartender/").unwrap();
        let second = xml.find("/pay/bartender-in-austin/").unwrap();
        let third = xml.find("/taxes/tx/").unwrap();
        assert!(first < second && second < third);
        assert_eq!(xml.matches("<url>").count(), 3);
        assert_eq!(xml.matches("</url>").count(), 3);
    }

    #[test]
    fn test_sitemap_trailing_slash_on_base_url() {
        let routes = vec![route("careers", "bartender")];
        let xml = sitemap_xml("https://example.com/", &routes);
        assert!(xml.contains("<loc>https://example.com/careers/bartender/</loc>"));
    }

    #[test]
    fn test_sitemap_xml_structure() {
        let routes = vec![route("careers", "bartender")];
        let xml = sitemap_xml("https://example.com", &routes);

        let lines: Vec<&str> = xml.lines().collect();
        assert_eq!(lines[0], r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        assert!(lines[1].starts_with("<urlset"));
        assert!(lines.last().unwrap().trim() == "</urlset>");
    }
}
