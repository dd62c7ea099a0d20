//! Build-target enumeration and sitemap output.

pub mod routes;
pub mod sitemap;

pub use routes::{PageRoute, all_page_routes, routes_to_json};
pub use sitemap::sitemap_xml;
