//! careerpages — data and query layer for a statically generated
//! career-content site.
//!
//! The site renders thousands of SEO landing pages (career evaluations,
//! how-to-become guides, interview questions, local pay tables, resume
//! templates, state tax pages) from read-only in-memory datasets. This
//! crate owns those datasets and every way of querying them; routing and
//! rendering live in the external build system.
//!
//! # Architecture
//!
//! ```text
//! page renderer (external)
//!     │  slug from URL segment
//!     ▼
//! data::*         one module per dataset: schema + literal content
//!     │             + accessors (get_*_by_slug, filter, top-N)
//!     ▼
//! query::*        generic lookup / filter / top-N / cross-product
//!
//! build planner (external)
//!     │
//!     ├── generator::all_page_routes()   every build target, in order
//!     ├── generator::sitemap_xml()       sitemap body for those routes
//!     └── validate::audit_cross_references()   advisory drift report
//! ```
//!
//! # Contracts
//!
//! - Every accessor is pure and synchronous; datasets are initialized once
//!   and never mutated, so concurrent readers need no coordination.
//! - A missed lookup is `None`, never an error; an empty filter result is
//!   an empty vec.
//! - Sorts are stable and route enumeration is deterministic, so build
//!   output diffs cleanly between runs.

pub mod data;
pub mod generator;
pub mod query;
pub mod types;
pub mod validate;

pub use generator::{PageRoute, all_page_routes, routes_to_json, sitemap_xml};
pub use query::{Keyed, SlugIndex, filter_records, find_by_key, pairs, top_by, triples};
pub use types::{Difficulty, Industry, TemplateKind, Verdict};
pub use validate::{ReferenceError, ReferenceReport, audit_cross_references};
