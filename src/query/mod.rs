//! Generic query helpers shared by every dataset module.
//!
//! Every dataset in [`crate::data`] is an ordered, read-only sequence of
//! records. The helpers here cover the three access patterns the page layer
//! needs:
//!
//! | Helper | Pattern |
//! |--------|---------|
//! | [`find_by_key`] / [`SlugIndex`] | point lookup by slug |
//! | [`filter_records`] / [`top_by`] | filter, stable top-N by metric |
//! | [`pairs`] / [`triples`] | cross-product of key dimensions |
//!
//! All helpers are pure: they never mutate the source dataset and never
//! panic on missing keys or empty results.

pub mod combine;
pub mod lookup;
pub mod select;

pub use combine::{pairs, triples};
pub use lookup::{Keyed, SlugIndex, find_by_key};
pub use select::{filter_records, top_by};
