//! Point lookup over slug-keyed records.
//!
//! Lookups compare keys with exact, case-sensitive string equality. A miss
//! is a normal outcome (`None`), not an error: the page layer renders its
//! not-found page from it.

use rustc_hash::FxHashMap;
use tracing::warn;

/// A record addressable by a unique URL slug within its dataset.
///
/// Slug uniqueness is an authoring convention, not an enforced constraint.
/// If two records share a key, the first one in dataset order wins
/// everywhere in this crate.
pub trait Keyed {
    /// The record's slug (e.g., `"bartender"`).
    fn key(&self) -> &str;
}

/// Return the first record whose key equals `key`, or `None`.
pub fn find_by_key<'a, T: Keyed>(records: &'a [T], key: &str) -> Option<&'a T> {
    records.iter().find(|r| r.key() == key)
}

/// A point-lookup index built once over a dataset.
///
/// Duplicate keys keep the first record in dataset order and emit a warning
/// at build time, so authoring mistakes surface in logs without changing
/// lookup behavior.
#[derive(Debug)]
pub struct SlugIndex<'a, T> {
    by_key: FxHashMap<&'a str, &'a T>,
}

impl<'a, T: Keyed> SlugIndex<'a, T> {
    /// Index `records` by key. First record wins on duplicates.
    pub fn build(records: &'a [T]) -> Self {
        let mut by_key = FxHashMap::default();
        by_key.reserve(records.len());

        for record in records {
            if by_key.contains_key(record.key()) {
                warn!(slug = record.key(), "duplicate slug in dataset, keeping first record");
                continue;
            }
            by_key.insert(record.key(), record);
        }

        Self { by_key }
    }

    /// Look up a record by exact key.
    pub fn get(&self, key: &str) -> Option<&'a T> {
        self.by_key.get(key).copied()
    }

    /// Whether any record carries `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    /// Number of distinct keys in the index.
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    /// True when the source dataset was empty.
    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Rec {
        slug: &'static str,
        value: u32,
    }

    impl Keyed for Rec {
        fn key(&self) -> &str {
            self.slug
        }
    }

    fn sample() -> Vec<Rec> {
        vec![
            Rec { slug: "alpha", value: 1 },
            Rec { slug: "beta", value: 2 },
            Rec { slug: "gamma", value: 3 },
        ]
    }

    #[test]
    fn test_find_by_key_hit() {
        let records = sample();
        let found = find_by_key(&records, "beta").unwrap();
        assert_eq!(found.value, 2);
    }

    #[test]
    fn test_find_by_key_miss_is_none() {
        let records = sample();
        assert!(find_by_key(&records, "delta").is_none());
    }

    #[test]
    fn test_find_by_key_is_case_sensitive() {
        let records = sample();
        assert!(find_by_key(&records, "Alpha").is_none());
    }

    #[test]
    fn test_find_by_key_every_record_round_trips() {
        let records = sample();
        for record in &records {
            let found = find_by_key(&records, record.key()).unwrap();
            assert_eq!(found.value, record.value);
        }
    }

    #[test]
    fn test_duplicate_key_first_wins() {
        let records = vec![
            Rec { slug: "dup", value: 1 },
            Rec { slug: "dup", value: 2 },
        ];

        assert_eq!(find_by_key(&records, "dup").unwrap().value, 1);

        let index = SlugIndex::build(&records);
        assert_eq!(index.get("dup").unwrap().value, 1);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_index_matches_linear_scan() {
        let records = sample();
        let index = SlugIndex::build(&records);

        for record in &records {
            assert_eq!(
                index.get(record.key()).unwrap().value,
                find_by_key(&records, record.key()).unwrap().value,
            );
        }
        assert!(index.get("missing").is_none());
        assert!(!index.contains("missing"));
    }

    #[test]
    fn test_empty_dataset() {
        let records: Vec<Rec> = vec![];
        assert!(find_by_key(&records, "anything").is_none());

        let index = SlugIndex::build(&records);
        assert!(index.is_empty());
    }
}
