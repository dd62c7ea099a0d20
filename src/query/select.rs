//! Filter and top-N selection over datasets.
//!
//! Both helpers return new vectors of references; the source dataset is
//! never touched. Several datasets are hand-ordered by editorial priority,
//! so everything here is stable: records that compare equal keep their
//! original relative order.

use std::cmp::Ordering;

/// Collect every record satisfying `predicate`, in source order.
///
/// An empty result is a normal outcome, handled the same way as a missed
/// point lookup.
pub fn filter_records<'a, T>(records: &'a [T], predicate: impl Fn(&T) -> bool) -> Vec<&'a T> {
    records.iter().filter(|r| predicate(*r)).collect()
}

/// The top `limit` records by `metric`, highest first.
///
/// Ties keep their source order (stable sort). If `limit` exceeds the number
/// of records, all records are returned.
pub fn top_by<'a, T>(records: &'a [T], metric: impl Fn(&T) -> f64, limit: usize) -> Vec<&'a T> {
    let mut ranked: Vec<&T> = records.iter().collect();
    // Descending; non-comparable metrics (NaN) tie rather than panic.
    ranked.sort_by(|a, b| metric(*b).partial_cmp(&metric(*a)).unwrap_or(Ordering::Equal));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Scored {
        name: &'static str,
        score: f64,
    }

    fn sample() -> Vec<Scored> {
        vec![
            Scored { name: "mid", score: 7.0 },
            Scored { name: "top", score: 7.5 },
            Scored { name: "low", score: 5.5 },
        ]
    }

    #[test]
    fn test_filter_keeps_source_order() {
        let records = sample();
        let above_six = filter_records(&records, |r| r.score > 6.0);
        let names: Vec<&str> = above_six.iter().map(|r| r.name).collect();
        assert_eq!(names, ["mid", "top"]);
    }

    #[test]
    fn test_filter_no_matches_is_empty() {
        let records = sample();
        assert!(filter_records(&records, |r| r.score > 10.0).is_empty());
    }

    #[test]
    fn test_filter_every_result_satisfies_predicate() {
        let records = sample();
        for record in filter_records(&records, |r| r.score >= 7.0) {
            assert!(record.score >= 7.0);
        }
    }

    #[test]
    fn test_top_by_descending_with_limit() {
        let records = sample();
        let top = top_by(&records, |r| r.score, 2);
        let names: Vec<&str> = top.iter().map(|r| r.name).collect();
        assert_eq!(names, ["top", "mid"]);
    }

    #[test]
    fn test_top_by_limit_exceeding_len_returns_all() {
        let records = sample();
        let top = top_by(&records, |r| r.score, 10);
        assert_eq!(top.len(), 3);
        assert_eq!(top[0].name, "top");
        assert_eq!(top[2].name, "low");
    }

    #[test]
    fn test_top_by_ties_keep_source_order() {
        let records = vec![
            Scored { name: "first", score: 7.0 },
            Scored { name: "second", score: 7.0 },
            Scored { name: "third", score: 9.0 },
        ];
        let top = top_by(&records, |r| r.score, 3);
        let names: Vec<&str> = top.iter().map(|r| r.name).collect();
        assert_eq!(names, ["third", "first", "second"]);
    }

    #[test]
    fn test_top_by_zero_limit() {
        let records = sample();
        assert!(top_by(&records, |r| r.score, 0).is_empty());
    }
}
