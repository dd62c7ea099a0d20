//! Cross-product enumeration of independent key dimensions.
//!
//! Drives static page generation for multi-dimensional URLs: every role ×
//! city pair becomes one "role in city" build target. Ordering is
//! deterministic (outer dimension first, then inner) so generated sitemaps
//! diff cleanly between builds.
//!
//! The iterators are lazy; callers that need a materialized list can
//! `collect()`. In practice output stays in the low hundreds of tuples
//! (tens of roles × tens of cities).

/// Every pairing of `outer` and `inner`, outer-first.
///
/// For `outer` of length n and `inner` of length m the iterator yields
/// exactly n×m tuples; the first m tuples pair `outer[0]` with each element
/// of `inner` in order.
pub fn pairs<'a, A, B>(outer: &'a [A], inner: &'a [B]) -> impl Iterator<Item = (&'a A, &'a B)> {
    outer
        .iter()
        .flat_map(move |a| inner.iter().map(move |b| (a, b)))
}

/// Every combination of three dimensions, leftmost dimension outermost.
pub fn triples<'a, A, B, C>(
    first: &'a [A],
    second: &'a [B],
    third: &'a [C],
) -> impl Iterator<Item = (&'a A, &'a B, &'a C)> {
    first.iter().flat_map(move |a| {
        second
            .iter()
            .flat_map(move |b| third.iter().map(move |c| (a, b, c)))
    })
}
