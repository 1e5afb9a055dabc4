//! Scoring how closely strings match, and picking the best candidates.
//!
//! A [`Criterion`] scores a pair of strings between `0.0` (nothing in
//! common) and `1.0` (perfect match). Plain functions and closures with the
//! right signature are criteria, and [`Weighted`] mixes several of them.
//!
//! ```
//! use datakit_text::{Weighted, close_matches, equal, levenshtein_ratio, same_size};
//!
//! let criterion = Weighted::new().with(levenshtein_ratio).with(same_size).with(equal);
//! let matches = close_matches("foo", ["bar", "barb", "fooz", "foo"], &criterion, 0.1);
//! let names: Vec<_> = matches.iter().map(|(name, _)| *name).collect();
//! assert_eq!(names, ["foo", "bar", "fooz"]);
//! ```

use tracing::trace;

/// Scores the similarity of two strings between `0.0` and `1.0`.
pub trait Criterion {
    /// Score `a` against `b`. `1.0` is a perfect match.
    fn score(&self, a: &str, b: &str) -> f64;
}

impl<F> Criterion for F
where
    F: Fn(&str, &str) -> f64,
{
    fn score(&self, a: &str, b: &str) -> f64 {
        self(a, b)
    }
}

/// `1.0` when the strings are identical.
#[must_use]
pub fn equal(a: &str, b: &str) -> f64 {
    if a == b { 1.0 } else { 0.0 }
}

/// `1.0` when the strings have the same number of characters.
#[must_use]
pub fn same_size(a: &str, b: &str) -> f64 {
    if a.chars().count() == b.chars().count() {
        1.0
    } else {
        0.0
    }
}

/// One minus the edit distance divided by the longer length.
///
/// Two empty strings are a perfect match.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn levenshtein_ratio(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }
    1.0 - levenshtein(a, b) as f64 / longest as f64
}

/// Number of single character insertions, deletions and substitutions
/// needed to turn `a` into `b`.
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// A criterion mixing other criteria by weight.
///
/// The score is the weighted mean of the sub-scores. Adding every criterion
/// with [`Weighted::with`] gives their plain average. An empty mix scores
/// `0.0`.
#[derive(Default)]
pub struct Weighted<'a> {
    criteria: Vec<(Box<dyn Criterion + 'a>, f64)>,
}

impl<'a> Weighted<'a> {
    /// An empty mix.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `criterion` with weight `1.0`.
    #[must_use]
    pub fn with(self, criterion: impl Criterion + 'a) -> Self {
        self.with_weight(criterion, 1.0)
    }

    /// Add `criterion` with the given weight.
    #[must_use]
    pub fn with_weight(mut self, criterion: impl Criterion + 'a, weight: f64) -> Self {
        self.criteria.push((Box::new(criterion), weight));
        self
    }
}

impl Criterion for Weighted<'_> {
    fn score(&self, a: &str, b: &str) -> f64 {
        let (sum, total) = self
            .criteria
            .iter()
            .fold((0.0, 0.0), |(sum, total), (criterion, weight)| {
                (sum + criterion.score(a, b) * weight, total + weight)
            });
        if total > 0.0 { sum / total } else { 0.0 }
    }
}

/// The first target that matches `elt` perfectly.
pub fn first_match<T, C>(elt: &str, targets: impl IntoIterator<Item = T>, criterion: &C) -> Option<T>
where
    T: AsRef<str>,
    C: Criterion + ?Sized,
{
    targets
        .into_iter()
        .find(|target| criterion.score(elt, target.as_ref()) >= 1.0)
}

/// Targets scoring strictly above `min_ratio` against `elt`, best first.
///
/// Targets with equal scores keep their input order.
pub fn close_matches<T, C>(
    elt: &str,
    targets: impl IntoIterator<Item = T>,
    criterion: &C,
    min_ratio: f64,
) -> Vec<(T, f64)>
where
    T: AsRef<str>,
    C: Criterion + ?Sized,
{
    let mut candidates: Vec<(T, f64)> = targets
        .into_iter()
        .map(|target| {
            let ratio = criterion.score(elt, target.as_ref());
            (target, ratio)
        })
        .filter(|(_, ratio)| *ratio > min_ratio)
        .collect();
    candidates.sort_by(|(_, a), (_, b)| b.total_cmp(a));
    trace!(elt, matches = candidates.len(), "Ranked close matches");
    candidates
}
