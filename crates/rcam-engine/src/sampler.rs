//! Weighted-random selection.
//!
//! No selection is a normal outcome here, not an error: empty lists and
//! lists whose weights sum to zero return `None` and callers fall back.

use rand::prelude::IndexedRandom;
use rand::Rng;
use rcam_models::WeightedOption;

/// Added to the draw so an option whose cumulative weight exactly matches it
/// still wins, and so a leading zero-weight option can never match.
const DRAW_EPSILON: f64 = f64::EPSILON;

/// Sum of all weights in a list.
pub fn total_weight<T>(options: &[WeightedOption<T>]) -> f64 {
    options.iter().map(WeightedOption::weight).sum()
}

/// Pick one item with probability proportional to its weight.
///
/// Options are scanned in slice order, so the result is deterministic for a
/// fixed random source. Zero-weight options are never returned.
pub fn pick<'a, T, R>(options: &'a [WeightedOption<T>], rng: &mut R) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    let total = total_weight(options);
    if options.is_empty() || total <= 0.0 || !total.is_finite() {
        return None;
    }

    let mut remainder = total * rng.random::<f64>() + DRAW_EPSILON;
    let mut last_positive = None;

    for option in options {
        if option.weight() <= 0.0 {
            continue;
        }
        remainder -= option.weight();
        if remainder <= 0.0 {
            return Some(option.item());
        }
        last_positive = Some(option.item());
    }

    // Round-off can leave a sliver of remainder when the draw lands at the
    // very top of the range.
    last_positive
}

/// Pick one item uniformly at random.
pub fn pick_uniform<'a, T, R>(items: &'a [T], rng: &mut R) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    items.choose(rng)
}
