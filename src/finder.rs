//! Exhaustive subset-sum search.
//!
//! Every non-empty subset of the usable elements is encoded as a bitmask and
//! checked against the target. Usable elements are sorted by amount,
//! largest first, so a candidate can be dropped as soon as its running total
//! overshoots the target.
//!
//! Running totals are kept as unbounded `BigDecimal`s, so a sum never
//! overflows or rounds, no matter how close the amounts get to `Decimal`'s
//! limits.
//!
//! The search is exponential in the number of usable elements. Bounding
//! the input size is left to the caller; a warning is logged above
//! [`LARGE_SEARCH_WARN_THRESHOLD`] but nothing is truncated.

use crate::amount::Amount;
use crate::combination::FoundCombination;
use crate::element::ComboElement;
use bigdecimal::BigDecimal;
use log::{debug, warn};

/// Usable element count above which a search logs a warning.
pub const LARGE_SEARCH_WARN_THRESHOLD: usize = 24;

/// Widest search that still uses a native `u64` mask counter.
const NATIVE_MASK_BITS: usize = 63;

/// An element with its amount, read once per search.
struct Candidate<'a, E> {
    element: &'a E,
    amount: Amount,
    exact: BigDecimal,
}

/// Finds every combination of elements whose amounts sum exactly to a target.
///
/// The finder borrows the caller's elements for its lifetime and never
/// mutates them. Each call to [`find_combinations`] starts from scratch, so
/// repeated calls return equal results.
///
/// A single finder is meant to be used from one thread at a time; separate
/// finders share nothing and can run side by side.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use combo_finder::{Amount, ComboFinder};
///
/// let amounts: Vec<Amount> = ["9.00", "1.00", "10.00", "15.00"]
///     .iter()
///     .map(|s| Amount::from_str(s).unwrap())
///     .collect();
///
/// let finder = ComboFinder::new(&amounts, Amount::from_str("10.00").unwrap());
/// let found = finder.find_combinations();
/// assert_eq!(found.len(), 2);
/// ```
///
/// [`find_combinations`]: ComboFinder::find_combinations
#[derive(Debug, Clone)]
pub struct ComboFinder<'a, E> {
    /// Elements to search through.
    elements: &'a [E],

    /// Amount every returned combination must add up to.
    target: Amount,
}

impl<'a, E: ComboElement> ComboFinder<'a, E> {
    /// Creates a finder over `elements` searching for `target`.
    ///
    /// No validation happens here; an empty slice is fine and simply yields
    /// no combinations.
    pub fn new(elements: &'a [E], target: Amount) -> Self {
        ComboFinder { elements, target }
    }

    /// The amount being searched for.
    pub fn target(&self) -> Amount {
        self.target
    }

    /// The elements being searched through, in caller order.
    pub fn elements(&self) -> &'a [E] {
        self.elements
    }

    /// Elements that can take part in a combination, largest amount first.
    ///
    /// An element is kept when its amount is non-zero, not negative and not
    /// above the target. Equal amounts keep their input order.
    pub fn filtered(&self) -> Vec<&'a E> {
        self.filter_and_sort()
            .into_iter()
            .map(|candidate| candidate.element)
            .collect()
    }

    /// Returns every combination of elements summing exactly to the target.
    ///
    /// Elements inside each combination appear in descending amount order.
    /// Combinations are returned in mask order. The result is empty when
    /// nothing matches, when no element is usable, or when the target is
    /// not positive.
    pub fn find_combinations(&self) -> Vec<FoundCombination<'a, E>> {
        if self.target <= Amount::ZERO {
            debug!("Target {} is not positive, nothing to search", self.target);
            return Vec::new();
        }

        let candidates = self.filter_and_sort();
        if candidates.is_empty() {
            debug!(
                "No usable elements out of {} for target {}",
                self.elements.len(),
                self.target
            );
            return Vec::new();
        }

        let n = candidates.len();
        if n > LARGE_SEARCH_WARN_THRESHOLD {
            warn!(
                "Searching {} elements for {} checks 2^{} - 1 subsets and may take a very long time",
                n, self.target, n
            );
        }
        debug!(
            "Searching {} of {} elements for {}",
            n,
            self.elements.len(),
            self.target
        );

        let target = self.target.to_exact();
        let found = if n <= NATIVE_MASK_BITS {
            self.search_native(&candidates, &target)
        } else {
            self.search_wide(&candidates, &target)
        };

        debug!("Found {} combinations for {}", found.len(), self.target);
        found
    }

    fn filter_and_sort(&self) -> Vec<Candidate<'a, E>> {
        let mut candidates: Vec<Candidate<'a, E>> = Vec::with_capacity(self.elements.len());

        for element in self.elements {
            let amount = element.combo_amount();
            if amount.is_zero() || amount > self.target {
                continue;
            }
            if amount.is_negative() {
                debug!("Skipping negative amount {}", amount);
                continue;
            }
            candidates.push(Candidate {
                element,
                amount,
                exact: amount.to_exact(),
            });
        }

        // Stable, so ties stay in input order.
        candidates.sort_by(|a, b| b.amount.cmp(&a.amount));
        candidates
    }

    /// Walks masks `1..2^n` with a `u64` counter. Requires `n <= 63`.
    fn search_native(
        &self,
        candidates: &[Candidate<'a, E>],
        target: &BigDecimal,
    ) -> Vec<FoundCombination<'a, E>> {
        let n = candidates.len();
        debug_assert!(n <= NATIVE_MASK_BITS);

        let mut found = Vec::new();
        let end: u64 = 1 << n;
        for mask in 1..end {
            // Index 0 is the most significant of the n bits.
            let is_set = |i: usize| (mask >> (n - 1 - i)) & 1 == 1;
            if let Some(combo) = verify(candidates, target, is_set) {
                found.push(combo);
            }
        }
        found
    }

    /// Same walk as [`search_native`] for any `n`, using a bit-vector counter.
    ///
    /// [`search_native`]: ComboFinder::search_native
    fn search_wide(
        &self,
        candidates: &[Candidate<'a, E>],
        target: &BigDecimal,
    ) -> Vec<FoundCombination<'a, E>> {
        let mut found = Vec::new();
        let mut mask = WideMask::new(candidates.len());
        while mask.increment() {
            if let Some(combo) = verify(candidates, target, |i| mask.is_set(i)) {
                found.push(combo);
            }
        }
        found
    }
}

/// Sums the selected candidates left to right, bailing out on overshoot.
fn verify<'a, E, F>(
    candidates: &[Candidate<'a, E>],
    target: &BigDecimal,
    is_set: F,
) -> Option<FoundCombination<'a, E>>
where
    F: Fn(usize) -> bool,
{
    let mut picked = Vec::new();
    let mut total = BigDecimal::from(0i64);

    for (i, candidate) in candidates.iter().enumerate() {
        if !is_set(i) {
            continue;
        }
        picked.push(candidate.element);
        total += &candidate.exact;
        if total > *target {
            return None;
        }
    }

    if total == *target {
        Some(FoundCombination::from_elements(picked))
    } else {
        None
    }
}

/// Arbitrary-width binary counter, most significant bit at index 0.
#[derive(Debug, Clone)]
struct WideMask {
    bits: Vec<bool>,
}

impl WideMask {
    /// A counter of `width` bits, starting at zero.
    fn new(width: usize) -> Self {
        WideMask {
            bits: vec![false; width],
        }
    }

    fn is_set(&self, index: usize) -> bool {
        self.bits[index]
    }

    /// Adds one. Returns `false` once the counter wraps back to zero.
    fn increment(&mut self) -> bool {
        for bit in self.bits.iter_mut().rev() {
            if *bit {
                *bit = false;
            } else {
                *bit = true;
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn amounts(values: &[&str]) -> Vec<Amount> {
        values.iter().map(|v| Amount::from_str(v).unwrap()).collect()
    }

    fn amt(value: &str) -> Amount {
        Amount::from_str(value).unwrap()
    }

    fn sample() -> Vec<Amount> {
        amounts(&[
            "1.00", "10.00", "5.00", "9.00", "15.00", "1.01", "2.02", "3.3", "1.96", "5.56",
            "100.01", "26.02", "39.3", "12.46", "54.56",
        ])
    }

    #[test]
    fn test_empty_elements() {
        let elements: Vec<Amount> = Vec::new();
        let finder = ComboFinder::new(&elements, amt("10.00"));
        assert!(finder.find_combinations().is_empty());
    }

    #[test]
    fn test_single_match() {
        let elements = sample();
        let found = ComboFinder::new(&elements, amt("12.46")).find_combinations();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].amounts(), amounts(&["12.46"]));
    }

    #[test]
    fn test_two_matches() {
        let elements = sample();
        let found = ComboFinder::new(&elements, amt("10.00")).find_combinations();
        assert_eq!(found.len(), 2);

        // Mask order: {9.00, 1.00} sets lower bits than {10.00}.
        assert_eq!(found[0].amounts(), amounts(&["9.00", "1.00"]));
        assert_eq!(found[1].amounts(), amounts(&["10.00"]));
    }

    #[test]
    fn test_no_match() {
        let elements = sample();
        let found = ComboFinder::new(&elements, amt("1000.00")).find_combinations();
        assert!(found.is_empty());
    }

    #[test]
    fn test_filtered_drops_zero_negative_and_oversized() {
        let elements = amounts(&["0", "4", "-1", "11", "10", "0.00", "2"]);
        let finder = ComboFinder::new(&elements, amt("10"));
        let kept: Vec<Amount> = finder.filtered().into_iter().copied().collect();
        assert_eq!(kept, amounts(&["10", "4", "2"]));
    }

    #[test]
    fn test_filtered_sort_is_stable_for_ties() {
        let elements = amounts(&["5.0", "7", "5.00"]);
        let finder = ComboFinder::new(&elements, amt("20"));
        let kept = finder.filtered();
        assert!(std::ptr::eq(kept[0], &elements[1]));
        assert!(std::ptr::eq(kept[1], &elements[0]));
        assert!(std::ptr::eq(kept[2], &elements[2]));
    }

    #[test]
    fn test_non_positive_target_is_empty() {
        let elements = amounts(&["1", "-1", "0"]);
        assert!(ComboFinder::new(&elements, Amount::ZERO)
            .find_combinations()
            .is_empty());
        assert!(ComboFinder::new(&elements, amt("-1"))
            .find_combinations()
            .is_empty());
    }

    #[test]
    fn test_equal_amounts_stay_distinct() {
        let elements = amounts(&["5.00", "5.00", "10.00"]);
        let found = ComboFinder::new(&elements, amt("10.00")).find_combinations();
        assert_eq!(found.len(), 2);

        let pair = found.iter().find(|c| c.len() == 2).unwrap();
        assert!(std::ptr::eq(pair.elements()[0], &elements[0]));
        assert!(std::ptr::eq(pair.elements()[1], &elements[1]));
    }

    #[test]
    fn test_idempotent() {
        let elements = sample();
        let finder = ComboFinder::new(&elements, amt("10.00"));
        assert_eq!(finder.find_combinations(), finder.find_combinations());
    }

    #[test]
    fn test_wide_counter_matches_native() {
        let elements = sample();
        let finder = ComboFinder::new(&elements, amt("15.00"));
        let candidates = finder.filter_and_sort();
        let target = finder.target().to_exact();

        let native = finder.search_native(&candidates, &target);
        let wide = finder.search_wide(&candidates, &target);
        assert!(!native.is_empty());
        assert_eq!(native, wide);
    }

    #[test]
    fn test_totals_past_decimal_max_abort_instead_of_panicking() {
        let elements = vec![Amount::new(Decimal::MAX), Amount::new(Decimal::MAX)];
        let found = ComboFinder::new(&elements, Amount::new(Decimal::MAX)).find_combinations();

        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|combo| combo.len() == 1));
    }

    #[test]
    fn test_sum_needing_more_than_28_digits_does_not_round_into_a_match() {
        let big = Amount::new(Decimal::from(1_000_000_000_000i64));
        let tiny = Amount::new(Decimal::new(1, 28));
        let elements = vec![big, tiny];
        let found = ComboFinder::new(&elements, big).find_combinations();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].amounts(), vec![big]);
    }

    #[test]
    fn test_wide_mask_counts_through_every_value() {
        let mut mask = WideMask::new(3);
        let mut seen = Vec::new();
        while mask.increment() {
            let value = (0..3).fold(0u32, |acc, i| (acc << 1) | mask.is_set(i) as u32);
            seen.push(value);
        }
        assert_eq!(seen, (1..8).collect::<Vec<u32>>());
    }

    #[test]
    fn test_wide_mask_zero_width() {
        let mut mask = WideMask::new(0);
        assert!(!mask.increment());
    }
}
