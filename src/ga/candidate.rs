//! Candidate phrases ("DNA") and their genetic operators.
//!
//! A [`Candidate`] is a fixed-length sequence of symbols with a cached
//! fitness score against a target. Children are produced by single-point
//! [`crossover`](Candidate::crossover); variation comes from per-symbol
//! [`mutate`](Candidate::mutate).

use super::alphabet::Alphabet;
use crate::error::{EvolveError, Result};
use rand::Rng;
use std::fmt;

/// One member of a population.
///
/// The number of symbols never changes after construction: mutation
/// replaces symbols in place and crossover children inherit the parents'
/// length.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    symbols: Vec<char>,
    fitness: Option<f64>,
}

impl Candidate {
    /// Creates a candidate of `length` symbols drawn uniformly from `alphabet`.
    pub fn random<R: Rng>(length: usize, alphabet: &Alphabet, rng: &mut R) -> Result<Self> {
        if length == 0 {
            return Err(EvolveError::EmptyCandidate);
        }
        let symbols = (0..length).map(|_| alphabet.random_symbol(rng)).collect();
        Ok(Self {
            symbols,
            fitness: None,
        })
    }

    /// Creates a candidate spelling out `text` exactly.
    ///
    /// ```
    /// use phrase_evolver::ga::Candidate;
    ///
    /// let mut c = Candidate::from_text("cat").unwrap();
    /// let target: Vec<char> = "car".chars().collect();
    /// assert!((c.evaluate(&target).unwrap() - 2.0 / 3.0).abs() < 1e-12);
    /// ```
    pub fn from_text(text: &str) -> Result<Self> {
        let symbols: Vec<char> = text.chars().collect();
        if symbols.is_empty() {
            return Err(EvolveError::EmptyCandidate);
        }
        Ok(Self {
            symbols,
            fitness: None,
        })
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false`: candidates hold at least one symbol.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Cached score from the last [`evaluate`](Self::evaluate), if still valid.
    pub fn fitness(&self) -> Option<f64> {
        self.fitness
    }

    /// Scores this candidate as the fraction of positions equal to `target`.
    ///
    /// Comparison is exact and case-sensitive. The score is cached and
    /// returned.
    ///
    /// # Errors
    /// [`EvolveError::LengthMismatch`] if `target` has a different length.
    pub fn evaluate(&mut self, target: &[char]) -> Result<f64> {
        self.check_length(target.len())?;
        let matches = self
            .symbols
            .iter()
            .zip(target)
            .filter(|(a, b)| a == b)
            .count();
        let score = matches as f64 / target.len() as f64;
        self.fitness = Some(score);
        Ok(score)
    }

    /// Per-position correctness against `target`.
    ///
    /// Positions past the end of the shorter sequence are not reported.
    pub fn matches(&self, target: &[char]) -> Vec<bool> {
        self.symbols
            .iter()
            .zip(target)
            .map(|(a, b)| a == b)
            .collect()
    }

    /// Single-point crossover.
    ///
    /// Picks a split point `m` uniformly in `[0, len)` and returns a child
    /// whose symbols are `self[..m]` followed by `other[m..]`. With `m = 0`
    /// the child is a copy of `other`. Neither parent is modified and the
    /// child starts unevaluated.
    ///
    /// # Errors
    /// [`EvolveError::LengthMismatch`] if the parents differ in length.
    pub fn crossover<R: Rng>(&self, other: &Candidate, rng: &mut R) -> Result<Candidate> {
        self.check_length(other.len())?;
        let midpoint = rng.random_range(0..self.symbols.len());
        Ok(self.splice(other, midpoint))
    }

    /// Child of `self[..midpoint]` and `other[midpoint..]`.
    fn splice(&self, other: &Candidate, midpoint: usize) -> Candidate {
        let mut symbols = Vec::with_capacity(self.symbols.len());
        symbols.extend_from_slice(&self.symbols[..midpoint]);
        symbols.extend_from_slice(&other.symbols[midpoint..]);
        Candidate {
            symbols,
            fitness: None,
        }
    }

    /// Replaces each symbol, independently with probability `rate`, by a
    /// fresh draw from `alphabet`.
    ///
    /// A redraw may produce the symbol already in place. The cached fitness
    /// is cleared; re-evaluate before relying on it.
    pub fn mutate<R: Rng>(&mut self, rate: f64, alphabet: &Alphabet, rng: &mut R) {
        for symbol in &mut self.symbols {
            if rng.random::<f64>() < rate {
                *symbol = alphabet.random_symbol(rng);
            }
        }
        self.fitness = None;
    }

    fn check_length(&self, actual: usize) -> Result<()> {
        if actual != self.symbols.len() {
            return Err(EvolveError::LengthMismatch {
                expected: self.symbols.len(),
                actual,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_random_has_requested_length() {
        let alphabet = Alphabet::default();
        let mut rng = StdRng::seed_from_u64(42);
        let c = Candidate::random(17, &alphabet, &mut rng).unwrap();
        assert_eq!(c.len(), 17);
        assert!(c.fitness().is_none());
        assert!(c.symbols().iter().all(|&s| alphabet.contains(s)));
    }

    #[test]
    fn test_random_rejects_zero_length() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(
            Candidate::random(0, &Alphabet::default(), &mut rng),
            Err(EvolveError::EmptyCandidate)
        );
        assert_eq!(Candidate::from_text(""), Err(EvolveError::EmptyCandidate));
    }

    #[test]
    fn test_evaluate_scores_matches() {
        let mut c = Candidate::from_text("Hello").unwrap();
        assert_eq!(c.evaluate(&chars("Hello")).unwrap(), 1.0);
        assert_eq!(c.evaluate(&chars("hello")).unwrap(), 0.8);
        assert_eq!(c.evaluate(&chars("xxxxx")).unwrap(), 0.0);
        assert_eq!(c.fitness(), Some(0.0));
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let mut c = Candidate::from_text("abcd").unwrap();
        let target = chars("abzz");
        let first = c.evaluate(&target).unwrap();
        let second = c.evaluate(&target).unwrap();
        assert_eq!(first, 0.5);
        assert_eq!(first, second);
    }

    #[test]
    fn test_evaluate_length_mismatch() {
        let mut c = Candidate::from_text("abc").unwrap();
        assert_eq!(
            c.evaluate(&chars("abcd")),
            Err(EvolveError::LengthMismatch {
                expected: 3,
                actual: 4
            })
        );
        assert!(c.fitness().is_none());
    }

    #[test]
    fn test_splice_boundaries() {
        let a = Candidate::from_text("AAAA").unwrap();
        let b = Candidate::from_text("BBBB").unwrap();
        assert_eq!(a.splice(&b, 0).to_string(), "BBBB");
        assert_eq!(a.splice(&b, 3).to_string(), "AAAB");
        assert_eq!(a.splice(&b, 2).to_string(), "AABB");
    }

    #[test]
    fn test_crossover_leaves_parents_untouched() {
        let mut a = Candidate::from_text("AAAA").unwrap();
        a.evaluate(&chars("AAAA")).unwrap();
        let b = Candidate::from_text("BBBB").unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let child = a.crossover(&b, &mut rng).unwrap();
        assert_eq!(a.to_string(), "AAAA");
        assert_eq!(a.fitness(), Some(1.0));
        assert_eq!(b.to_string(), "BBBB");
        assert!(child.fitness().is_none());
    }

    #[test]
    fn test_crossover_never_copies_all_of_self() {
        // Split point is strictly below the length, so the last symbol always
        // comes from the other parent.
        let a = Candidate::from_text("AAA").unwrap();
        let b = Candidate::from_text("BBB").unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let child = a.crossover(&b, &mut rng).unwrap();
            assert_eq!(child.symbols()[2], 'B');
        }
    }

    #[test]
    fn test_crossover_length_mismatch() {
        let a = Candidate::from_text("AAA").unwrap();
        let b = Candidate::from_text("BB").unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        assert!(matches!(
            a.crossover(&b, &mut rng),
            Err(EvolveError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn test_mutate_rate_zero_keeps_symbols() {
        let alphabet = Alphabet::default();
        let mut rng = StdRng::seed_from_u64(42);
        let mut c = Candidate::from_text("Unchanged phrase").unwrap();
        for _ in 0..100 {
            c.mutate(0.0, &alphabet, &mut rng);
        }
        assert_eq!(c.to_string(), "Unchanged phrase");
    }

    #[test]
    fn test_mutate_rate_one_redraws_every_symbol() {
        // Single-symbol alphabet: every redraw yields the same symbol, so a
        // full replacement looks like no change at all.
        let alphabet = Alphabet::new("Q").unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let mut c = Candidate::from_text("QQQQQ").unwrap();
        c.evaluate(&chars("QQQQQ")).unwrap();
        c.mutate(1.0, &alphabet, &mut rng);
        assert_eq!(c.to_string(), "QQQQQ");
        assert!(c.fitness().is_none());
    }

    #[test]
    fn test_mutate_rate_one_replaces_foreign_symbols() {
        let alphabet = Alphabet::new("Q").unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let mut c = Candidate::from_text("abcde").unwrap();
        c.mutate(1.0, &alphabet, &mut rng);
        assert_eq!(c.to_string(), "QQQQQ");
    }

    #[test]
    fn test_matches_flags_positions() {
        let c = Candidate::from_text("Hxllo").unwrap();
        assert_eq!(
            c.matches(&chars("Hello")),
            vec![true, false, true, true, true]
        );
    }

    proptest! {
        #[test]
        fn prop_crossover_is_prefix_plus_suffix(
            a in "[A-Za-z ]{1,40}",
            seed in any::<u64>(),
        ) {
            let len = a.chars().count();
            let mut rng = StdRng::seed_from_u64(seed);
            let alphabet = Alphabet::default();
            let p1 = Candidate::from_text(&a).unwrap();
            let p2 = Candidate::random(len, &alphabet, &mut rng).unwrap();
            let child = p1.crossover(&p2, &mut rng).unwrap();

            prop_assert_eq!(child.len(), len);
            let split_ok = (0..len).any(|m| {
                child.symbols()[..m] == p1.symbols()[..m]
                    && child.symbols()[m..] == p2.symbols()[m..]
            });
            prop_assert!(split_ok);
        }

        #[test]
        fn prop_mutate_preserves_length(
            text in "[A-Za-z0-9]{1,40}",
            rate in 0.0f64..=1.0,
            seed in any::<u64>(),
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut c = Candidate::from_text(&text).unwrap();
            c.mutate(rate, &Alphabet::default(), &mut rng);
            prop_assert_eq!(c.len(), text.chars().count());
        }

        #[test]
        fn prop_evaluate_counts_equal_positions(
            a in "[ab]{1,30}",
            seed in any::<u64>(),
        ) {
            let len = a.chars().count();
            let alphabet = Alphabet::new("ab").unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            let target = Candidate::random(len, &alphabet, &mut rng).unwrap();
            let mut c = Candidate::from_text(&a).unwrap();
            let expected = c
                .symbols()
                .iter()
                .zip(target.symbols())
                .filter(|(x, y)| x == y)
                .count() as f64
                / len as f64;
            prop_assert_eq!(c.evaluate(target.symbols()).unwrap(), expected);
        }
    }
}
