//! Symbol alphabet and uniform random picking.

use crate::error::{EvolveError, Result};
use rand::Rng;
use std::fmt;

/// Letters, space, punctuation and digits, in the order random draws index them.
pub const DEFAULT_SYMBOLS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz !@#$%^&*()-=_+`~[]{}\\|;':\",./<>?0123456789";

/// Picks one element uniformly at random, or `None` for an empty slice.
pub fn pick_random<'a, T, R: Rng>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    Some(&items[rng.random_range(0..items.len())])
}

/// A fixed, ordered, non-empty set of symbols.
///
/// Every randomly created or mutated symbol of a [`Candidate`](super::Candidate)
/// is drawn uniformly from an alphabet.
///
/// ```
/// use phrase_evolver::ga::Alphabet;
///
/// let dna = Alphabet::new("ACGT").unwrap();
/// assert_eq!(dna.len(), 4);
/// assert!(dna.contains('G'));
/// assert!(Alphabet::new("AA").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Builds an alphabet from the characters of `symbols`.
    ///
    /// Rejects empty input and repeated characters.
    pub fn new(symbols: &str) -> Result<Self> {
        let mut seen = Vec::new();
        for c in symbols.chars() {
            if seen.contains(&c) {
                return Err(EvolveError::DuplicateSymbol(c));
            }
            seen.push(c);
        }
        if seen.is_empty() {
            return Err(EvolveError::EmptyAlphabet);
        }
        Ok(Self { symbols: seen })
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Draws one symbol uniformly at random.
    pub fn random_symbol<R: Rng>(&self, rng: &mut R) -> char {
        self.symbols[rng.random_range(0..self.symbols.len())]
    }

    /// Checks that every character of `text` belongs to the alphabet.
    pub fn check_text(&self, text: &str) -> Result<()> {
        match text.chars().find(|&c| !self.contains(c)) {
            Some(c) => Err(EvolveError::SymbolNotInAlphabet(c)),
            None => Ok(()),
        }
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_SYMBOLS.chars().collect(),
        }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

impl TryFrom<String> for Alphabet {
    type Error = EvolveError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<Alphabet> for String {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.symbols.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_alphabet() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.len(), 95);
        for c in ['A', 'z', ' ', '!', '"', '\\', '`', '9'] {
            assert!(alphabet.contains(c), "missing {c:?}");
        }
        assert!(!alphabet.contains('\n'));
        // No duplicates in the built-in set.
        assert_eq!(Alphabet::new(DEFAULT_SYMBOLS).unwrap(), alphabet);
    }

    #[test]
    fn test_new_rejects_empty() {
        assert_eq!(Alphabet::new(""), Err(EvolveError::EmptyAlphabet));
    }

    #[test]
    fn test_new_rejects_duplicates() {
        assert_eq!(Alphabet::new("ABCA"), Err(EvolveError::DuplicateSymbol('A')));
    }

    #[test]
    fn test_random_symbol_is_member() {
        let alphabet = Alphabet::new("xyz").unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 3];
        for _ in 0..1000 {
            let c = alphabet.random_symbol(&mut rng);
            let idx = alphabet.symbols().iter().position(|&s| s == c).unwrap();
            seen[idx] = true;
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn test_pick_random() {
        let mut rng = StdRng::seed_from_u64(7);
        let empty: [u8; 0] = [];
        assert!(pick_random(&empty, &mut rng).is_none());
        assert_eq!(pick_random(&[5], &mut rng), Some(&5));

        let items = [1, 2, 3, 4];
        for _ in 0..100 {
            let v = pick_random(&items, &mut rng).unwrap();
            assert!(items.contains(v));
        }
    }

    #[test]
    fn test_check_text() {
        let alphabet = Alphabet::new("AB ").unwrap();
        assert!(alphabet.check_text("AB BA").is_ok());
        assert_eq!(
            alphabet.check_text("ABC"),
            Err(EvolveError::SymbolNotInAlphabet('C'))
        );
    }

    #[test]
    fn test_display_round_trips_symbols() {
        let alphabet = Alphabet::new("ab1").unwrap();
        assert_eq!(alphabet.to_string(), "ab1");
        assert_eq!(String::from(alphabet), "ab1");
    }
}
