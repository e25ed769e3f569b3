use itertools::Itertools;

use crate::Show;

/// The type of the symbols that automata read.
pub type Symbol = char;

/// Represents an alphabet where a [`Symbol`] is just a single `char`. The symbols are kept
/// sorted and free of duplicates, so two alphabets over the same symbols compare equal no matter
/// in which order the symbols were given.
///
/// # Example
/// ```
/// use minimal_nfa::prelude::*;
///
/// let alphabet = CharAlphabet::from_iter(['b', 'a', 'b']);
/// assert_eq!(alphabet.size(), 2);
/// assert_eq!(alphabet, CharAlphabet::of_size(2));
/// ```
#[derive(Clone, Hash, PartialEq, Eq, Debug, PartialOrd, Ord, Default)]
pub struct CharAlphabet(Vec<Symbol>);

impl CharAlphabet {
    /// Creates a new [`CharAlphabet`] alphabet of the given size. The symbols are just the first `size` letters
    /// of the alphabet, i.e. 'a' to 'z'.
    pub fn of_size(size: usize) -> Self {
        assert!(size <= 26, "Alphabet is too large");
        Self((0..size).map(|i| (b'a' + i as u8) as char).collect())
    }

    /// Returns the number of symbols in the alphabet.
    pub fn size(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the alphabet contains no symbols.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over all symbols in increasing order.
    pub fn universe(&self) -> impl Iterator<Item = Symbol> + Clone + '_ {
        self.0.iter().copied()
    }

    /// Checks whether `symbol` belongs to the alphabet.
    pub fn contains(&self, symbol: Symbol) -> bool {
        self.0.binary_search(&symbol).is_ok()
    }

    /// Returns the position of `symbol` in the alphabet, if it is present.
    pub fn position(&self, symbol: Symbol) -> Option<usize> {
        self.0.binary_search(&symbol).ok()
    }

    /// Iterates over all words over the alphabet of length at most `max_length`, shortest words
    /// first and words of the same length in lexicographic order.
    pub fn words_up_to(&self, max_length: usize) -> impl Iterator<Item = Vec<Symbol>> + '_ {
        std::iter::once(vec![]).chain((1..=max_length).flat_map(move |length| {
            std::iter::repeat(self.universe())
                .take(length)
                .multi_cartesian_product()
        }))
    }
}

impl std::ops::Index<usize> for CharAlphabet {
    type Output = Symbol;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<Vec<Symbol>> for CharAlphabet {
    fn from(value: Vec<Symbol>) -> Self {
        Self::from_iter(value)
    }
}

impl FromIterator<Symbol> for CharAlphabet {
    fn from_iter<T: IntoIterator<Item = Symbol>>(iter: T) -> Self {
        Self(iter.into_iter().unique().sorted().collect())
    }
}

impl Show for CharAlphabet {
    fn show(&self) -> String {
        format!("{{{}}}", self.0.iter().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::CharAlphabet;

    #[test]
    fn alphabet_is_normalized() {
        let alphabet = CharAlphabet::from_iter(['c', 'a', 'c', 'b']);
        assert_eq!(alphabet.universe().collect_vec(), vec!['a', 'b', 'c']);
        assert_eq!(alphabet.position('b'), Some(1));
        assert!(!alphabet.contains('d'));
        assert_eq!(alphabet, CharAlphabet::of_size(3));
    }

    #[test]
    fn bounded_words() {
        let alphabet = CharAlphabet::of_size(2);
        let words = alphabet.words_up_to(2).collect_vec();
        assert_eq!(
            words,
            vec![
                vec![],
                vec!['a'],
                vec!['b'],
                vec!['a', 'a'],
                vec!['a', 'b'],
                vec!['b', 'a'],
                vec!['b', 'b'],
            ]
        );
        assert_eq!(alphabet.words_up_to(4).count(), 1 + 2 + 4 + 8 + 16);
        assert_eq!(CharAlphabet::default().words_up_to(3).count(), 1);
    }
}
