//! Iteration over and collection into tagged sequences.
//!
//! Iterating a `Tagged<C, V>` yields exactly what iterating `V` yields. Collecting into a
//! `Tagged<C, V>` builds the `V` first, so array and map style construction works wherever it
//! works for `V`:
//!
//! ```
//! use phantom_types::Tagged;
//! use std::collections::HashMap;
//!
//! enum Scores {}
//!
//! let scores: Tagged<Scores, HashMap<&str, u32>> = [("a", 1), ("b", 2)].into_iter().collect();
//! assert_eq!(scores.keys().count(), 2);
//! ```
use crate::Tagged;

impl<C, V: IntoIterator> IntoIterator for Tagged<C, V> {
    type Item = V::Item;
    type IntoIter = V::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.into_inner().into_iter()
    }
}

impl<'a, C, V> IntoIterator for &'a Tagged<C, V>
where
    &'a V: IntoIterator,
{
    type Item = <&'a V as IntoIterator>::Item;
    type IntoIter = <&'a V as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.value().into_iter()
    }
}

impl<C, V: FromIterator<A>, A> FromIterator<A> for Tagged<C, V> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    enum Letters {}

    #[test]
    fn iterates_in_value_order() {
        let letters: Tagged<Letters, Vec<char>> = Tagged::new(vec!['c', 'a', 'b']);
        let borrowed: Vec<&char> = (&letters).into_iter().collect();
        assert_eq!(borrowed, vec![&'c', &'a', &'b']);

        let mut seen = String::new();
        for letter in &letters {
            seen.push(*letter);
        }
        assert_eq!(seen, "cab");

        let owned: Vec<char> = letters.into_iter().collect();
        assert_eq!(owned, vec!['c', 'a', 'b']);
    }

    #[test]
    fn sorted_map_iterates_by_key() {
        let map: Tagged<Letters, BTreeMap<u8, char>> =
            [(2, 'b'), (1, 'a'), (3, 'c')].into_iter().collect();
        let keys: Vec<u8> = map.keys().copied().collect();
        assert_eq!(keys, vec![1, 2, 3]);
        let values: String = map.into_iter().map(|(_, v)| v).collect();
        assert_eq!(values, "abc");
    }

    #[test]
    fn collects_a_string() {
        let word: Tagged<Letters, String> = ['h', 'i'].into_iter().collect();
        assert_eq!(word.as_str(), "hi");
    }
}
