//! Keep a sequence at or below a maximum length.
use crate::ConstraintError;
use crate::Identity;
use crate::Restrict;
use crate::Transform;
use crate::Wrapped;
use log::trace;
use serde::Serialize;
use std::collections::VecDeque;
use std::fmt;
use std::ops::Deref;

/// A sequence that can be cut down to its first elements.
///
/// Strings count Unicode scalar values (`char`s), not bytes and not grapheme clusters, so
/// truncation never splits a code point.
pub trait Truncate {
    fn element_count(&self) -> usize;

    /// Keep the first `count` elements. Does nothing when there are fewer.
    fn keep_first(&mut self, count: usize);
}

impl Truncate for String {
    fn element_count(&self) -> usize {
        self.chars().count()
    }

    fn keep_first(&mut self, count: usize) {
        if let Some((byte_index, _)) = self.char_indices().nth(count) {
            self.truncate(byte_index);
        }
    }
}

impl<T> Truncate for Vec<T> {
    fn element_count(&self) -> usize {
        self.len()
    }

    fn keep_first(&mut self, count: usize) {
        self.truncate(count);
    }
}

impl<T> Truncate for VecDeque<T> {
    fn element_count(&self) -> usize {
        self.len()
    }

    fn keep_first(&mut self, count: usize) {
        self.truncate(count);
    }
}

/// Keeps the first `max_length` elements of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TakePrefix {
    max_length: usize,
}

impl TakePrefix {
    /// Accepts any integer type. A negative length, or one that does not fit in `usize`, is
    /// rejected.
    pub fn new<L>(max_length: L) -> Result<Self, ConstraintError>
    where
        L: TryInto<usize> + ToString,
    {
        let shown = max_length.to_string();
        let max_length = max_length
            .try_into()
            .map_err(|_| ConstraintError::InvalidMaxLength(shown))?;
        Ok(Self { max_length })
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }
}

impl<T> Transform<T> for TakePrefix
where
    T: Wrapped,
    T::Value: Truncate,
{
    fn apply(&self, value: T) -> T {
        value.map_value(|mut sequence| {
            let count = sequence.element_count();
            if count > self.max_length {
                trace!("truncating sequence of length {count} to {}", self.max_length);
                sequence.keep_first(self.max_length);
            }
            sequence
        })
    }
}

/// A [`Restrict`] that truncates its sequence to a maximum length.
///
/// ```
/// use phantom_types::Tagged;
/// use phantom_types::Truncated;
///
/// enum Code {}
///
/// let mut code = Truncated::<Tagged<Code, String>>::from_identity(5).unwrap();
/// code.set(Tagged::from("1234567890"));
/// assert_eq!(code.get().as_str(), "12345");
/// ```
#[derive(Clone)]
pub struct Truncated<T> {
    restriction: Restrict<T, TakePrefix>,
}

impl<T> Truncated<T>
where
    T: Wrapped,
    T::Value: Truncate,
{
    pub fn new<L>(initial: T, max_length: L) -> Result<Self, ConstraintError>
    where
        L: TryInto<usize> + ToString,
    {
        let take_prefix = TakePrefix::new(max_length)?;
        Ok(Self {
            restriction: Restrict::new(initial, take_prefix),
        })
    }

    pub fn from_identity<L>(max_length: L) -> Result<Self, ConstraintError>
    where
        T: Identity,
        L: TryInto<usize> + ToString,
    {
        Self::new(T::identity(), max_length)
    }

    pub fn get(&self) -> &T {
        self.restriction.get()
    }

    pub fn set(&mut self, value: T) {
        self.restriction.set(value);
    }

    pub fn replace(&mut self, value: T) -> T {
        self.restriction.replace(value)
    }

    pub fn into_inner(self) -> T {
        self.restriction.into_inner()
    }

    pub fn max_length(&self) -> usize {
        self.restriction.transform().max_length()
    }
}

impl<T> Deref for Truncated<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.restriction
    }
}

impl<T: fmt::Debug> fmt::Debug for Truncated<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Truncated")
            .field("value", self.restriction.get())
            .field("max_length", &self.restriction.transform().max_length)
            .finish()
    }
}

impl<T: PartialEq> PartialEq for Truncated<T> {
    fn eq(&self, other: &Self) -> bool {
        self.restriction == other.restriction
    }
}

impl<T: Serialize> Serialize for Truncated<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.restriction.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tagged;

    enum Code {}

    #[test]
    fn truncates_strings() {
        let mut code = Truncated::<Tagged<Code, String>>::from_identity(5).unwrap();
        code.set(Tagged::from("1234567890"));
        assert_eq!(code.get().as_str(), "12345");
    }

    #[test]
    fn truncates_vectors() {
        let mut digits = Truncated::<Tagged<Code, Vec<i32>>>::from_identity(5).unwrap();
        digits.set(Tagged::new(vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 0]));
        assert_eq!(digits.into_inner().into_inner(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn truncates_at_construction() {
        let code = Truncated::new(String::from("abcdef"), 3).unwrap();
        assert_eq!(code.as_str(), "abc");
    }

    #[test]
    fn short_values_pass_through() {
        let mut code = Truncated::new(String::new(), 5).unwrap();
        code.set("abcde".to_string());
        assert_eq!(code.as_str(), "abcde");
        code.set("ab".to_string());
        assert_eq!(code.as_str(), "ab");
    }

    #[test]
    fn zero_length_empties_the_value() {
        let mut queue = Truncated::new(VecDeque::from([1, 2, 3]), 0_usize).unwrap();
        assert!(queue.is_empty());
        queue.set(VecDeque::from([4]));
        assert!(queue.is_empty());
    }

    #[test]
    fn counts_chars_not_bytes() {
        let mut word = Truncated::new(String::new(), 3).unwrap();
        word.set("héllo wörld".to_string());
        assert_eq!(word.as_str(), "hél");
        word.set("日本語テキスト".to_string());
        assert_eq!(word.as_str(), "日本語");
        assert_eq!(word.element_count(), 3);
    }

    #[test]
    fn negative_length_is_rejected() {
        let err = Truncated::new(String::new(), -1).unwrap_err();
        assert_eq!(err, ConstraintError::InvalidMaxLength("-1".to_string()));
    }

    #[test]
    fn max_length_is_reported() {
        let code = Truncated::new(Vec::<u8>::new(), 8_u16).unwrap();
        assert_eq!(code.max_length(), 8);
        assert_eq!(format!("{code:?}"), "Truncated { value: [], max_length: 8 }");
    }
}
