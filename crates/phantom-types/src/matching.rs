//! Keep a text value matching a regular expression.
//!
//! A pattern can not repair text that does not match it. [`Matching`] ignores a non-matching
//! write and keeps the last value that matched, or the initial value if nothing has matched yet.
//! [`FullMatch`] is the stateless form for use with [`Restrict`](crate::Restrict): it replaces
//! non-matching text with a fixed fallback.
use crate::ConstraintError;
use crate::Identity;
use crate::Transform;
use crate::Wrapped;
use log::trace;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::ops::Deref;

/// Passes text that matches `pattern` in full and replaces anything else with `fallback`.
#[derive(Clone)]
pub struct FullMatch<T> {
    regex: Regex,
    pattern: String,
    fallback: T,
}

impl<T> FullMatch<T> {
    /// The pattern is anchored at both ends: `"[a-z]+"` accepts `"abc"` but not `"abc1"`.
    pub fn new(pattern: &str, fallback: T) -> Result<Self, ConstraintError> {
        // Compiled on its own first, so a pattern like `a)|(b` can not escape the anchors.
        Regex::new(pattern).map_err(|e| ConstraintError::InvalidPattern(e.to_string()))?;
        let regex = Regex::new(&format!("^(?:{pattern})$"))
            .map_err(|e| ConstraintError::InvalidPattern(e.to_string()))?;
        Ok(Self {
            regex,
            pattern: pattern.to_owned(),
            fallback,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn fallback(&self) -> &T {
        &self.fallback
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

impl<T> Transform<T> for FullMatch<T>
where
    T: Wrapped + Clone,
    T::Value: AsRef<str>,
{
    fn apply(&self, value: T) -> T {
        if self.is_match(value.value().as_ref()) {
            value
        } else {
            trace!("value does not match {}, substituting fallback", self.pattern);
            self.fallback.clone()
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for FullMatch<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FullMatch")
            .field("pattern", &self.pattern)
            .field("fallback", &self.fallback)
            .finish()
    }
}

/// Holds text that matches a pattern in full, or the initial value until the first match.
///
/// ```
/// use phantom_types::Matching;
/// use phantom_types::Tagged;
///
/// enum Email {}
///
/// let mut email = Matching::<Tagged<Email, String>>::from_identity(
///     r"[A-Z0-9a-z._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,64}",
/// )
/// .unwrap();
/// email.set(Tagged::from("test@test.com"));
/// assert_eq!(email.get().as_str(), "test@test.com");
/// email.set(Tagged::from("test.com"));
/// assert_eq!(email.get().as_str(), "test@test.com");
/// ```
#[derive(Clone)]
pub struct Matching<T> {
    value: T,
    full_match: FullMatch<T>,
}

impl<T> Matching<T>
where
    T: Wrapped + Clone,
    T::Value: AsRef<str>,
{
    /// `initial` is held until the first matching write, even if it does not match itself.
    pub fn new(initial: T, pattern: &str) -> Result<Self, ConstraintError> {
        let full_match = FullMatch::new(pattern, initial.clone())?;
        Ok(Self {
            value: full_match.apply(initial),
            full_match,
        })
    }

    pub fn from_identity(pattern: &str) -> Result<Self, ConstraintError>
    where
        T: Identity,
    {
        Self::new(T::identity(), pattern)
    }

    /// Store `value` if it matches. Otherwise the held value stays.
    pub fn set(&mut self, value: T) {
        // Rejected values are dropped.
        let _ = self.replace(value);
    }

    /// Store `value` if it matches and return the value held before. A non-matching `value` is
    /// handed back as the error and nothing changes.
    pub fn replace(&mut self, value: T) -> Result<T, T> {
        if self.full_match.is_match(value.value().as_ref()) {
            Ok(std::mem::replace(&mut self.value, value))
        } else {
            trace!(
                "value does not match {}, keeping the current value",
                self.full_match.pattern
            );
            Err(value)
        }
    }
}

impl<T> Matching<T> {
    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }

    pub fn pattern(&self) -> &str {
        self.full_match.pattern()
    }

    /// The initial value, held until the first matching write.
    pub fn fallback(&self) -> &T {
        self.full_match.fallback()
    }
}

impl<T> Deref for Matching<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl<T: fmt::Debug> fmt::Debug for Matching<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matching")
            .field("value", &self.value)
            .field("pattern", &self.full_match.pattern)
            .field("fallback", &self.full_match.fallback)
            .finish()
    }
}

impl<T: PartialEq> PartialEq for Matching<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Serialize> Serialize for Matching<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Restrict;
    use crate::Tagged;

    enum Email {}
    type EmailAddress = Tagged<Email, String>;

    const EMAIL: &str = r"[A-Z0-9a-z._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,64}";

    #[test]
    fn matching_values_are_kept() {
        let mut email = Matching::<EmailAddress>::from_identity(EMAIL).unwrap();
        email.set(Tagged::from("test@test.com"));
        assert_eq!(email.get().as_str(), "test@test.com");
    }

    #[test]
    fn non_matching_writes_keep_the_last_match() {
        let mut email = Matching::<EmailAddress>::from_identity(EMAIL).unwrap();
        email.set(Tagged::from("test@test.com"));
        email.set(Tagged::from("test.com"));
        assert_eq!(email.get().as_str(), "test@test.com");
        assert_eq!(email.fallback().as_str(), "");
    }

    #[test]
    fn initial_value_is_held_until_a_match() {
        let mut email =
            Matching::<EmailAddress>::new(Tagged::from("nobody@example.com"), EMAIL).unwrap();
        email.set(Tagged::from("test.com"));
        assert_eq!(email.as_str(), "nobody@example.com");
        email.set(Tagged::from("a@b.io"));
        assert_eq!(email.as_str(), "a@b.io");
    }

    #[test]
    fn replace_reports_rejected_values() {
        let mut word = Matching::new(String::from("none"), "[a-z]+").unwrap();
        assert_eq!(word.replace("abc".to_string()), Ok("none".to_string()));
        assert_eq!(word.replace("abc1".to_string()), Err("abc1".to_string()));
        assert_eq!(word.into_inner(), "abc");
    }

    #[test]
    fn pattern_must_match_in_full() {
        let mut word = Matching::new(String::from("none"), "[a-z]+").unwrap();
        word.set("abc1".to_string());
        assert_eq!(word.as_str(), "none");
        word.set("1abc".to_string());
        assert_eq!(word.as_str(), "none");
        word.set("abc".to_string());
        assert_eq!(word.as_str(), "abc");
    }

    #[test]
    fn held_value_is_a_fixed_point_of_the_full_match() {
        let mut email = Matching::<EmailAddress>::from_identity(EMAIL).unwrap();
        let full_match = FullMatch::new(EMAIL, EmailAddress::default()).unwrap();
        assert_eq!(&full_match.apply(email.get().clone()), email.get());
        email.set(Tagged::from("test@test.com"));
        assert_eq!(&full_match.apply(email.get().clone()), email.get());
    }

    #[test]
    fn full_match_substitutes_its_fallback_inside_restrict() {
        let full_match = FullMatch::new("cm|m", String::from("m")).unwrap();
        let mut unit = Restrict::new(String::from("m"), full_match);
        unit.set("cm".to_string());
        assert_eq!(unit.as_str(), "cm");
        unit.set("xcm".to_string());
        assert_eq!(unit.as_str(), "m");
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        let err = Matching::new(String::new(), "(unclosed").unwrap_err();
        assert!(matches!(err, ConstraintError::InvalidPattern(_)));

        let err = Matching::new(String::new(), "a)|(b").unwrap_err();
        assert!(matches!(err, ConstraintError::InvalidPattern(_)));
    }

    #[test]
    fn pattern_is_reported() {
        let word = Matching::new(String::new(), "[a-z]*").unwrap();
        assert_eq!(word.pattern(), "[a-z]*");
        assert_eq!(
            format!("{word:?}"),
            "Matching { value: \"\", pattern: \"[a-z]*\", fallback: \"\" }"
        );
    }
}
