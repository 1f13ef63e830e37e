//! Keep a numeric value inside a closed range.
use crate::ConstraintError;
use crate::Identity;
use crate::Restrict;
use crate::Transform;
use crate::Wrapped;
use log::trace;
use serde::Serialize;
use std::cmp::Ordering;
use std::ops::Deref;
use std::ops::RangeInclusive;

/// Clamps a value into `lower..=upper`.
///
/// Values below `lower` become `lower`, values above `upper` become `upper`. A value that can not
/// be compared with the bounds at all (a float NaN) becomes `lower`, so the result is always a
/// fixed point.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Clamp<V> {
    lower: V,
    upper: V,
}

impl<V: PartialOrd> Clamp<V> {
    /// Fails when the range is empty or its bounds can not be compared. The bounds are never
    /// swapped.
    pub fn new(range: RangeInclusive<V>) -> Result<Self, ConstraintError> {
        let (lower, upper) = range.into_inner();
        match lower.partial_cmp(&upper) {
            Some(Ordering::Less | Ordering::Equal) => Ok(Self { lower, upper }),
            _ => Err(ConstraintError::InvertedRange),
        }
    }

    pub fn lower(&self) -> &V {
        &self.lower
    }

    pub fn upper(&self) -> &V {
        &self.upper
    }
}

impl<T, V> Transform<T> for Clamp<V>
where
    T: Wrapped<Value = V>,
    V: PartialOrd + Clone,
{
    fn apply(&self, value: T) -> T {
        value.map_value(|v| match v.partial_cmp(&self.lower) {
            Some(Ordering::Less) | None => {
                trace!("value below lower bound or not comparable, clamping to lower bound");
                self.lower.clone()
            }
            _ if v > self.upper => {
                trace!("value above upper bound, clamping to upper bound");
                self.upper.clone()
            }
            _ => v,
        })
    }
}

/// A [`Restrict`] that keeps its value inside a closed range.
///
/// ```
/// use phantom_types::Tagged;
/// use phantom_types::WithinRange;
///
/// enum Age {}
///
/// let mut age = WithinRange::new(Tagged::<Age, u8>::new(5), 18..=100).unwrap();
/// assert_eq!(**age.get(), 18);
/// age.set(Tagged::new(101));
/// assert_eq!(**age.get(), 100);
/// ```
#[derive(Clone)]
pub struct WithinRange<T: Wrapped> {
    restriction: Restrict<T, Clamp<T::Value>>,
}

impl<T> WithinRange<T>
where
    T: Wrapped,
    T::Value: PartialOrd + Clone,
{
    pub fn new(initial: T, range: RangeInclusive<T::Value>) -> Result<Self, ConstraintError> {
        let clamp = Clamp::new(range)?;
        Ok(Self {
            restriction: Restrict::new(initial, clamp),
        })
    }

    pub fn from_identity(range: RangeInclusive<T::Value>) -> Result<Self, ConstraintError>
    where
        T: Identity,
    {
        Self::new(T::identity(), range)
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

    pub fn lower(&self) -> &T::Value {
        self.restriction.transform().lower()
    }

    pub fn upper(&self) -> &T::Value {
        self.restriction.transform().upper()
    }
}

impl<T: Wrapped> Deref for WithinRange<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.restriction
    }
}

impl<T> std::fmt::Debug for WithinRange<T>
where
    T: Wrapped + std::fmt::Debug,
    T::Value: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let clamp = self.restriction.transform();
        f.debug_struct("WithinRange")
            .field("value", self.restriction.get())
            .field("lower", &clamp.lower)
            .field("upper", &clamp.upper)
            .finish()
    }
}

impl<T: Wrapped + PartialEq> PartialEq for WithinRange<T> {
    fn eq(&self, other: &Self) -> bool {
        self.restriction == other.restriction
    }
}

impl<T: Wrapped + Serialize> Serialize for WithinRange<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.restriction.serialize(serializer)
    }
}
