//! A value that is normalized on every write.
use crate::Identity;
use crate::Transform;
use serde::Serialize;
use std::fmt;
use std::ops::Deref;

/// Holds a `T` that is always a fixed point of its transform.
///
/// The transform runs before the value is stored, both at construction and on every
/// [`set`](Restrict::set), so there is no moment where the wrapper holds a value the transform
/// would still change. There is no way to write around the transform and no way to swap it out
/// after construction.
///
/// ```
/// use phantom_types::Restrict;
///
/// let mut even = Restrict::new(3, |x: i32| x - x % 2);
/// assert_eq!(*even.get(), 2);
/// even.set(11);
/// assert_eq!(*even.get(), 10);
/// ```
#[derive(Clone)]
pub struct Restrict<T, F> {
    value: T,
    transform: F,
}

/// A [`Restrict`] whose transform is a boxed closure, for when the type must be named.
pub type BoxedRestrict<T> = Restrict<T, Box<dyn Fn(T) -> T>>;

impl<T, F: Transform<T>> Restrict<T, F> {
    pub fn new(initial: T, transform: F) -> Self {
        let value = transform.apply(initial);
        Self { value, transform }
    }

    /// Start from `T`'s identity value, normalized like any other initial value.
    pub fn from_identity(transform: F) -> Self
    where
        T: Identity,
    {
        Self::new(T::identity(), transform)
    }

    pub fn set(&mut self, value: T) {
        self.value = self.transform.apply(value);
    }

    /// Normalize and store `value`, returning the value held before.
    pub fn replace(&mut self, value: T) -> T {
        let value = self.transform.apply(value);
        std::mem::replace(&mut self.value, value)
    }
}

impl<T, F> Restrict<T, F> {
    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }

    pub fn transform(&self) -> &F {
        &self.transform
    }
}

impl<T, F> Deref for Restrict<T, F> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Restrict<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Restrict")
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

/// Two restricted values are equal when they hold equal values, whatever their transforms.
impl<T: PartialEq, F, G> PartialEq<Restrict<T, G>> for Restrict<T, F> {
    fn eq(&self, other: &Restrict<T, G>) -> bool {
        self.value == other.value
    }
}

/// Serializes the held value only. The transform is configuration, not data.
impl<T: Serialize, F> Serialize for Restrict<T, F> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}
