//! Tag any value with a compile-time context.
use crate::Emptiness;
use crate::Identity;
use crate::Wrapped;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::hash::Hasher;
use std::marker::PhantomData;
use std::ops::Deref;
use std::str::FromStr;

/// A value of type `V` tagged with the context `C`.
///
/// `C` only exists at the type level. It is usually an uninhabited enum and never needs to
/// implement anything. Every capability of the wrapper (comparison, hashing, serialization,
/// iteration, parsing) is taken from `V` alone.
///
/// `Tagged<Age, u32>` and `Tagged<UserId, u32>` share a representation but are different types,
/// so one can not be passed where the other is expected:
///
/// ```compile_fail
/// use phantom_types::Tagged;
///
/// enum Age {}
/// enum UserId {}
///
/// fn lookup(id: Tagged<UserId, u32>) -> u32 {
///     id.into_inner()
/// }
///
/// let age: Tagged<Age, u32> = Tagged::new(42);
/// lookup(age);
/// ```
///
/// The wrapper is read-only from the outside. Everything `V` offers through `&self` is reachable
/// on the wrapper, but the value can only be changed by replacing it as a whole:
///
/// ```compile_fail
/// use phantom_types::Tagged;
///
/// enum Names {}
///
/// let mut names: Tagged<Names, Vec<String>> = Tagged::new(Vec::new());
/// names.push(String::from("alice"));
/// ```
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
#[serde(bound(serialize = "V: serde::Serialize", deserialize = "V: serde::Deserialize<'de>"))]
pub struct Tagged<C, V> {
    value: V,
    context: PhantomData<fn() -> C>,
}

impl<C, V> Tagged<C, V> {
    pub const fn new(value: V) -> Self {
        Self {
            value,
            context: PhantomData,
        }
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn into_inner(self) -> V {
        self.value
    }

    pub fn set(&mut self, value: V) {
        self.value = value;
    }

    /// Replace the wrapped value, returning the previous one.
    pub fn replace(&mut self, value: V) -> V {
        std::mem::replace(&mut self.value, value)
    }

    /// Transform the wrapped value while keeping the context.
    pub fn map<U>(self, f: impl FnOnce(V) -> U) -> Tagged<C, U> {
        Tagged::new(f(self.value))
    }

    /// Move the value to another context. This is the only way to turn a `Tagged<C, V>` into a
    /// `Tagged<D, V>`, and it has to be spelled out.
    pub fn retag<D>(self) -> Tagged<D, V> {
        Tagged::new(self.value)
    }

    /// Create a tagged value through `V`'s own fallible conversion. The error is exactly the
    /// one `V::try_from` returns.
    pub fn try_from_value<U>(value: U) -> Result<Self, V::Error>
    where
        V: TryFrom<U>,
    {
        V::try_from(value).map(Self::new)
    }

    /// The name of the context type without its module path.
    pub fn context_name() -> &'static str {
        short_type_name(std::any::type_name::<C>())
    }
}

fn short_type_name(full: &'static str) -> &'static str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

impl<C, V> From<V> for Tagged<C, V> {
    fn from(value: V) -> Self {
        Self::new(value)
    }
}

impl<C> From<&str> for Tagged<C, String> {
    fn from(value: &str) -> Self {
        Self::new(value.to_owned())
    }
}

/// Parses exactly like `V` does, failing with `V`'s own error.
impl<C, V: FromStr> FromStr for Tagged<C, V> {
    type Err = V::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self::new)
    }
}

impl<C, V> Deref for Tagged<C, V> {
    type Target = V;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl<C, V> AsRef<V> for Tagged<C, V> {
    fn as_ref(&self) -> &V {
        &self.value
    }
}

impl<C, V> Borrow<V> for Tagged<C, V> {
    fn borrow(&self) -> &V {
        &self.value
    }
}

impl<C, V> Wrapped for Tagged<C, V> {
    type Value = V;

    fn value(&self) -> &V {
        &self.value
    }

    fn into_value(self) -> V {
        self.value
    }

    fn from_value(value: V) -> Self {
        Self::new(value)
    }
}

impl<C, V: Identity> Identity for Tagged<C, V> {
    fn identity() -> Self {
        Self::new(V::identity())
    }
}

impl<C, V: Identity> Default for Tagged<C, V> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<C, V: Emptiness> Emptiness for Tagged<C, V> {
    fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl<C, V: Copy> Copy for Tagged<C, V> {}

impl<C, V: Clone> Clone for Tagged<C, V> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<C, V: PartialEq> PartialEq for Tagged<C, V> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<C, V: Eq> Eq for Tagged<C, V> {}

impl<C, V: PartialOrd> PartialOrd for Tagged<C, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<C, V: Ord> Ord for Tagged<C, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<C, V: Hash> Hash for Tagged<C, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

/// Renders the context name around the quoted display form of the value, e.g. `Name("alice")`
/// or `Age("42")`. The value is not escaped.
impl<C, V: fmt::Display> fmt::Debug for Tagged<C, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(\"{}\")", Self::context_name(), self.value)
    }
}

impl<C, V: fmt::Display> fmt::Display for Tagged<C, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}
