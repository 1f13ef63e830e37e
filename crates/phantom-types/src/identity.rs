//! Types with a canonical neutral value.
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::collections::HashMap;
use std::collections::HashSet;
use std::collections::VecDeque;
use std::hash::BuildHasher;

/// A type with a canonical "empty" value, such as `0`, `""` or `[]`.
///
/// Implementing it unlocks [`Tagged::default`](crate::Tagged) and the `from_identity`
/// constructors of the constrained wrappers, which start from this value instead of an explicit
/// initial one.
pub trait Identity {
    fn identity() -> Self;
}

macro_rules! impl_identity {
    ($value:expr => $($t:ty),+ $(,)?) => {
        $(
            impl Identity for $t {
                fn identity() -> Self {
                    $value
                }
            }
        )+
    };
}

impl_identity!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_identity!(0.0 => f32, f64);

impl Identity for String {
    fn identity() -> Self {
        String::new()
    }
}

impl<T> Identity for Vec<T> {
    fn identity() -> Self {
        Vec::new()
    }
}

impl<T> Identity for VecDeque<T> {
    fn identity() -> Self {
        VecDeque::new()
    }
}

impl<K, V, S: BuildHasher + Default> Identity for HashMap<K, V, S> {
    fn identity() -> Self {
        HashMap::with_hasher(S::default())
    }
}

impl<T, S: BuildHasher + Default> Identity for HashSet<T, S> {
    fn identity() -> Self {
        HashSet::with_hasher(S::default())
    }
}

impl<K, V> Identity for BTreeMap<K, V> {
    fn identity() -> Self {
        BTreeMap::new()
    }
}

impl<T> Identity for BTreeSet<T> {
    fn identity() -> Self {
        BTreeSet::new()
    }
}

/// `None` is the identity of every optional value.
impl<T> Identity for Option<T> {
    fn identity() -> Self {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_identity_is_zero() {
        assert_eq!(i32::identity(), 0);
        assert_eq!(u8::identity(), 0);
        assert_eq!(f64::identity(), 0.0);
    }

    #[test]
    fn collection_identity_is_empty() {
        assert!(String::identity().is_empty());
        assert!(Vec::<u8>::identity().is_empty());
        assert!(HashMap::<String, i32>::identity().is_empty());
        assert!(BTreeSet::<i32>::identity().is_empty());
        assert_eq!(Option::<String>::identity(), None);
    }
}
