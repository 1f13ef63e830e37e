//! Types that can report whether they hold anything.
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::collections::HashMap;
use std::collections::HashSet;
use std::collections::VecDeque;

pub trait Emptiness {
    fn is_empty(&self) -> bool;
}

impl Emptiness for str {
    fn is_empty(&self) -> bool {
        str::is_empty(self)
    }
}

impl Emptiness for String {
    fn is_empty(&self) -> bool {
        String::is_empty(self)
    }
}

impl<T> Emptiness for [T] {
    fn is_empty(&self) -> bool {
        <[T]>::is_empty(self)
    }
}

impl<T> Emptiness for Vec<T> {
    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }
}

impl<T> Emptiness for VecDeque<T> {
    fn is_empty(&self) -> bool {
        VecDeque::is_empty(self)
    }
}

impl<K, V, S> Emptiness for HashMap<K, V, S> {
    fn is_empty(&self) -> bool {
        HashMap::is_empty(self)
    }
}

impl<T, S> Emptiness for HashSet<T, S> {
    fn is_empty(&self) -> bool {
        HashSet::is_empty(self)
    }
}

impl<K, V> Emptiness for BTreeMap<K, V> {
    fn is_empty(&self) -> bool {
        BTreeMap::is_empty(self)
    }
}

impl<T> Emptiness for BTreeSet<T> {
    fn is_empty(&self) -> bool {
        BTreeSet::is_empty(self)
    }
}

/// An optional value is empty when it is `None`.
impl<T> Emptiness for Option<T> {
    fn is_empty(&self) -> bool {
        self.is_none()
    }
}

impl<T: Emptiness + ?Sized> Emptiness for &T {
    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty<T: Emptiness + ?Sized>(value: &T) -> bool {
        value.is_empty()
    }

    #[test]
    fn strings_and_sequences() {
        assert!(empty(""));
        assert!(!empty(&String::from("a")));
        assert!(empty(&Vec::<u8>::new()));
        assert!(!empty(&[1, 2, 3][..]));
    }

    #[test]
    fn none_is_empty() {
        assert!(empty(&None::<i32>));
        assert!(!empty(&Some(0)));
    }
}
