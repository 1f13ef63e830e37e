//! # Phantom Types
//! Give values with the same representation different types, and keep values within a contract
//! no matter how often they are written.
//!
//! [`Tagged`] pairs a value with a compile-time context. A `Tagged<Age, u32>` can not be used
//! where a `Tagged<UserId, u32>` is expected, yet it costs nothing at runtime and behaves like the
//! `u32` it wraps: it compares, hashes, parses, iterates and serializes exactly like it.
//!
//! [`Restrict`] holds a value that is passed through a transform on every write, including the
//! first. [`WithinRange`], [`Truncated`] and [`Matching`] are ready-made restrictions for ranges,
//! lengths and patterns.
//! # Quickstart
//! ```
//! use phantom_types::Tagged;
//! use phantom_types::WithinRange;
//!
//! enum Age {}
//! type Years = Tagged<Age, u8>;
//!
//! let mut age = WithinRange::<Years>::from_identity(18..=100).unwrap();
//! age.set(Years::new(17));
//! assert_eq!(**age.get(), 18);
//! ```
mod constraint_error;
mod emptiness;
mod identity;
mod matching;
mod restrict;
mod tagged;
mod tagged_iter;
mod transform;
mod truncated;
mod within_range;
mod wrapped;
pub use constraint_error::ConstraintError;
pub use emptiness::Emptiness;
pub use identity::Identity;
pub use matching::FullMatch;
pub use matching::Matching;
pub use restrict::BoxedRestrict;
pub use restrict::Restrict;
pub use tagged::Tagged;
pub use transform::Transform;
pub use truncated::TakePrefix;
pub use truncated::Truncate;
pub use truncated::Truncated;
pub use within_range::Clamp;
pub use within_range::WithinRange;
pub use wrapped::Wrapped;

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_eq_size;
    use static_assertions::assert_impl_all;
    use static_assertions::assert_not_impl_any;
    use std::rc::Rc;

    enum Age {}
    enum UserId {}
    #[allow(dead_code)]
    struct NotSend(Rc<()>);

    assert_eq_size!(Tagged<Age, u64>, u64);
    assert_eq_size!(Tagged<Age, String>, String);
    assert_eq_size!(Tagged<Age, Option<Box<u8>>>, Option<Box<u8>>);

    // The context never affects auto traits.
    assert_impl_all!(Tagged<NotSend, u32>: Send, Sync, Unpin);
    assert_not_impl_any!(Tagged<Age, Rc<u32>>: Send, Sync);

    // Contexts do not convert into each other, and tagged values do not turn back into raw
    // values implicitly.
    assert_not_impl_any!(Tagged<Age, u32>: From<Tagged<UserId, u32>>, Into<Tagged<UserId, u32>>);
    assert_not_impl_any!(Tagged<Age, u32>: PartialEq<u32>, PartialEq<Tagged<UserId, u32>>);
    assert_not_impl_any!(Tagged<Age, u32>: std::ops::DerefMut);
}
