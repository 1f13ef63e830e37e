//! Access to the value a wrapper carries.
//!
//! The constrained wrappers only care about the underlying value (a number to clamp, a sequence
//! to truncate), not about the context it is tagged with. [`Wrapped`] is the seam that lets them
//! work on a [`Tagged`](crate::Tagged) value and on a bare value alike.
use std::collections::VecDeque;

pub trait Wrapped: Sized {
    type Value;

    fn value(&self) -> &Self::Value;

    fn into_value(self) -> Self::Value;

    fn from_value(value: Self::Value) -> Self;

    /// Rebuild `self` from a transformed copy of its value.
    fn map_value(self, f: impl FnOnce(Self::Value) -> Self::Value) -> Self {
        Self::from_value(f(self.into_value()))
    }
}

/// Bare values wrap themselves. Generic types list their parameter first: `<T> Vec<T>`.
macro_rules! impl_wrapped_self {
    (@impl [$($g:ident)?] $t:ty) => {
        impl<$($g)?> Wrapped for $t {
            type Value = Self;

            fn value(&self) -> &Self {
                self
            }

            fn into_value(self) -> Self {
                self
            }

            fn from_value(value: Self) -> Self {
                value
            }
        }
    };
    (<$g:ident> $($t:ty),+ $(,)?) => {
        $(impl_wrapped_self!(@impl [$g] $t);)+
    };
    ($($t:ty),+ $(,)?) => {
        $(impl_wrapped_self!(@impl [] $t);)+
    };
}

impl_wrapped_self!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, String,
);
impl_wrapped_self!(<T> Vec<T>, VecDeque<T>);
