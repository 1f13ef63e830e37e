/// A total, pure normalization of a value.
///
/// A transform is applied by [`Restrict`](crate::Restrict) at construction and on every write.
/// It must be defined for every input and must not have side effects. It is expected to be
/// idempotent, since the value it returns is what the wrapper holds from then on.
///
/// Any `Fn(T) -> T` closure is a transform. The named transforms of this crate ([`Clamp`],
/// [`TakePrefix`], [`FullMatch`]) exist so the specialized wrappers have nameable, cloneable
/// types.
///
/// [`Clamp`]: crate::Clamp
/// [`TakePrefix`]: crate::TakePrefix
/// [`FullMatch`]: crate::FullMatch
pub trait Transform<T> {
    fn apply(&self, value: T) -> T;
}

impl<T, F> Transform<T> for F
where
    F: Fn(T) -> T,
{
    fn apply(&self, value: T) -> T {
        self(value)
    }
}
