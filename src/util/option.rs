use std::hint;

pub(crate) trait OptionExtension<T> {
    unsafe fn unreachable(self) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    /// Like [`Option::unwrap`], except the none branch is [`unreachable!`] in dev builds and
    /// [`unreachable_unchecked`](hint::unreachable_unchecked) in release builds.
    ///
    /// Calling this asserts that None is impossible; each use site carries a comment explaining
    /// why that holds.
    unsafe fn unreachable(self) -> T {
        match self {
            Some(val) => val,
            None if cfg!(debug_assertions) => unreachable!(),
            // SAFETY: The caller guarantees that None is impossible here.
            None => unsafe { hint::unreachable_unchecked() },
        }
    }
}
