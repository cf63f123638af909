//! The marker type produced by the type form.

/// Zero-sized type produced by [`static_assert_type!`](crate::static_assert_type).
///
/// `ZERO` is the value of the const block that performs the check. It can only
/// be `0`; a failing check never produces a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Assertion<const ZERO: usize>;

impl<const ZERO: usize> Assertion<ZERO> {
    /// Returns the value of the const argument, always `0`.
    #[must_use]
    pub const fn value(self) -> usize {
        ZERO
    }
}
