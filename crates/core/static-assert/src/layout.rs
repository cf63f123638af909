//! Size, alignment and field-offset assertions.
//!
//! These expand to [`static_assert!`](crate::static_assert) items and share
//! its diagnostics: a failure reports `static assertion failed: <label>`.

/// Asserts that two types have the same size.
///
/// ```
/// hadron_static_assert::assert_eq_size!(u64, [u32; 2], u64_must_match_two_words);
/// ```
///
/// ```ignore
/// hadron_static_assert::assert_eq_size!(u64, u32, u64_must_match_u32);
/// ```
#[macro_export]
macro_rules! assert_eq_size {
    ($a:ty, $b:ty, $label:ident $(,)?) => {
        $crate::static_assert!(
            ::core::mem::size_of::<$a>() == ::core::mem::size_of::<$b>(),
            $label
        );
    };
}

/// Asserts that two types have the same alignment.
///
/// ```
/// hadron_static_assert::assert_eq_align!(u32, [u32; 4], array_keeps_element_align);
/// ```
///
/// ```ignore
/// hadron_static_assert::assert_eq_align!(u8, u32, u8_must_align_like_u32);
/// ```
#[macro_export]
macro_rules! assert_eq_align {
    ($a:ty, $b:ty, $label:ident $(,)?) => {
        $crate::static_assert!(
            ::core::mem::align_of::<$a>() == ::core::mem::align_of::<$b>(),
            $label
        );
    };
}

/// Asserts that a type is exactly `size` bytes.
///
/// ```
/// hadron_static_assert::assert_size!(u16, 2, u16_is_two_bytes);
/// ```
///
/// ```ignore
/// hadron_static_assert::assert_size!(u16, 4, u16_is_four_bytes);
/// ```
#[macro_export]
macro_rules! assert_size {
    ($t:ty, $size:expr, $label:ident $(,)?) => {
        $crate::static_assert!(::core::mem::size_of::<$t>() == $size, $label);
    };
}

/// Asserts that `field` sits at byte `offset` within `T`.
///
/// ```
/// #[repr(C)]
/// struct Foo {
///     string: *const u8,
///     size: i32,
/// }
///
/// hadron_static_assert::assert_field_offset!(Foo, string, 0, string_should_be_first_member_of_foo);
/// ```
///
/// ```ignore
/// #[repr(C)]
/// struct Foo {
///     string: *const u8,
///     size: i32,
/// }
///
/// hadron_static_assert::assert_field_offset!(Foo, size, 0, size_should_be_first_member_of_foo);
/// ```
#[macro_export]
macro_rules! assert_field_offset {
    ($t:ty, $field:ident, $offset:expr, $label:ident $(,)?) => {
        $crate::static_assert!(::core::mem::offset_of!($t, $field) == $offset, $label);
    };
}
