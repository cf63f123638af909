//! The three assertion forms.
//!
//! All of them panic inside a const context when the condition is false,
//! which rustc turns into a hard build error (E0080). A condition that is not
//! a constant expression is rejected before evaluation is even attempted.

/// Asserts a condition at compile time, as an item.
///
/// Usable at module scope and inside function bodies. Each use expands to an
/// unnamed `const _` item, so any number of them can share a scope.
///
/// The label is an identifier naming the invariant; a failure reports
/// `static assertion failed: <label>`. The label may be omitted, or replaced
/// with a message string, either a literal or a `concat!`.
///
/// # Examples
///
/// ```
/// use core::mem::offset_of;
/// use hadron_static_assert::static_assert;
///
/// #[repr(C)]
/// struct Foo {
///     string: *const u8,
///     size: i32,
/// }
///
/// static_assert!(offset_of!(Foo, string) == 0, string_should_be_first_member_of_foo);
/// static_assert!(core::mem::size_of::<u64>() == 8);
/// static_assert!(1 + 1 == 2, "math is broken");
/// ```
///
/// A false condition fails the build:
///
/// ```ignore
/// hadron_static_assert::static_assert!(1 + 1 == 3, math_is_broken);
/// ```
///
/// So does a condition that depends on a runtime value:
///
/// ```ignore
/// fn check(len: usize) {
///     hadron_static_assert::static_assert!(len > 0, len_must_be_positive);
/// }
/// ```
///
/// Generic parameters of the enclosing function are out of reach of an item;
/// use [`static_assert_zero!`](crate::static_assert_zero) there instead:
///
/// ```ignore
/// fn check<T>() {
///     hadron_static_assert::static_assert!(
///         core::mem::size_of::<T>() == 8,
///         t_must_be_eight_bytes
///     );
/// }
/// ```
#[macro_export]
macro_rules! static_assert {
    ($cond:expr $(,)?) => {
        const _: () = ::core::assert!($cond);
    };
    ($cond:expr, $label:ident $(,)?) => {
        const _: () = ::core::assert!(
            $cond,
            ::core::concat!("static assertion failed: ", ::core::stringify!($label))
        );
    };
    ($cond:expr, $msg:expr $(,)?) => {
        const _: () = ::core::assert!($cond, $msg);
    };
}

/// Asserts a condition at compile time, as a type.
///
/// Expands to [`Assertion<0>`](crate::Assertion), a zero-sized type, when the
/// condition holds. The check runs whenever rustc checks the type: struct
/// fields and `const`/`static` item types always trigger it. A type alias is
/// only checked where the alias is used.
///
/// # Examples
///
/// ```
/// use core::mem::offset_of;
/// use hadron_static_assert::static_assert_type;
///
/// #[repr(C)]
/// struct Foo {
///     string: *const u8,
///     size: i32,
/// }
///
/// type FooLayout = static_assert_type!(
///     offset_of!(Foo, string) == 0,
///     string_should_be_first_member_of_foo
/// );
///
/// struct Header {
///     _layout: FooLayout,
///     len: u32,
/// }
///
/// assert_eq!(core::mem::size_of::<Header>(), 4);
/// ```
///
/// ```ignore
/// struct Header {
///     _layout: hadron_static_assert::static_assert_type!(
///         core::mem::size_of::<u16>() == 4,
///         u16_must_be_four_bytes
///     ),
/// }
///
/// let _ = core::mem::size_of::<Header>();
/// ```
#[macro_export]
macro_rules! static_assert_type {
    ($cond:expr, $label:ident $(,)?) => {
        $crate::Assertion<{
            ::core::assert!(
                $cond,
                ::core::concat!("static assertion failed: ", ::core::stringify!($label))
            );
            0
        }>
    };
}

/// Asserts a condition at compile time, as an expression worth `0`.
///
/// Expands to an inline `const` block, so it can sit inside a larger
/// expression without changing its value. The `0` takes whatever integer type
/// the surrounding expression needs.
///
/// Unlike the other forms, the condition may name generic parameters of the
/// enclosing function; it is then checked once per instantiation.
///
/// # Examples
///
/// ```
/// use core::mem::offset_of;
/// use hadron_static_assert::static_assert_zero;
///
/// #[repr(C)]
/// struct Foo {
///     string: *const u8,
///     size: i32,
/// }
///
/// fn foo_to_string(foo: *const Foo) -> *const *const u8 {
///     foo.cast::<*const u8>().wrapping_add(static_assert_zero!(
///         offset_of!(Foo, string) == 0,
///         string_should_be_first_member_of_foo
///     ))
/// }
///
/// const ONE: i32 = 1 + static_assert_zero!(1 == 1, trivially_true);
/// assert_eq!(ONE, 1);
/// ```
///
/// ```ignore
/// const ONE: i32 = 1 + hadron_static_assert::static_assert_zero!(1 == 2, never_true);
/// ```
#[macro_export]
macro_rules! static_assert_zero {
    ($cond:expr, $label:ident $(,)?) => {
        const {
            ::core::assert!(
                $cond,
                ::core::concat!("static assertion failed: ", ::core::stringify!($label))
            );
            0
        }
    };
}
