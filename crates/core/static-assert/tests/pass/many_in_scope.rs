use core::mem::size_of;

use hadron_static_assert::{assert_eq_size, static_assert, static_assert_zero};

static_assert!(1 == 1, a_must_be_true);
static_assert!(2 > 1, b_must_be_true);
static_assert!(size_of::<u32>() == 4, c_must_be_true);
assert_eq_size!(u64, [u8; 8], d_must_be_true);

mod nested {
    hadron_static_assert::static_assert!(true, a_must_be_true);
    hadron_static_assert::static_assert!(true, b_must_be_true);
}

const ONE: i32 = 1 + static_assert_zero!(1 == 1, trivially_true);

fn checked_len<T>(items: &[T]) -> usize {
    items.len() + static_assert_zero!(size_of::<T>() != 0, t_must_not_be_zero_sized)
}

fn main() {
    static_assert!(size_of::<u16>() == 2, a_must_be_true);
    static_assert!(size_of::<u8>() == 1, b_must_be_true);

    assert_eq!(ONE, 1);
    assert_eq!(checked_len(&[1u32, 2, 3]), 3);
    assert_eq!(checked_len(&["a", "b"]), 2);
}
