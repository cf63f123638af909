use hadron_static_assert::assert_eq_align;

assert_eq_align!(u8, u32, u8_must_align_like_u32);

fn main() {}
