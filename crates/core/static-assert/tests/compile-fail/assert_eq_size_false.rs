use hadron_static_assert::assert_eq_size;

assert_eq_size!(u64, u32, u64_must_match_u32);

fn main() {}
