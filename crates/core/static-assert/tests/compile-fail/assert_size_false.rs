use hadron_static_assert::assert_size;

assert_size!(u16, 4, u16_must_be_four_bytes);

fn main() {}
