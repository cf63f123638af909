use hadron_static_assert::static_assert_type;

#[allow(dead_code)]
struct Header {
    _layout: static_assert_type!(2 + 2 == 5, header_layout_must_hold),
}

fn main() {}
