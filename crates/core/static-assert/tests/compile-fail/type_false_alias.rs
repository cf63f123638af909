use hadron_static_assert::{Assertion, static_assert_type};

type Layout = static_assert_type!(1 == 2, alias_layout_must_hold);

static LAYOUT: Layout = Assertion;

fn main() {
    let _ = LAYOUT;
}
