use hadron_static_assert::static_assert;

static_assert!(1 + 1 == 3, math_must_hold);

fn main() {}
