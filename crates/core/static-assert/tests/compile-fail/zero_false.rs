use hadron_static_assert::static_assert_zero;

fn main() {
    let one = 1 + static_assert_zero!(1 == 2, zero_must_hold);
    assert_eq!(one, 1);
}
