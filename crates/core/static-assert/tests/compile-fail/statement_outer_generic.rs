use hadron_static_assert::static_assert;

fn check<T>() {
    static_assert!(core::mem::size_of::<T>() == 8, t_must_be_eight_bytes);
}

fn main() {
    check::<u64>();
}
