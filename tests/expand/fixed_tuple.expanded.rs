use fixtuple::fixed_tuple;
fn main() {
    let mut time = ::fixtuple::FixedTuple::new((1, 42, 30));
    *time.get_mut::<1>() = 59;
    let (_h, _m, _s) = time.to_tuple();
}
