use fixtuple::Slots;

#[derive(Slots)]
struct Meters(f64);

#[derive(Slots)]
struct Label<'a> {
    text: &'a str,
}
