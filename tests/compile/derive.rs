#![allow(dead_code)]
use fixtuple::Slots;

#[derive(Clone, Copy, Debug, PartialEq, Slots)]
pub struct Time(pub i32, pub i32, pub i32);

#[derive(Clone, Debug, PartialEq, Slots)]
pub struct Person {
    pub name: String,
    pub age: u8,
    pub height: f64,
}

#[derive(Debug, PartialEq, Slots)]
pub struct Labelled<'a, T>
where
    T: Clone,
{
    pub label: &'a str,
    pub value: T,
}

#[derive(Debug, Default, PartialEq, Slots)]
pub struct Empty;

// Slot types without `Display` still derive.
#[derive(Debug, PartialEq, Slots)]
pub struct Bytes(pub Vec<u8>, pub Option<char>);
