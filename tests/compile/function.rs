use std::mem;

use fixtuple::{FixedTuple, Slot, Tuple, TupleFrom};

pub fn arity_of<T: Tuple>(_: &T) -> usize {
    T::ARITY
}

pub fn first<T: Slot<0>>(t: &T) -> &T::Value {
    t.slot()
}

pub fn third<T: Slot<2>>(t: T) -> T::Value {
    t.into_slot()
}

// Swap the first two slots of any tuple where they share a type.
pub fn swap_front<T>(t: &mut T)
where
    T: Slot<0> + Slot<1, Value = <T as Slot<0>>::Value>,
    <T as Slot<0>>::Value: Clone,
{
    let front = <T as Slot<0>>::slot(t).clone();
    let second = mem::replace(<T as Slot<1>>::slot_mut(t), front);
    *<T as Slot<0>>::slot_mut(t) = second;
}

pub fn build<T, U>(values: U) -> FixedTuple<T>
where
    T: TupleFrom<U>,
{
    FixedTuple::from_values(values)
}
