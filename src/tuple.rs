use core::fmt;

/// A fixed number of heterogeneously typed slots.
///
/// Implemented for native tuples up to 12 elements, and for any struct with
/// `#[derive(Slots)]`, where the fields are the slots in declaration order.
pub trait Tuple: Sized {
    /// Number of slots.
    const ARITY: usize;

    /// The native tuple holding the same slots. `Self` for native tuples.
    type Native;

    /// `(&T0, &T1, ..)`
    type Refs<'a>
    where
        Self: 'a;

    /// `(&mut T0, &mut T1, ..)`
    type Muts<'a>
    where
        Self: 'a;

    fn into_native(self) -> Self::Native;

    fn from_native(native: Self::Native) -> Self;

    /// Borrow every slot at once.
    fn as_refs(&self) -> Self::Refs<'_>;

    /// Mutably borrow every slot at once.
    fn as_muts(&mut self) -> Self::Muts<'_>;
}

/// The slot at position `I`.
///
/// Only implemented for `I < Self::ARITY`, so an out-of-range position is a
/// build error rather than a runtime one.
pub trait Slot<const I: usize>: Tuple {
    type Value;

    fn slot(&self) -> &Self::Value;

    fn slot_mut(&mut self) -> &mut Self::Value;

    fn into_slot(self) -> Self::Value;
}

/// Slot-wise conversion from a native tuple of the same arity, where each value
/// converts into the matching slot type with `Into`.
///
/// There is no impl between tuples of different arities, so passing too few or
/// too many values does not compile.
pub trait TupleFrom<U>: Tuple {
    fn tuple_from(values: U) -> Self;
}

/// Formats a tuple as `(a, b, c)` using each slot's `Display`.
pub trait DisplaySlots {
    fn fmt_slots(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

fixtuple_macros::impl_tuples!(0..=12);
