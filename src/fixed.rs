use core::fmt;
use core::mem;

use crate::tuple::{DisplaySlots, Slot, Tuple, TupleFrom};

/// A value holding a fixed number of heterogeneously typed slots.
///
/// `FixedTuple` is a transparent wrapper, so it is stored inline exactly like
/// the tuple it holds. It is `Copy`, `Eq`, `Ord`, `Hash` or `Default` exactly
/// when the wrapped tuple is, comparing slot by slot.
///
/// Slots are addressed with a const generic position. The position is checked
/// against the arity when the program is built:
///
/// ```rust
/// use fixtuple::FixedTuple;
///
/// let mut time = FixedTuple::new((1, 42, 30));
/// *time.get_mut::<1>() = 59;
/// assert_eq!(*time.get::<0>(), 1);
/// assert_eq!(*time.get::<1>(), 59);
/// assert_eq!(*time.get::<2>(), 30);
/// ```
///
/// Constructing from the wrong number of values is rejected in the same way:
///
/// ```compile_fail
/// use fixtuple::FixedTuple;
///
/// let time = FixedTuple::<(i32, i32, i32)>::from_values((1, 42));
/// ```
///
/// ```compile_fail
/// use fixtuple::FixedTuple;
///
/// let time = FixedTuple::<(i32, i32, i32)>::from_values((1, 42, 30, 0));
/// ```
///
/// So is a value that does not convert into its slot type:
///
/// ```compile_fail
/// use fixtuple::FixedTuple;
///
/// let time = FixedTuple::<(i32, i32, i32)>::from_values(("one", 42, 30));
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct FixedTuple<T>(T);

impl<T: Tuple> FixedTuple<T> {
    /// Number of slots.
    pub const ARITY: usize = T::ARITY;

    /// Wrap an already typed tuple.
    #[inline]
    pub const fn new(values: T) -> Self {
        FixedTuple(values)
    }

    /// Construct with the slot types stated up front, converting each value
    /// into its slot type.
    ///
    /// ```rust
    /// use fixtuple::FixedTuple;
    ///
    /// let person = FixedTuple::<(String, u32, f64)>::from_values(("Pwatpwat", 22u8, 8.2f32));
    /// assert_eq!(person.get::<0>(), "Pwatpwat");
    /// ```
    #[inline]
    pub fn from_values<U>(values: U) -> Self
    where
        T: TupleFrom<U>,
    {
        FixedTuple(T::tuple_from(values))
    }

    #[inline]
    pub fn arity(&self) -> usize {
        T::ARITY
    }

    /// Borrow the slot at position `I`.
    #[inline]
    pub fn get<const I: usize>(&self) -> &<T as Slot<I>>::Value
    where
        T: Slot<I>,
    {
        <T as Slot<I>>::slot(&self.0)
    }

    /// Mutably borrow the slot at position `I`. Assigning through the reference
    /// changes only that slot.
    #[inline]
    pub fn get_mut<const I: usize>(&mut self) -> &mut <T as Slot<I>>::Value
    where
        T: Slot<I>,
    {
        <T as Slot<I>>::slot_mut(&mut self.0)
    }

    /// Replace the slot at position `I`, returning the previous value.
    ///
    /// ```rust
    /// let mut time = fixtuple::fixed_tuple!(1u32, 42u32, 30u32);
    /// assert_eq!(time.set::<1>(59u8), 42);
    /// assert_eq!(time.into_inner(), (1, 59, 30));
    /// ```
    #[inline]
    pub fn set<const I: usize>(
        &mut self,
        value: impl Into<<T as Slot<I>>::Value>,
    ) -> <T as Slot<I>>::Value
    where
        T: Slot<I>,
    {
        mem::replace(self.get_mut::<I>(), value.into())
    }

    /// Move the slot at position `I` out, dropping the others.
    #[inline]
    pub fn into_slot<const I: usize>(self) -> <T as Slot<I>>::Value
    where
        T: Slot<I>,
    {
        <T as Slot<I>>::into_slot(self.0)
    }

    #[inline]
    pub fn as_inner(&self) -> &T {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }

    /// Consume the tuple for destructuring.
    #[inline]
    pub fn into_tuple(self) -> T::Native {
        self.0.into_native()
    }

    /// Copy the slots out for destructuring, leaving `self` usable.
    ///
    /// ```rust
    /// let time = fixtuple::fixed_tuple!(1, 59, 30);
    /// let (h, m, s) = time.to_tuple();
    /// assert_eq!((h, m, s), (1, 59, 30));
    /// assert_eq!(*time.get::<1>(), 59);
    /// ```
    ///
    /// The pattern must name every slot:
    ///
    /// ```compile_fail
    /// let time = fixtuple::fixed_tuple!(1, 59, 30);
    /// let (h, m) = time.to_tuple();
    /// ```
    ///
    /// ```compile_fail
    /// let time = fixtuple::fixed_tuple!(1, 59, 30);
    /// let (h, m, s, extra) = time.to_tuple();
    /// ```
    #[inline]
    pub fn to_tuple(&self) -> T::Native
    where
        T: Clone,
    {
        self.0.clone().into_native()
    }

    /// Borrow every slot for destructuring into references.
    #[inline]
    pub fn as_refs(&self) -> T::Refs<'_> {
        self.0.as_refs()
    }

    /// Mutably borrow every slot for destructuring into references.
    ///
    /// ```rust
    /// let mut time = fixtuple::fixed_tuple!(1, 42, 30);
    /// let (_, m, s) = time.as_muts();
    /// *m = 59;
    /// *s += 1;
    /// assert_eq!(time.into_inner(), (1, 59, 31));
    /// ```
    #[inline]
    pub fn as_muts(&mut self) -> T::Muts<'_> {
        self.0.as_muts()
    }
}

impl<T: Tuple> From<T> for FixedTuple<T> {
    #[inline]
    fn from(values: T) -> Self {
        FixedTuple(values)
    }
}

impl<T: fmt::Debug> fmt::Debug for FixedTuple<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: DisplaySlots> fmt::Display for FixedTuple<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_slots(f)
    }
}
