use fixtuple::Slots;
struct Meters(f64);
impl ::fixtuple::Tuple for Meters {
    const ARITY: usize = 1;
    type Native = (f64,);
    type Refs<'__slot> = (&'__slot f64,) where Self: '__slot;
    type Muts<'__slot> = (&'__slot mut f64,) where Self: '__slot;
    #[inline]
    fn into_native(self) -> Self::Native {
        (self.0,)
    }
    #[inline]
    fn from_native(native: Self::Native) -> Self {
        Self { 0: native.0 }
    }
    #[inline]
    fn as_refs(&self) -> Self::Refs<'_> {
        (&self.0,)
    }
    #[inline]
    fn as_muts(&mut self) -> Self::Muts<'_> {
        (&mut self.0,)
    }
}
impl ::fixtuple::Slot<0> for Meters {
    type Value = f64;
    #[inline]
    fn slot(&self) -> &f64 {
        &self.0
    }
    #[inline]
    fn slot_mut(&mut self) -> &mut f64 {
        &mut self.0
    }
    #[inline]
    fn into_slot(self) -> f64 {
        self.0
    }
}
impl<__U0> ::fixtuple::TupleFrom<(__U0,)> for Meters
where
    __U0: ::core::convert::Into<f64>,
{
    #[inline]
    fn tuple_from(values: (__U0,)) -> Self {
        let (__u0,) = values;
        Self {
            0: ::core::convert::Into::into(__u0),
        }
    }
}
struct Label<'a> {
    text: &'a str,
}
impl<'a> ::fixtuple::Tuple for Label<'a> {
    const ARITY: usize = 1;
    type Native = (&'a str,);
    type Refs<'__slot> = (&'__slot &'a str,) where Self: '__slot;
    type Muts<'__slot> = (&'__slot mut &'a str,) where Self: '__slot;
    #[inline]
    fn into_native(self) -> Self::Native {
        (self.text,)
    }
    #[inline]
    fn from_native(native: Self::Native) -> Self {
        Self { text: native.0 }
    }
    #[inline]
    fn as_refs(&self) -> Self::Refs<'_> {
        (&self.text,)
    }
    #[inline]
    fn as_muts(&mut self) -> Self::Muts<'_> {
        (&mut self.text,)
    }
}
impl<'a> ::fixtuple::Slot<0> for Label<'a> {
    type Value = &'a str;
    #[inline]
    fn slot(&self) -> &&'a str {
        &self.text
    }
    #[inline]
    fn slot_mut(&mut self) -> &mut &'a str {
        &mut self.text
    }
    #[inline]
    fn into_slot(self) -> &'a str {
        self.text
    }
}
impl<'a, __U0> ::fixtuple::TupleFrom<(__U0,)> for Label<'a>
where
    __U0: ::core::convert::Into<&'a str>,
{
    #[inline]
    fn tuple_from(values: (__U0,)) -> Self {
        let (__u0,) = values;
        Self {
            text: ::core::convert::Into::into(__u0),
        }
    }
}
