//! Fixed-arity heterogeneous tuples with slots addressed by compile-time
//! position.
//!
//! [`FixedTuple`] wraps a native tuple (or a struct deriving [`Slots`]) and
//! gives it positional access through a const generic index:
//!
//! ```rust
//! use fixtuple::{fixed_tuple, FixedTuple};
//!
//! // Direct construction, each value converted into its slot type.
//! let time = FixedTuple::<(u64, u64, u64)>::from_values((1u8, 42u16, 30u32));
//! assert_eq!(time.into_inner(), (1, 42, 30));
//!
//! // Inferring construction, with mixed slot types.
//! let person = fixed_tuple!("Pwatpwat", 22, 8.2);
//! assert_eq!(*person.get::<0>(), "Pwatpwat");
//!
//! let mut time = fixed_tuple!(1, 42, 30);
//! *time.get_mut::<1>() = 59;
//! assert_eq!(time.to_string(), "(1, 59, 30)");
//!
//! let (h, m, s) = time.to_tuple();
//! assert_eq!((h, m, s), (1, 59, 30));
//! ```
//!
//! Positions are checked when the program is built. Reading a slot past the
//! end of the tuple does not compile:
//!
//! ```compile_fail
//! let time = fixtuple::fixed_tuple!(1, 42, 30);
//! let _ = time.get::<3>();
//! ```
//!
//! The traits behind this, [`Tuple`], [`Slot`] and [`TupleFrom`], are
//! implemented for native tuples of up to 12 elements and can be derived for
//! structs with [`Slots`].
//!
//! ```rust
//! use fixtuple::{FixedTuple, Slots};
//!
//! #[derive(Slots)]
//! struct Time(u32, u32, u32);
//!
//! let time = FixedTuple::new(Time(1, 42, 30));
//! assert_eq!(time.into_tuple(), (1, 42, 30));
//! ```
//!
//! Deriving [`Slots`] moves fields out of the struct, so the struct cannot
//! implement `Drop`:
//!
//! ```compile_fail,E0509
//! use fixtuple::Slots;
//!
//! #[derive(Slots)]
//! struct Guard(String);
//!
//! impl Drop for Guard {
//!     fn drop(&mut self) {}
//! }
//! ```

// Lets generated code name this crate as `::fixtuple` from inside it.
extern crate self as fixtuple;

pub mod clock;
mod fixed;
mod tuple;

pub use fixed::FixedTuple;
pub use fixtuple_macros::Slots;
pub use tuple::{DisplaySlots, Slot, Tuple, TupleFrom};

/// Build a [`FixedTuple`], deducing the arity and every slot type from the
/// values.
///
/// ```rust
/// let person = fixtuple::fixed_tuple!("Pwatpwat", 22, 8.2);
/// let (name, age, height) = person.into_inner();
/// assert_eq!(name, "Pwatpwat");
/// assert_eq!(age, 22);
/// assert_eq!(height, 8.2);
/// ```
#[macro_export]
macro_rules! fixed_tuple {
    ($($value:expr),* $(,)?) => {
        $crate::FixedTuple::new(($($value,)*))
    };
}
