//! Procedural macros behind the `fixtuple` crate.
//!
//! The generated code names items through `::fixtuple`, so use these macros
//! through the re-exports in `fixtuple` rather than depending on this crate
//! directly.

use proc_macro2::TokenStream;
use syn::{DeriveInput, Error};

mod arity;
mod constant;
mod derive;
mod native;
mod shared;

/// Implement `Tuple`, `Slot<I>`, `TupleFrom` and `DisplaySlots` for native
/// tuples of each arity in the range.
///
/// ```ignore
/// fixtuple_macros::impl_tuples!(0..=12);
/// ```
///
/// The range must be bounded at the end and may not exceed 12.
#[proc_macro]
pub fn impl_tuples(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    arity::parse_arity_range(TokenStream::from(input))
        .map(native::impl_tuples)
        .unwrap_or_else(Error::into_compile_error)
        .into()
}

/// Derive `Tuple`, `Slot<I>` and `TupleFrom` for a struct, treating each field
/// as a slot in declaration order.
///
/// Works for tuple structs, structs with named fields and unit structs. Generic
/// parameters are carried through to every generated impl. `DisplaySlots` is
/// not derived, since the field types cannot be bounded by `Display` without
/// rejecting structs that hold non-`Display` concrete types.
///
/// The struct must not implement `Drop`. `Tuple::into_native` and
/// `Slot::into_slot` move fields out of `self`, which Rust forbids for types
/// with a destructor, so the generated impls fail to compile with E0509.
/// Wrap such a type in a field of a plain struct instead.
#[proc_macro_derive(Slots)]
pub fn derive_slots(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);
    derive::derive_slots(&input)
        .unwrap_or_else(Error::into_compile_error)
        .into()
}
