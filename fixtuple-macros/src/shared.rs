use proc_macro2::{Ident, Literal};
use quote::format_ident;
use syn::Index;

macro_rules! abort {
    ($spanned:expr, $message:expr) => {
        return Err(syn::Error::new($spanned.span(), $message))
    };
}

pub(crate) use abort;

/// Standard library trait impls for tuples stop at 12 elements.
pub const MAX_ARITY: usize = 12;

// `prefix0, prefix1, ...`
pub fn numbered_idents(prefix: &str, count: usize) -> Vec<Ident> {
    (0..count).map(|i| format_ident!("{}{}", prefix, i)).collect()
}

pub fn tuple_indices(count: usize) -> Vec<Index> {
    (0..count).map(Index::from).collect()
}

// An unsuffixed literal, so `Slot<1>` rather than `Slot<1usize>`.
pub fn usize_literal(value: usize) -> Literal {
    Literal::usize_unsuffixed(value)
}
