use std::ops::RangeInclusive;

use proc_macro2::TokenStream;
use syn::spanned::Spanned as _;
use syn::{ExprRange, RangeLimits, Result};

use crate::constant::evaluate_usize;
use crate::shared::{abort, MAX_ARITY};

/// Parse the argument of `impl_tuples!`, e.g. `0..=12` or `1..4`.
pub fn parse_arity_range(args: TokenStream) -> Result<RangeInclusive<usize>> {
    let range = syn::parse2::<ExprRange>(args)?;
    let min = match &range.start {
        Some(start) => match evaluate_usize(start) {
            Some(min) => min,
            None => abort!(start, "invalid start"),
        },
        None => 0,
    };
    let Some(end) = &range.end else {
        abort!(range, "range cannot be unbounded at end");
    };
    let Some(end_value) = evaluate_usize(end) else {
        abort!(end, "invalid end");
    };
    let max = match range.limits {
        RangeLimits::HalfOpen(_) if end_value > min => end_value - 1,
        RangeLimits::Closed(_) if end_value >= min => end_value,
        _ => abort!(range, "nothing to expand"),
    };
    if max > MAX_ARITY {
        abort!(end, format!("arity cannot exceed {MAX_ARITY}"));
    }
    Ok(min..=max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;

    fn message(args: TokenStream) -> String {
        match parse_arity_range(args) {
            Ok(range) => panic!("expected an error, got {range:?}"),
            Err(error) => error.to_string(),
        }
    }

    #[test]
    fn closed_and_half_open() {
        assert_eq!(parse_arity_range(quote!(0..=12)).unwrap(), 0..=12);
        assert_eq!(parse_arity_range(quote!(1..4)).unwrap(), 1..=3);
        assert_eq!(parse_arity_range(quote!(..3)).unwrap(), 0..=2);
        assert_eq!(parse_arity_range(quote!(2..=(2 * 3))).unwrap(), 2..=6);
    }

    #[test]
    fn errors() {
        assert_eq!(message(quote!(1..)), "range cannot be unbounded at end");
        assert_eq!(message(quote!(3..=2)), "nothing to expand");
        assert_eq!(message(quote!(0..0)), "nothing to expand");
        assert_eq!(message(quote!(2..2)), "nothing to expand");
        assert_eq!(message(quote!(..0)), "nothing to expand");
        assert_eq!(message(quote!(0..=x)), "invalid end");
        assert_eq!(message(quote!(a..=2)), "invalid start");
        assert_eq!(message(quote!(0..=13)), "arity cannot exceed 12");
    }
}
