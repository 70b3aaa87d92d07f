use std::ops::RangeInclusive;

use proc_macro2::TokenStream;
use quote::quote;

use crate::shared::{numbered_idents, tuple_indices, usize_literal};

pub fn impl_tuples(arities: RangeInclusive<usize>) -> TokenStream {
    arities.map(impl_tuple).collect()
}

// All impls for the native tuple `(T0, T1, ..)` of one arity.
fn impl_tuple(arity: usize) -> TokenStream {
    let types = numbered_idents("T", arity);
    let sources = numbered_idents("U", arity);
    let values = numbered_idents("u", arity);
    let indices = tuple_indices(arity);
    let arity_literal = usize_literal(arity);

    let tuple_type = quote!((#(#types,)*));

    let slot_impls = types.iter().zip(&indices).enumerate().map(|(i, (ty, index))| {
        let position = usize_literal(i);
        quote! {
            impl<#(#types),*> ::fixtuple::Slot<#position> for #tuple_type {
                type Value = #ty;

                #[inline]
                fn slot(&self) -> &#ty {
                    &self.#index
                }

                #[inline]
                fn slot_mut(&mut self) -> &mut #ty {
                    &mut self.#index
                }

                #[inline]
                fn into_slot(self) -> #ty {
                    self.#index
                }
            }
        }
    });

    let borrowed = indices.iter().map(|index| quote!(&self.#index)).collect::<Vec<_>>();
    let display_body = display_slots_body(&borrowed);

    quote! {
        impl<#(#types),*> ::fixtuple::Tuple for #tuple_type {
            const ARITY: usize = #arity_literal;

            type Native = Self;
            type Refs<'a> = (#(&'a #types,)*) where Self: 'a;
            type Muts<'a> = (#(&'a mut #types,)*) where Self: 'a;

            #[inline]
            fn into_native(self) -> Self {
                self
            }

            #[inline]
            fn from_native(native: Self) -> Self {
                native
            }

            #[inline]
            fn as_refs(&self) -> Self::Refs<'_> {
                (#(&self.#indices,)*)
            }

            #[inline]
            fn as_muts(&mut self) -> Self::Muts<'_> {
                (#(&mut self.#indices,)*)
            }
        }

        #(#slot_impls)*

        impl<#(#types,)* #(#sources),*> ::fixtuple::TupleFrom<(#(#sources,)*)> for #tuple_type
        where
            #(#sources: ::core::convert::Into<#types>,)*
        {
            #[inline]
            fn tuple_from(values: (#(#sources,)*)) -> Self {
                let (#(#values,)*) = values;
                (#(::core::convert::Into::into(#values),)*)
            }
        }

        impl<#(#types),*> ::fixtuple::DisplaySlots for #tuple_type
        where
            #(#types: ::core::fmt::Display,)*
        {
            fn fmt_slots(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                #display_body
            }
        }
    }
}

// Writes `(a, b, c)` from already-borrowed slot expressions.
fn display_slots_body(slots: &[TokenStream]) -> TokenStream {
    let writes = slots.iter().enumerate().map(|(i, slot)| {
        let separator = (i > 0).then(|| quote!(f.write_str(", ")?;));
        quote! {
            #separator
            ::core::fmt::Display::fmt(#slot, f)?;
        }
    });
    quote! {
        f.write_str("(")?;
        #(#writes)*
        f.write_str(")")
    }
}
