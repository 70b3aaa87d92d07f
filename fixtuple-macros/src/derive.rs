use proc_macro2::TokenStream;
use quote::quote;
use syn::spanned::Spanned as _;
use syn::{parse_quote, Data, DeriveInput, Fields, Member, Result, Type};

use crate::shared::{abort, numbered_idents, tuple_indices, usize_literal};

pub fn derive_slots(input: &DeriveInput) -> Result<TokenStream> {
    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        Data::Enum(data) => abort!(data.enum_token, "Slots cannot be derived for enums"),
        Data::Union(data) => abort!(data.union_token, "Slots cannot be derived for unions"),
    };
    let slots = SlotFields::new(fields);

    let mut output = impl_tuple(input, &slots);
    output.extend(impl_slots(input, &slots));
    output.extend(impl_tuple_from(input, &slots));
    Ok(output)
}

// Field members and types in declaration order.
struct SlotFields<'a> {
    members: Vec<Member>,
    types: Vec<&'a Type>,
}

impl<'a> SlotFields<'a> {
    fn new(fields: &'a Fields) -> Self {
        let (members, types): (Vec<_>, Vec<_>) = fields
            .iter()
            .enumerate()
            .map(|(i, field)| {
                let member = match &field.ident {
                    Some(ident) => Member::Named(ident.clone()),
                    None => Member::Unnamed(i.into()),
                };
                (member, &field.ty)
            })
            .unzip();
        SlotFields { members, types }
    }

    fn len(&self) -> usize {
        self.members.len()
    }
}

fn impl_tuple(input: &DeriveInput, slots: &SlotFields) -> TokenStream {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let arity = usize_literal(slots.len());
    let members = &slots.members;
    let types = &slots.types;
    let indices = tuple_indices(slots.len());
    let allow_unused = (slots.len() == 0).then(|| quote!(#[allow(unused_variables)]));

    quote! {
        impl #impl_generics ::fixtuple::Tuple for #ident #ty_generics #where_clause {
            const ARITY: usize = #arity;

            type Native = (#(#types,)*);
            type Refs<'__slot> = (#(&'__slot #types,)*) where Self: '__slot;
            type Muts<'__slot> = (#(&'__slot mut #types,)*) where Self: '__slot;

            #[inline]
            fn into_native(self) -> Self::Native {
                (#(self.#members,)*)
            }

            #[inline]
            #allow_unused
            fn from_native(native: Self::Native) -> Self {
                Self {
                    #(#members: native.#indices,)*
                }
            }

            #[inline]
            fn as_refs(&self) -> Self::Refs<'_> {
                (#(&self.#members,)*)
            }

            #[inline]
            fn as_muts(&mut self) -> Self::Muts<'_> {
                (#(&mut self.#members,)*)
            }
        }
    }
}

fn impl_slots(input: &DeriveInput, slots: &SlotFields) -> TokenStream {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    slots
        .members
        .iter()
        .zip(&slots.types)
        .enumerate()
        .map(|(i, (member, ty))| {
            let position = usize_literal(i);
            quote! {
                impl #impl_generics ::fixtuple::Slot<#position> for #ident #ty_generics #where_clause {
                    type Value = #ty;

                    #[inline]
                    fn slot(&self) -> &#ty {
                        &self.#member
                    }

                    #[inline]
                    fn slot_mut(&mut self) -> &mut #ty {
                        &mut self.#member
                    }

                    #[inline]
                    fn into_slot(self) -> #ty {
                        self.#member
                    }
                }
            }
        })
        .collect()
}

fn impl_tuple_from(input: &DeriveInput, slots: &SlotFields) -> TokenStream {
    let ident = &input.ident;
    let (_, ty_generics, _) = input.generics.split_for_impl();
    let sources = numbered_idents("__U", slots.len());
    let values = numbered_idents("__u", slots.len());
    let members = &slots.members;

    let mut generics = input.generics.clone();
    let where_clause = generics.make_where_clause();
    for (source, ty) in sources.iter().zip(&slots.types) {
        where_clause
            .predicates
            .push(parse_quote!(#source: ::core::convert::Into<#ty>));
    }
    generics
        .params
        .extend(sources.iter().map(|source| -> syn::GenericParam { parse_quote!(#source) }));
    let (impl_generics, _, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics ::fixtuple::TupleFrom<(#(#sources,)*)> for #ident #ty_generics #where_clause {
            #[inline]
            fn tuple_from(values: (#(#sources,)*)) -> Self {
                let (#(#values,)*) = values;
                Self {
                    #(#members: ::core::convert::Into::into(#values),)*
                }
            }
        }
    }
}
