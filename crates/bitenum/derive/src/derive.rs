use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Error, Expr, Fields, Ident, Type};

pub(crate) fn handle_derive_bitmask(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(Error::into_compile_error)
        .into()
}

/// Settings read from `#[bitmask(...)]`.
#[derive(Default)]
struct Attrs {
    flags: Vec<Ident>,
    all: Option<Expr>,
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    if !input.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &input.generics,
            "BitmaskEnum cannot be derived for generic types",
        ));
    }
    let repr = repr_type(input)?;
    let attrs = parse_attrs(input)?;

    let flags = &attrs.flags;
    let all = match (&attrs.all, flags.is_empty()) {
        (Some(all), _) => quote! { #name(#all) },
        (None, false) => quote! { #name(0 #( | #name::#flags.0 )*) },
        (None, true) => quote! { #name(<#repr as ::bitenum_mask::Bits>::ALL_ONES) },
    };

    Ok(quote! {
        impl ::bitenum_mask::BitmaskEnum for #name {
            type Repr = #repr;
            const NONE: Self = #name(<#repr as ::bitenum_mask::Bits>::ZERO);
            const ALL: Self = #all;
            const FLAGS: &'static [(&'static str, Self)] = &[
                #( (::core::stringify!(#flags), #name::#flags), )*
            ];

            #[inline]
            fn from_bits(bits: #repr) -> Self {
                #name(bits)
            }

            #[inline]
            fn bits(self) -> #repr {
                self.0
            }
        }

        ::bitenum_mask::impl_bitmask_ops!(#name);
    })
}

/// The integer inside a single-field tuple struct.
fn repr_type(input: &DeriveInput) -> syn::Result<&Type> {
    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        Data::Enum(_) => {
            return Err(Error::new_spanned(
                &input.ident,
                "BitmaskEnum cannot be derived for enums; use a newtype such as `struct Flags(u32)`",
            ))
        }
        Data::Union(_) => {
            return Err(Error::new_spanned(
                &input.ident,
                "BitmaskEnum cannot be derived for unions",
            ))
        }
    };
    match fields {
        Fields::Unnamed(unnamed) if unnamed.unnamed.len() == 1 => Ok(&unnamed.unnamed[0].ty),
        _ => Err(Error::new_spanned(
            fields,
            "BitmaskEnum requires a tuple struct with exactly one integer field",
        )),
    }
}

fn parse_attrs(input: &DeriveInput) -> syn::Result<Attrs> {
    let mut attrs = Attrs::default();
    for attr in &input.attrs {
        if !attr.path().is_ident("bitmask") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("flags") {
                meta.parse_nested_meta(|flag| {
                    let ident = flag
                        .path
                        .get_ident()
                        .cloned()
                        .ok_or_else(|| flag.error("expected a flag constant name"))?;
                    attrs.flags.push(ident);
                    Ok(())
                })
            } else if meta.path.is_ident("all") {
                attrs.all = Some(meta.value()?.parse()?);
                Ok(())
            } else {
                Err(meta.error("unsupported bitmask attribute, expected `flags(...)` or `all = ...`"))
            }
        })?;
    }
    Ok(attrs)
}
