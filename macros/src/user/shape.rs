use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{punctuated::Punctuated, DeriveInput, Ident, Token};

use crate::common::interface_variant;

/// Parsed `#[shape(...)]` attributes, merged across occurrences.
struct ShapeArgs {
    opaque: bool,
    interfaces: Vec<Ident>,
}

fn parse_shape_args(input: &DeriveInput) -> syn::Result<ShapeArgs> {
    let mut args = ShapeArgs { opaque: false, interfaces: Vec::new() };
    let mut seen_attr = false;

    for attr in input.attrs.iter().filter(|attr| attr.path().is_ident("shape")) {
        seen_attr = true;
        let names = attr.parse_args_with(Punctuated::<Ident, Token![,]>::parse_terminated)?;
        for name in names {
            if name == "opaque" {
                args.opaque = true;
                continue;
            }
            let variant = interface_variant(&name)?;
            if args.interfaces.iter().any(|existing| *existing == variant) {
                return Err(syn::Error::new(
                    name.span(),
                    format!("duplicate interface `{name}` in #[shape]"),
                ));
            }
            args.interfaces.push(variant);
        }
    }

    if !seen_attr {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "#[derive(Shape)] requires a #[shape(Interface, ...)] attribute",
        ));
    }

    Ok(args)
}

/// #[derive(Shape)]: iterable unless `opaque`, exposing the union of the
/// listed interfaces' tokens.
pub fn expand_derive_shape(input: DeriveInput) -> syn::Result<TokenStream2> {
    let args = parse_shape_args(&input)?;
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let iterable = !args.opaque;
    let interfaces = &args.interfaces;

    Ok(quote! {
        impl #impl_generics ::collection_caps::Shape for #ident #ty_generics #where_clause {
            #[inline]
            fn is_iterable(&self) -> bool {
                #iterable
            }

            fn exposes(&self, token: ::collection_caps::Token) -> bool {
                false #(|| ::collection_caps::Interface::#interfaces.requires(token))*
            }
        }
    })
}
