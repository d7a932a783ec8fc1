use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    Expr, Ident, Token,
};

use crate::common::{bool_expr_to_predicates, BoolExpr};

/// `candidate: BoolExpr`
pub struct ConformsInput {
    pub candidate: Expr,
    pub expr: BoolExpr,
}

impl Parse for ConformsInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let candidate: Expr = input.parse()?;
        input.parse::<Token![:]>()?;
        let expr: BoolExpr = input.parse()?;
        Ok(ConformsInput { candidate, expr })
    }
}

pub fn expand_conforms(input: ConformsInput) -> syn::Result<TokenStream2> {
    let binding = Ident::new("__collection_caps_candidate", Span::mixed_site());
    let body = bool_expr_to_predicates(&input.expr, &binding)?;
    let candidate = &input.candidate;

    Ok(quote! {
        {
            let #binding = &(#candidate);
            #body
        }
    })
}
