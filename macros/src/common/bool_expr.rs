// Boolean expression parsing for interface checks

use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    Ident, Token,
};

use super::predicate_for;

// =============================================================================
// Boolean Expression AST
// =============================================================================

#[derive(Clone, Debug)]
pub enum BoolExpr {
    Interface(Ident),
    And(Box<BoolExpr>, Box<BoolExpr>),
    Or(Box<BoolExpr>, Box<BoolExpr>),
    Not(Box<BoolExpr>),
}

impl Parse for BoolExpr {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        parse_or(input)
    }
}

// Recursive descent parser: Or -> And -> Unary -> Primary

fn parse_or(input: ParseStream) -> syn::Result<BoolExpr> {
    let mut lhs = parse_and(input)?;

    while input.peek(Token![|]) {
        input.parse::<Token![|]>()?;
        let rhs = parse_and(input)?;
        lhs = BoolExpr::Or(Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
}

fn parse_and(input: ParseStream) -> syn::Result<BoolExpr> {
    let mut lhs = parse_unary(input)?;

    while input.peek(Token![&]) {
        input.parse::<Token![&]>()?;
        let rhs = parse_unary(input)?;
        lhs = BoolExpr::And(Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
}

fn parse_unary(input: ParseStream) -> syn::Result<BoolExpr> {
    if input.peek(Token![!]) {
        input.parse::<Token![!]>()?;
        let operand = parse_unary(input)?;
        Ok(BoolExpr::Not(Box::new(operand)))
    } else {
        parse_primary(input)
    }
}

fn parse_primary(input: ParseStream) -> syn::Result<BoolExpr> {
    if input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in input);
        content.parse()
    } else {
        let name: Ident = input.parse()?;
        Ok(BoolExpr::Interface(name))
    }
}

// =============================================================================
// Code generation
// =============================================================================

/// Lower to a `bool` expression calling one predicate per operand on
/// `candidate`.
///
/// Unknown interface names are reported at their span.
pub fn bool_expr_to_predicates(expr: &BoolExpr, candidate: &Ident) -> syn::Result<TokenStream> {
    Ok(match expr {
        BoolExpr::Interface(name) => {
            let predicate = predicate_for(name)?;
            quote! { ::collection_caps::interface::#predicate(#candidate) }
        }
        BoolExpr::And(lhs, rhs) => {
            let l = bool_expr_to_predicates(lhs, candidate)?;
            let r = bool_expr_to_predicates(rhs, candidate)?;
            quote! { (#l && #r) }
        }
        BoolExpr::Or(lhs, rhs) => {
            let l = bool_expr_to_predicates(lhs, candidate)?;
            let r = bool_expr_to_predicates(rhs, candidate)?;
            quote! { (#l || #r) }
        }
        BoolExpr::Not(operand) => {
            let o = bool_expr_to_predicates(operand, candidate)?;
            quote! { !#o }
        }
    })
}
