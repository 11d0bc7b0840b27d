//! Derive macro implementation used by `dimty-core`.
//!
//! `dimty-derive` is an implementation detail of this workspace. The `UnitMarker` derive expands in terms of
//! `crate::UnitMarker` and `crate::Unit`, so it is intended to be used by `dimty-core` (or by crates that expose an
//! identical crate-root API).
//!
//! Most users should depend on `dimty` instead and use the predefined units.
//!
//! # Generated impls
//!
//! For a unit marker type `MyUnit`, the derive implements `crate::UnitMarker for MyUnit`.
//!
//! # Attributes
//!
//! The derive reads a required `#[unit(...)]` attribute. Exactly one of `dimension` or `from` selects the starting
//! unit:
//!
//! - `dimension = Dimension::LENGTH`: a unit of a simple dimension
//! - `ratio = Rational::CENTI`: slot ratio for `dimension` (default: the coherent unit)
//! - `from = OtherUnit`: start from the unit of another marker, e.g. `Quot<Kilocalorie, Mole>`
//! - `global = Rational::KILO`: multiplies the global rational scale
//! - `factor = 4.184`: multiplies the real factor, making the unit real
//! - `symbol = "cal"`: printed symbol (default: generated from the unit)

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, Expr, Ident, LitStr, Token, Type,
};

/// Derive `crate::UnitMarker`.
///
/// The derive must be paired with a `#[unit(...)]` attribute providing `dimension` or `from`.
///
/// This macro is intended for use by `dimty-core`.
#[proc_macro_derive(UnitMarker, attributes(unit))]
pub fn derive_unit_marker(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_unit_marker_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_unit_marker_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let unit_attr = parse_unit_attribute(&input.attrs)?;

    let mut unit = match &unit_attr.origin {
        Origin::Dimension { dimension, ratio: Some(ratio) } => {
            quote! { crate::Unit::base(#dimension, #ratio) }
        }
        Origin::Dimension { dimension, ratio: None } => quote! { crate::Unit::new(#dimension) },
        Origin::From(ty) => quote! { <#ty as crate::UnitMarker>::UNIT },
    };
    if let Some(global) = &unit_attr.global {
        unit = quote! { #unit.with_global(#global) };
    }
    if let Some(factor) = &unit_attr.factor {
        unit = quote! { #unit.with_factor(#factor) };
    }

    let symbol = unit_attr.symbol.as_ref().map(|symbol| {
        quote! { const SYMBOL: ::core::option::Option<&'static str> = ::core::option::Option::Some(#symbol); }
    });

    let expanded = quote! {
        impl crate::UnitMarker for #name {
            const UNIT: crate::Unit = #unit;
            #symbol
        }
    };

    Ok(expanded)
}

/// Where the unit of a marker starts from.
enum Origin {
    Dimension { dimension: Expr, ratio: Option<Expr> },
    From(Type),
}

/// Parsed contents of the `#[unit(...)]` attribute.
struct UnitAttribute {
    symbol: Option<LitStr>,
    origin: Origin,
    global: Option<Expr>,
    factor: Option<Expr>,
}

impl Parse for UnitAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut symbol: Option<LitStr> = None;
        let mut dimension: Option<Expr> = None;
        let mut ratio: Option<Expr> = None;
        let mut from: Option<Type> = None;
        let mut global: Option<Expr> = None;
        let mut factor: Option<Expr> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "symbol" => symbol = Some(input.parse()?),
                "dimension" => dimension = Some(input.parse()?),
                "ratio" => ratio = Some(input.parse()?),
                "from" => from = Some(input.parse()?),
                "global" => global = Some(input.parse()?),
                "factor" => factor = Some(input.parse()?),
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            // Consume trailing comma if present
            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let origin = match (dimension, from) {
            (Some(dimension), None) => Origin::Dimension { dimension, ratio },
            (None, Some(ty)) => {
                if ratio.is_some() {
                    return Err(syn::Error::new(input.span(), "`ratio` requires `dimension`"));
                }
                Origin::From(ty)
            }
            (Some(_), Some(_)) => {
                return Err(syn::Error::new(
                    input.span(),
                    "`dimension` and `from` are mutually exclusive",
                ));
            }
            (None, None) => {
                return Err(syn::Error::new(
                    input.span(),
                    "missing required attribute `dimension` or `from`",
                ));
            }
        };

        Ok(UnitAttribute {
            symbol,
            origin,
            global,
            factor,
        })
    }
}

fn parse_unit_attribute(attrs: &[Attribute]) -> syn::Result<UnitAttribute> {
    for attr in attrs {
        if attr.path().is_ident("unit") {
            return attr.parse_args::<UnitAttribute>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        "missing #[unit(...)] attribute",
    ))
}
