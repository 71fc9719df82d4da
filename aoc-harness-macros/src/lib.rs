//! Procedural macros for the aoc-harness library

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{DeriveInput, Lit, LitStr, parse_macro_input};

/// Parsed contents of the `#[aoc(...)]` attribute
#[derive(Default)]
struct AocArgs {
    year: Option<u16>,
    day: Option<u8>,
    part_one: Vec<LitStr>,
    part_two: Vec<LitStr>,
}

/// Derive macro registering a day solver in the harness registration table
///
/// Generates an `inventory` submission of an `aoc_harness::SolverRegistration`
/// whose name is the type's identifier and whose factory builds the type
/// with `Default::default()`.
///
/// # Attributes
///
/// - `year`: Required. The Advent of Code year (e.g., 2023)
/// - `day`: Required. The day number (1-25)
/// - `part_one`: Optional. Expected example answers for part one, one per dataset
/// - `part_two`: Optional. Expected example answers for part two, one per dataset
///
/// # Requirements
///
/// The type must implement `aoc_harness::DaySolver` and `Default`.
///
/// # Example
///
/// ```ignore
/// use aoc_harness::{AocDay, DaySolver, SolveError};
///
/// #[derive(AocDay, Default)]
/// #[aoc(year = 2018, day = 1, part_one = ["3", "0", "-6"], part_two = ["0", "10", "5", "14"])]
/// pub struct Day01;
///
/// impl DaySolver for Day01 {
///     // ... implementation
/// }
/// ```
#[proc_macro_derive(AocDay, attributes(aoc))]
pub fn derive_aoc_day(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let args = parse_args(input)?;

    let year = args
        .year
        .ok_or_else(|| syn::Error::new_spanned(name, "missing required `year` in #[aoc(...)]"))?;
    let day = args
        .day
        .ok_or_else(|| syn::Error::new_spanned(name, "missing required `day` in #[aoc(...)]"))?;
    if !(1..=25).contains(&day) {
        return Err(syn::Error::new_spanned(name, "`day` must be within 1..=25"));
    }

    let name_str = LitStr::new(&name.to_string(), Span::call_site());
    let part_one = &args.part_one;
    let part_two = &args.part_two;

    Ok(quote! {
        const _: () = {
            // Compile-time check that the type implements the solver contract
            trait MustImplementDaySolver: ::aoc_harness::DaySolver + ::core::default::Default {}
            impl MustImplementDaySolver for #name {}

            fn factory() -> ::std::boxed::Box<dyn ::aoc_harness::DaySolver> {
                ::std::boxed::Box::new(<#name as ::core::default::Default>::default())
            }

            ::aoc_harness::inventory::submit! {
                ::aoc_harness::SolverRegistration {
                    year: #year,
                    day: #day,
                    name: #name_str,
                    expected: ::aoc_harness::ExpectedAnswers {
                        part_one: &[#(#part_one),*],
                        part_two: &[#(#part_two),*],
                    },
                    factory,
                }
            }
        };
    })
}

fn parse_args(input: &DeriveInput) -> syn::Result<AocArgs> {
    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("aoc"))
        .ok_or_else(|| {
            syn::Error::new_spanned(&input.ident, "AocDay derive macro requires #[aoc(...)] attribute")
        })?;

    let mut args = AocArgs::default();
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("year") {
            let value: Lit = meta.value()?.parse()?;
            match value {
                Lit::Int(lit_int) => args.year = Some(lit_int.base10_parse()?),
                other => return Err(syn::Error::new_spanned(other, "`year` must be an integer")),
            }
        } else if meta.path.is_ident("day") {
            let value: Lit = meta.value()?.parse()?;
            match value {
                Lit::Int(lit_int) => args.day = Some(lit_int.base10_parse()?),
                other => return Err(syn::Error::new_spanned(other, "`day` must be an integer")),
            }
        } else if meta.path.is_ident("part_one") {
            args.part_one = parse_answers(&meta)?;
        } else if meta.path.is_ident("part_two") {
            args.part_two = parse_answers(&meta)?;
        } else {
            return Err(meta.error("unsupported #[aoc(...)] key"));
        }
        Ok(())
    })?;

    Ok(args)
}

/// Parse an array of string literals: `part_one = ["a", "b"]`
fn parse_answers(meta: &syn::meta::ParseNestedMeta<'_>) -> syn::Result<Vec<LitStr>> {
    let _ = meta.value()?; // Consume the '='
    let content;
    syn::bracketed!(content in meta.input);
    let answers = content.parse_terminated(<LitStr as syn::parse::Parse>::parse, syn::Token![,])?;
    Ok(answers.into_iter().collect())
}
