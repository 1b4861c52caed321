//! Derive macros for `declarg`.
//! See [documentation root](https://docs.rs/declarg/latest/declarg/index.html) for full details.
extern crate proc_macro;

mod generate;
mod load;
mod model;

use crate::model::{DeriveChoices, DeriveParser};
use proc_macro::TokenStream;

pub(crate) const ATTRIBUTE: &str = "declarg";
pub(crate) const MACRO_DECLARG_PARSER: &str = "DeclargParser";
pub(crate) const MACRO_DECLARG_CHOICES: &str = "DeclargChoices";
pub(crate) const LIST_SEPARATOR: char = ';';

/// Derive `declarg::prelude::Declared` on a struct, declaring each `#[declarg(..)]` field as an option.
///
/// Fields without a `#[declarg(..)]` attribute are not options.
#[proc_macro_derive(DeclargParser, attributes(declarg))]
pub fn declarg_parser(input: TokenStream) -> TokenStream {
    let derive_input = syn::parse_macro_input!(input as syn::DeriveInput);

    match DeriveParser::try_from(derive_input) {
        Ok(parser) => parser.generate().into(),
        Err(error) => error.to_compile_error().into(),
    }
}

/// Derive `declarg::prelude::Coercible` on a unit-only enum, so it may be the type of an option.
///
/// Members are matched case-insensitively by their variant names.
#[proc_macro_derive(DeclargChoices)]
pub fn declarg_choices(input: TokenStream) -> TokenStream {
    let derive_input = syn::parse_macro_input!(input as syn::DeriveInput);

    match DeriveChoices::try_from(derive_input) {
        Ok(choices) => choices.generate().into(),
        Err(error) => error.to_compile_error().into(),
    }
}
