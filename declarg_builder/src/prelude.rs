//! Traits which, typically, may be imported without concern: `use declarg::prelude::*`.
use crate::api::CommandLineParser;
use crate::model::{BaseType, Value};
use crate::parser::{ConfigError, GeneralParser, ParseError};

/// Behaviour for multiple (0 to many) items T to be collected together.
// Needs to be imported in order to implement a custom `Collectable`.
pub trait Collectable<T> {
    /// Add a value to this `Collectable`.
    fn add(&mut self, item: T);
}

/// Behaviour for a Rust type to be the base type of an option.
///
/// The parser coerces raw tokens into a [`Value`] of [`Coercible::base_type`], and then hands that value to [`Coercible::from_value`].
/// Implemented for `String`, `bool`, `i32`, `i64`, `f32`, `f64`, `chrono::NaiveDateTime` and `url::Url`.
/// Unit-only enums get an implementation via `#[derive(DeclargChoices)]`.
// Needs to be imported in order to implement a custom `Coercible`.
pub trait Coercible: Sized {
    /// The base type raw tokens are coerced into.
    fn base_type() -> BaseType;

    /// Convert the coerced value into `Self`, or `None` if it is not of [`Coercible::base_type`].
    fn from_value(value: Value) -> Option<Self>;
}

/// Behaviour of a type whose options are declared on the type itself (typically via `#[derive(DeclargParser)]`).
// Needs to be imported in order to parse via a derived type.
pub trait Declared: Default + Sized {
    /// The configured, not yet validated, command line parser for this type.
    fn command_line_parser() -> CommandLineParser<Self>;

    /// Build (validating the declarations) the parser for this type.
    fn parser() -> Result<GeneralParser<Self>, ConfigError> {
        Self::command_line_parser().build_parser()
    }

    /// Build the parser and run it against the argument vector.
    fn parse_tokens(tokens: &[&str]) -> Result<(Self, Vec<ParseError>), ConfigError> {
        Ok(Self::parser()?.parse_tokens(tokens))
    }

    /// Build the parser and run it against a single command line string.
    fn parse_str(line: &str) -> Result<(Self, Vec<ParseError>), ConfigError> {
        Ok(Self::parser()?.parse_str(line))
    }
}
