//! Builder module for `declarg`.
//! See [documentation root](https://docs.rs/declarg/latest/declarg/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod coerce;
mod constant;
mod matcher;
mod model;
mod parser;
#[allow(missing_docs)]
pub mod prelude;
mod tokens;

pub use api::*;
pub use model::*;
pub use parser::{ConfigError, GeneralParser, ParseError};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
