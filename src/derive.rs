//! Derive Api for `declarg` configuration.
//!
//! ### Getting Started
//! Use the derive Api by starting with an options struct `S` instrumented with `#[derive(Default, DeclargParser)]`.
//! This implements [Declared](../prelude/trait.Declared.html) for `S`, which provides `S::parser()`, `S::parse_tokens(..)` and `S::parse_str(..)`.
//! Each of these validates the declarations before any parsing, returning a [ConfigError](../enum.ConfigError.html) if they are invalid.
//!
//! ```
//! use declarg::derive::*;
//! use declarg::prelude::*;
//!
//! #[derive(Debug, Default, PartialEq, DeclargChoices)]
//! enum Verbs {
//!     #[default]
//!     Verb1,
//!     Verb2,
//! }
//!
//! #[derive(Default, DeclargParser)]
//! struct Options {
//!     #[declarg(verb, name = "action")]
//!     verb: Option<Verbs>,
//!     #[declarg(short = 'i')]
//!     int: Option<i32>,
//!     #[declarg(valid_values = "First;Second", short = 'c')]
//!     choice: Option<String>,
//!     #[declarg(only_for_verbs = "Verb1")]
//!     scoped: Vec<i64>,
//!     not_an_option: usize,
//! }
//!
//! let (options, errors) = Options::parse_str("verb1 -i 5 --choice=First --scoped 1 --scoped 2").unwrap();
//! assert!(errors.is_empty());
//! assert_eq!(options.verb, Some(Verbs::Verb1));
//! assert_eq!(options.int, Some(5));
//! assert_eq!(options.choice, Some("First".to_string()));
//! assert_eq!(options.scoped, vec![1, 2]);
//!
//! let (options, errors) = Options::parse_str("verb2 --scoped 1").unwrap();
//! assert_eq!(errors[0].to_string(), "Option 'scoped' is not valid for verb Verb2");
//! assert!(options.scoped.is_empty());
//! ```
//!
//! ### Parser Configuration
//! The struct may carry `#[declarg(settings = path::to_fn)]`, naming a `fn() -> ParserSettings`.
//! These settings apply to every parse made by the derived parser.
//!
//! ### Option Configuration
//! Only the fields instrumented with `#[declarg(..)]` are options (a bare `#[declarg]` is fine).
//! The field type determines the field kind:
//! ```console
//! Type                                  | Field
//! -----------------------------------------------------------
//! Option<F>                             | Optional::new(..)
//! Vec<F>, VecDeque<F>, HashSet<F>       | Collection::<_, _, F>::new(..)
//! Box<[F]>                              | Collection::<_, _, F>::new(..)
//! F                                     | Scalar::new(..)
//! ```
//!
//! The following field attributes may be combined as necessary:
//! * `#[declarg(verb)]` to use `Parameter::verb(..)` instead of `Parameter::option(..)`.
//! * `#[declarg(name = "..")]` to set the option name (defaults to the field name).
//! * `#[declarg(short = C)]` to set the short name; `C` must be a char value (ex: `'c'`).
//! * `#[declarg(required)]` to mark the option as required.
//! * `#[declarg(valid_values = "a;b")]` and `#[declarg(only_for_verbs = "a;b")]`, `;`-separated.
//! Only one of these may be used on the same field.
//! * `#[declarg(default_value = "..")]`, `#[declarg(mutually_exclusive = "..")]`, `#[declarg(section = "..")]` and `#[declarg(description = "..")]`.
//!
//! A partial example of these rules is provided as follows:
//! ```ignore
//! #[derive(Default, DeclargParser)]
//! struct Options {
//!     #[declarg(short = 'q', mutually_exclusive = "noise")]
//!     quiet: bool,
//!     // the above generates:
//!     //  .add(Parameter::option(Scalar::new(|target: &mut Options| &mut target.quiet), "quiet")
//!     //      .short('q')
//!     //      .mutually_exclusive("noise"))
//!
//!     #[declarg(name = "item", valid_values = "a;b")]
//!     items: Vec<String>,
//!     // the above generates:
//!     //  .add(Parameter::option(Collection::<_, _, String>::new(|target: &mut Options| &mut target.items), "item")
//!     //      .valid_values(["a", "b"]))
//! }
//! ```
//!
//! ### Choices
//! In the case of enums, instrument with `#[derive(DeclargChoices)]` so that the enum may be the base type of an option.
//! Only unit variants are supported, and members are matched case-insensitively by their variant names.

pub use declarg_derive::*;
