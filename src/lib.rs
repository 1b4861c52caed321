//! `declarg` is a declarative, verb-aware command line option parser for Rust.
//!
//! Options are declared on the fields of a plain struct, and parsing fills in an instance of that struct.
//! Rather than stopping at the first problem, `declarg` collects every error it encounters and returns them alongside the best-effort instance.
//! Specifically, `declarg` attempts to prioritize the following design concerns:
//! * *Type safe option parsing*:
//! The user should not call any `&str -> T` conversion functions directly.
//! * *Complete error reporting*:
//! A single parse reports every unknown option, invalid value, missing requirement and conflict, in order.
//! * *Verb paradigm*:
//! A single *verb* (ex: `backup`, `restore`) may lead the command line, and options may be scoped to specific verbs.
//!
//! # Usage
//! via [derive Api](./derive/index.html):
//! ```
//! use declarg::derive::*;
//! use declarg::prelude::*;
//!
//! #[derive(Debug, Default, PartialEq, DeclargChoices)]
//! enum Action {
//!     #[default]
//!     Backup,
//!     Restore,
//! }
//!
//! #[derive(Default, DeclargParser)]
//! struct Options {
//!     #[declarg(verb)]
//!     action: Option<Action>,
//!     #[declarg(short = 'i', required)]
//!     input: String,
//!     #[declarg(short = 'y')]
//!     yes: bool,
//!     #[declarg(short = 'r', default_value = "3")]
//!     retries: i32,
//! }
//!
//! let (options, errors) = Options::parse_tokens(&["backup", "-y", "--input", "/x"]).unwrap();
//! assert!(errors.is_empty());
//! assert_eq!(options.action, Some(Action::Backup));
//! assert_eq!(options.input, "/x");
//! assert!(options.yes);
//! assert_eq!(options.retries, 3);
//! ```
//! or equivalently via builder Api (this page):
//! ```
//! use declarg::{CommandLineParser, Optional, Parameter, Scalar};
//!
//! #[derive(Default)]
//! struct Options {
//!     action: Option<String>,
//!     input: String,
//!     yes: bool,
//!     retries: i32,
//! }
//!
//! let parser = CommandLineParser::new()
//!     .add(Parameter::verb(Optional::new(|o: &mut Options| &mut o.action), "action")
//!         .valid_values(["backup", "restore"]))
//!     .add(Parameter::option(Scalar::new(|o: &mut Options| &mut o.input), "input")
//!         .short('i')
//!         .required())
//!     .add(Parameter::option(Scalar::new(|o: &mut Options| &mut o.yes), "yes").short('y'))
//!     .add(Parameter::option(Scalar::new(|o: &mut Options| &mut o.retries), "retries")
//!         .short('r')
//!         .default_value("3"))
//!     .build_parser()
//!     .unwrap();
//!
//! let (options, errors) = parser.parse_str("backup -y --input=/x");
//! assert!(errors.is_empty());
//! assert_eq!(options.action, Some("backup".to_string()));
//! assert_eq!(options.retries, 3);
//!
//! let (_, errors) = parser.parse_str("restore --retries many --force");
//! let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
//! assert_eq!(
//!     messages,
//!     vec![
//!         "Invalid value for option 'retries' (expected int): many",
//!         "Unknown option 'force'",
//!         "Required option 'input' not set",
//!     ]
//! );
//! ```
//!
//! # Builder Api
//! Configure `declarg` by starting with a [`CommandLineParser`] and `add`ing parameters.
//! There are two classes of parameters: [`Parameter::option`] and [`Parameter::verb`] (at most one).
//!
//! Each parameter takes a *field* which selects the struct member to write, and determines:
//! * The base type `F` of the parameter (ex: `i32`), via [Coercible](./prelude/trait.Coercible.html).
//! * Whether `F` is wrapped in a container (ex: `Vec<F>` or `Option<F>`).
//!
//! ### Fields
//! * [`Scalar`]: a single-value option.
//! A `Scalar<bool>` is a *switch*: it takes no value on the command line and is set to `true` when present.
//! * [`Optional`]: a single-value option over an `Option<F>`.
//! * [`Collection`]: a multi-value option over any [Collectable](./prelude/trait.Collectable.html).
//! Each occurrence of the option adds one value.
//! `declarg` provides `Collectable` implementations for `Vec<F>`, `VecDeque<F>`, `HashSet<F>` and `Box<[F]>`.
//!
//! ### Base Types
//! `String`, `bool`, `i32`, `i64`, `f32`, `f64`, `chrono::NaiveDateTime`, `url::Url`, and any unit-only enum deriving `DeclargChoices`.
//! Enum members are matched case-insensitively.
//! Booleans accept only `true` or `1` (case-insensitive).
//!
//! ### Modifiers
//! * [`Parameter::short`]: the single character alias (`-x`).
//! * [`Parameter::required`]: report an error if the option is never set (not applicable to booleans).
//! * [`Parameter::valid_values`]: restrict the option to the listed values.
//! * [`Parameter::only_for_verbs`]: restrict the option to the listed verbs.
//! * [`Parameter::default_value`]: the raw value applied before the command line is read (not applicable to booleans, collections or the verb).
//! * [`Parameter::mutually_exclusive`]: options sharing a tag may not be set together.
//! * [`Parameter::section`] and [`Parameter::description`]: informational only.
//!
//! All declarations are validated when the parser is built, reporting a [`ConfigError`] for the first problem found.
//!
//! ### Syntax
//! * `--name value`, or `--name=value` (when [`ParserSettings::with_equal_syntax`] is enabled).
//! Only the first `=` is used as a separator.
//! * `-x value` or `-x=value`.
//! * `--name` or `-x` for a boolean option.
//! * `-xyz` for a cluster of boolean options.
//! * The verb, as the first bare token.
//!
//! Single string input ([`GeneralParser::parse_str`]) is split on whitespace, except within double quotes.
//! For example, `--name "a b"` is equivalent to `["--name", "a b"]`.
//!
//! # Features
//! * `unit_test`: For features that help with unit testing.
//! * `tracing_debug`: Emit `tracing` debug events while matching and validating.
pub mod derive;
pub use declarg_builder::*;
