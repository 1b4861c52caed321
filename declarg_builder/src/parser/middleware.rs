use std::env;

use crate::model::ParserSettings;
#[cfg(feature = "unit_test")]
use crate::model::OptionSpec;
use crate::parser::base::*;
use crate::parser::interface::UserInterface;
use crate::parser::schema::ConfigError;
use crate::tokens::split_command_line;

/// The configured command line parser.
/// Built via `CommandLineParser::build` or `CommandLineParser::build_parser`.
///
/// A `GeneralParser` holds no per-parse state, so it may be used any number of times.
pub struct GeneralParser<T> {
    parser: Parser<T>,
    settings: ParserSettings,
    user_interface: Box<dyn UserInterface>,
}

impl<T> std::fmt::Debug for GeneralParser<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneralParser")
            .field("settings", &self.settings)
            .finish()
    }
}

impl<T> GeneralParser<T> {
    pub(crate) fn new(
        parser: Parser<T>,
        settings: ParserSettings,
        user_interface: Box<dyn UserInterface>,
    ) -> Self {
        Self {
            parser,
            settings,
            user_interface,
        }
    }

    /// The settings used by the `parse_*` methods (except the `*_with` variants).
    pub fn settings(&self) -> &ParserSettings {
        &self.settings
    }

    /// The option declarations, in parse order (the verb is always first).
    #[cfg(feature = "unit_test")]
    pub fn option_specs(&self) -> &[OptionSpec] {
        self.parser.specs()
    }
}

impl<T: Default> GeneralParser<T> {
    /// Run the command line parser against the input tokens.
    ///
    /// Parsing always produces a best-effort instance of `T`, alongside every [`ParseError`] encountered.
    /// An input is only considered valid when the errors are empty.
    ///
    /// ### Example
    /// ```
    /// # use declarg_builder as declarg;
    /// use declarg::{CommandLineParser, Parameter, Scalar};
    ///
    /// #[derive(Default)]
    /// struct Options {
    ///     count: i32,
    /// }
    ///
    /// let parser = CommandLineParser::new()
    ///     .add(Parameter::option(Scalar::new(|o: &mut Options| &mut o.count), "count"))
    ///     .build_parser()
    ///     .unwrap();
    ///
    /// let (options, errors) = parser.parse_tokens(&["--count", "5"]);
    /// assert_eq!(options.count, 5);
    /// assert!(errors.is_empty());
    ///
    /// let (_, errors) = parser.parse_tokens(&["--count", "five"]);
    /// assert_eq!(
    ///     errors[0].message(),
    ///     "Invalid value for option 'count' (expected int): five"
    /// );
    /// ```
    pub fn parse_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> (T, Vec<ParseError>) {
        self.parser.consume(tokens, &self.settings)
    }

    /// Run the command line parser against a single command line.
    ///
    /// The line is split on whitespace; a double-quoted segment is a single token (without its quotes).
    pub fn parse_str(&self, line: &str) -> (T, Vec<ParseError>) {
        self.parse_tokens(split_command_line(line).as_slice())
    }

    /// Run the command line parser against the input tokens, using the `settings` for this call only.
    ///
    /// The declarations are validated again under the `settings`, since the date format may change how the defaults and valid values coerce.
    pub fn parse_tokens_with<S: AsRef<str>>(
        &self,
        settings: &ParserSettings,
        tokens: &[S],
    ) -> Result<(T, Vec<ParseError>), ConfigError> {
        self.parser.validate(settings)?;
        Ok(self.parser.consume(tokens, settings))
    }

    /// Run the command line parser against a single command line, using the `settings` for this call only.
    pub fn parse_str_with(
        &self,
        settings: &ParserSettings,
        line: &str,
    ) -> Result<(T, Vec<ParseError>), ConfigError> {
        self.parse_tokens_with(settings, split_command_line(line).as_slice())
    }

    /// Run the command line parser against the Cli [`env::args`] (skipping the program name).
    pub fn parse_env(&self) -> (T, Vec<ParseError>) {
        let command_input: Vec<String> = env::args().skip(1).collect();
        self.parse_tokens(command_input.as_slice())
    }

    /// Run the command line parser against the Cli [`env::args`], exiting on any error.
    ///
    /// Every error is printed to stderr, after which the program exits with error code `1` (via `std::process::exit`).
    pub fn parse(&self) -> T {
        let command_input: Vec<String> = env::args().skip(1).collect();

        match self.invoke(command_input.as_slice()) {
            Ok(target) => target,
            Err(exit_code) => std::process::exit(exit_code),
        }
    }

    fn invoke<S: AsRef<str>>(&self, tokens: &[S]) -> Result<T, i32> {
        let (target, errors) = self.parse_tokens(tokens);

        if errors.is_empty() {
            Ok(target)
        } else {
            for error in errors {
                self.user_interface.print_error(error);
            }

            Err(1)
        }
    }
}
