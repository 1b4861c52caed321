use crate::api::Parameter;
use crate::model::ParserSettings;
use crate::parser::{
    ConfigError, ConsoleInterface, GeneralParser, OptionCapture, Parser, UserInterface,
};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The base command line parser, declaring the options of a target `T`.
///
/// ### Example
/// ```
/// # use declarg_builder as declarg;
/// use declarg::{CommandLineParser, Optional, Parameter, Scalar};
///
/// #[derive(Default)]
/// struct Options {
///     action: Option<String>,
///     verbose: bool,
/// }
///
/// let parser = CommandLineParser::new()
///     .add(Parameter::verb(Optional::new(|o: &mut Options| &mut o.action), "action"))
///     .add(Parameter::option(Scalar::new(|o: &mut Options| &mut o.verbose), "verbose").short('v'))
///     .build();
///
/// let (options, errors) = parser.parse_str("run -v");
/// assert!(errors.is_empty());
/// assert_eq!(options.action, Some("run".to_string()));
/// assert!(options.verbose);
/// ```
pub struct CommandLineParser<T> {
    settings: ParserSettings,
    option_captures: Vec<OptionCapture<T>>,
}

impl<T> std::fmt::Debug for CommandLineParser<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandLineParser")
            .field("settings", &self.settings)
            .field("options", &self.option_captures.len())
            .finish()
    }
}

impl<T> Default for CommandLineParser<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CommandLineParser<T> {
    /// Create a command line parser.
    pub fn new() -> Self {
        Self {
            settings: ParserSettings::default(),
            option_captures: Vec::default(),
        }
    }

    /// Set the parser settings for this command line parser.
    /// If repeated, only the final settings will apply.
    ///
    /// ### Example
    /// ```
    /// # use declarg_builder as declarg;
    /// use declarg::{CommandLineParser, Parameter, ParserSettings, Scalar};
    ///
    /// #[derive(Default)]
    /// struct Options {
    ///     count: i32,
    /// }
    ///
    /// let parser = CommandLineParser::new()
    ///     .settings(ParserSettings::default().with_equal_syntax(false))
    ///     .add(Parameter::option(Scalar::new(|o: &mut Options| &mut o.count), "count"))
    ///     .build();
    ///
    /// let (_, errors) = parser.parse_tokens(&["--count=1"]);
    /// assert_eq!(errors[0].message(), "Unknown option 'count=1'");
    /// ```
    pub fn settings(mut self, settings: ParserSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Add an option to the command line parser.
    ///
    /// The order of the options does not affect the command parser semantics, except for the order of reported errors.
    pub fn add(mut self, parameter: Parameter<T>) -> Self {
        let inner = parameter.consume();

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Adding {inner:?}.");
        }

        self.option_captures.push(inner.into_capture());
        self
    }

    fn build_with_interface(
        self,
        user_interface: Box<dyn UserInterface>,
    ) -> Result<GeneralParser<T>, ConfigError> {
        let parser = Parser::new(self.option_captures, &self.settings)?;
        Ok(GeneralParser::new(parser, self.settings, user_interface))
    }

    /// Build the command line parser as a Result.
    /// This finalizes the configuration and checks for errors (ex: a repeated option name).
    pub fn build_parser(self) -> Result<GeneralParser<T>, ConfigError> {
        self.build_with_interface(Box::new(ConsoleInterface::default()))
    }

    /// Build the command line parser.
    /// This finalizes the configuration and checks for errors (ex: a repeated option name).
    /// If an error is encountered, exits with error code `1` (via [`std::process::exit`]).
    pub fn build(self) -> GeneralParser<T> {
        match self.build_parser() {
            Ok(gp) => gp,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Collection, Optional, Scalar};
    use crate::parser::util::InMemoryInterface;
    use rstest::rstest;

    #[derive(Debug, Default)]
    struct Target {
        action: Option<String>,
        count: i32,
        verbose: bool,
        quiet: bool,
        items: Vec<String>,
    }

    fn build(parser: CommandLineParser<Target>) -> Result<GeneralParser<Target>, ConfigError> {
        parser.build_with_interface(Box::new(InMemoryInterface::default()))
    }

    #[test]
    fn empty() {
        let error = build(CommandLineParser::new()).unwrap_err();
        assert_eq!(error, ConfigError::NoOptions);
    }

    #[test]
    fn build_options() {
        // Setup
        let parser = CommandLineParser::new()
            .add(Parameter::option(
                Scalar::new(|t: &mut Target| &mut t.count),
                "count",
            ))
            .add(Parameter::verb(
                Optional::new(|t: &mut Target| &mut t.action),
                "action",
            ));

        // Execute
        let general_parser = build(parser).unwrap();
        let (target, errors) = general_parser.parse_tokens(&["go", "--count", "2"]);

        // Verify
        assert_eq!(errors, vec![]);
        assert_eq!(target.action, Some("go".to_string()));
        assert_eq!(target.count, 2);
    }

    #[rstest]
    #[case("count", "COUNT", ConfigError::DuplicateName("COUNT".to_string()))]
    #[case("count", "x", ConfigError::InvalidName("x".to_string()))]
    #[case("count", "", ConfigError::EmptyName)]
    fn build_invalid(#[case] first: &str, #[case] second: &str, #[case] expected: ConfigError) {
        // Setup
        let parser = CommandLineParser::new()
            .add(Parameter::option(
                Scalar::new(|t: &mut Target| &mut t.count),
                first,
            ))
            .add(Parameter::option(
                Scalar::new(|t: &mut Target| &mut t.verbose),
                second,
            ));

        // Execute
        let error = build(parser).unwrap_err();

        // Verify
        assert_eq!(error, expected);
    }

    #[test]
    fn build_settings() {
        // Setup
        let parser = CommandLineParser::new()
            .settings(ParserSettings::default().with_date_time_format("%d.%m.%Y"))
            .settings(ParserSettings::default().with_equal_syntax(false))
            .add(Parameter::option(
                Scalar::new(|t: &mut Target| &mut t.count),
                "count",
            ));

        // Execute
        let general_parser = build(parser).unwrap();

        // Verify
        assert!(!general_parser.settings().equal_syntax());
        assert_eq!(general_parser.settings().date_time_format(), None);
    }

    #[test]
    fn build_modifiers() {
        // Setup
        let parser = CommandLineParser::new()
            .add(
                Parameter::option(Scalar::new(|t: &mut Target| &mut t.verbose), "verbose")
                    .short('v')
                    .mutually_exclusive("noise"),
            )
            .add(
                Parameter::option(Scalar::new(|t: &mut Target| &mut t.quiet), "quiet")
                    .short('q')
                    .mutually_exclusive("Noise"),
            )
            .add(
                Parameter::option(
                    Collection::<_, _, String>::new(|t: &mut Target| &mut t.items),
                    "item",
                )
                .valid_values(["a", "b"]),
            );

        // Execute
        let general_parser = build(parser).unwrap();
        let (target, errors) = general_parser.parse_str("-vq --item b --item c");

        // Verify
        assert_eq!(
            errors
                .iter()
                .map(|e| e.message().to_string())
                .collect::<Vec<_>>(),
            vec![
                "Invalid value for option 'item': c".to_string(),
                "Option 'verbose' cannot be used with option 'quiet'".to_string(),
            ]
        );
        assert!(target.verbose);
        assert!(target.quiet);
        assert_eq!(target.items, Vec::<String>::default());
    }

    #[test]
    fn build_default() {
        let general_parser = CommandLineParser::<Target>::default()
            .add(Parameter::option(
                Scalar::new(|t: &mut Target| &mut t.count),
                "count",
            ))
            .build_parser()
            .unwrap();
        let (target, errors) = general_parser.parse_tokens::<&str>(&[]);

        assert_eq!(errors, vec![]);
        assert_eq!(target.count, 0);
    }
}
