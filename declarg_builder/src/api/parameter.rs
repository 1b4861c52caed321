use crate::api::GenericCapturable;
use crate::model::OptionSpec;
use crate::parser::OptionCapture;

pub(super) struct ParameterInner<T> {
    spec: OptionSpec,
    field: Box<dyn GenericCapturable<T>>,
}

impl<T> std::fmt::Debug for ParameterInner<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let class = if self.spec.verb { "Verb" } else { "Opt" };
        let short = match &self.spec.short {
            Some(s) => format!(" -{s},"),
            None => "".to_string(),
        };

        write!(
            f,
            "{class}[{t}, {base_type}, --{name},{short}]",
            t = std::any::type_name::<T>(),
            base_type = self.spec.base_type,
            name = self.spec.name,
        )
    }
}

impl<T> ParameterInner<T> {
    pub(super) fn into_capture(self) -> OptionCapture<T> {
        let ParameterInner { spec, field } = self;
        (spec, field)
    }
}

/// An option parameter for the command line parser.
/// Used with [`CommandLineParser::add`](./struct.CommandLineParser.html#method.add).
pub struct Parameter<T>(ParameterInner<T>);

impl<T> std::fmt::Debug for Parameter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl<T> Parameter<T> {
    /// Create an option parameter, matched by `--name` on the command line.
    ///
    /// ### Example
    /// ```
    /// # use declarg_builder as declarg;
    /// use declarg::{Parameter, Scalar};
    ///
    /// #[derive(Default)]
    /// struct Options {
    ///     verbose: bool,
    /// }
    ///
    /// Parameter::option(Scalar::new(|o: &mut Options| &mut o.verbose), "verbose");
    /// ```
    pub fn option(field: impl GenericCapturable<T> + 'static, name: impl Into<String>) -> Self {
        Self::create(field, name, false)
    }

    /// Create the verb parameter.
    /// The verb may be supplied as the first bare token, or by name.
    ///
    /// At most one verb is allowed per command line parser, and it may not be a boolean.
    /// The `name` may be empty, in which case the verb is only ever matched as the first bare token.
    ///
    /// ### Example
    /// ```
    /// # use declarg_builder as declarg;
    /// use declarg::{Optional, Parameter};
    ///
    /// #[derive(Default)]
    /// struct Options {
    ///     action: Option<String>,
    /// }
    ///
    /// Parameter::verb(Optional::new(|o: &mut Options| &mut o.action), "action");
    /// ```
    pub fn verb(field: impl GenericCapturable<T> + 'static, name: impl Into<String>) -> Self {
        Self::create(field, name, true)
    }

    fn create(
        field: impl GenericCapturable<T> + 'static,
        name: impl Into<String>,
        verb: bool,
    ) -> Self {
        let spec = OptionSpec::new(name, verb, field.base_type(), field.container());
        Self(ParameterInner {
            spec,
            field: Box::new(field),
        })
    }

    /// Set the single character alias for this parameter, matched by `-x` on the command line.
    /// If repeated, only the final alias will apply to the parameter.
    ///
    /// ### Example
    /// ```
    /// # use declarg_builder as declarg;
    /// use declarg::{Parameter, Scalar};
    ///
    /// #[derive(Default)]
    /// struct Options {
    ///     verbose: bool,
    /// }
    ///
    /// Parameter::option(Scalar::new(|o: &mut Options| &mut o.verbose), "verbose")
    ///     .short('v');
    /// ```
    pub fn short(self, short: char) -> Self {
        let mut inner = self.0;
        inner.spec.short = Some(short);
        Self(inner)
    }

    /// Document the section (or group) this parameter belongs to.
    /// If repeated, only the final section will apply to the parameter.
    pub fn section(self, section: impl Into<String>) -> Self {
        let mut inner = self.0;
        inner.spec.section = Some(section.into());
        Self(inner)
    }

    /// Document the description message for this parameter.
    /// If repeated, only the final message will apply to the parameter.
    ///
    /// ### Example
    /// ```
    /// # use declarg_builder as declarg;
    /// use declarg::{Parameter, Scalar};
    ///
    /// #[derive(Default)]
    /// struct Options {
    ///     verbose: bool,
    /// }
    ///
    /// Parameter::option(Scalar::new(|o: &mut Options| &mut o.verbose), "verbose")
    ///     .description("--this will get discarded--")
    ///     .description("Make the program output verbose.");
    /// ```
    pub fn description(self, description: impl Into<String>) -> Self {
        let mut inner = self.0;
        inner.spec.description = Some(description.into());
        Self(inner)
    }

    /// Require this parameter to be set.
    /// A boolean parameter may not be required.
    ///
    /// When combined with [`Parameter::only_for_verbs`], the parameter is required only for those verbs.
    pub fn required(self) -> Self {
        let mut inner = self.0;
        inner.spec.required = true;
        Self(inner)
    }

    /// Limit the values accepted by this parameter.
    /// If repeated, only the final values will apply to the parameter.
    ///
    /// Each value must convert to the parameter's type.
    /// Values are compared after conversion, so for example enum members match case-insensitively.
    ///
    /// ### Example
    /// ```
    /// # use declarg_builder as declarg;
    /// use declarg::{Optional, Parameter};
    ///
    /// #[derive(Default)]
    /// struct Options {
    ///     shape: Option<String>,
    /// }
    ///
    /// Parameter::option(Optional::new(|o: &mut Options| &mut o.shape), "shape")
    ///     .valid_values(["circle", "square"]);
    /// ```
    pub fn valid_values(self, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut inner = self.0;
        inner.spec.valid_values = values.into_iter().map(|s| s.into()).collect();
        Self(inner)
    }

    /// Limit this parameter to the specified verbs.
    /// If repeated, only the final verbs will apply to the parameter.
    ///
    /// Each verb must convert to the type of the verb parameter.
    ///
    /// ### Example
    /// ```
    /// # use declarg_builder as declarg;
    /// use declarg::{Optional, Parameter};
    ///
    /// #[derive(Default)]
    /// struct Options {
    ///     port: Option<i32>,
    /// }
    ///
    /// Parameter::option(Optional::new(|o: &mut Options| &mut o.port), "port")
    ///     .only_for_verbs(["serve", "connect"]);
    /// ```
    pub fn only_for_verbs(self, verbs: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut inner = self.0;
        inner.spec.only_for_verbs = verbs.into_iter().map(|s| s.into()).collect();
        Self(inner)
    }

    /// Set the default value for this parameter, which is applied before parsing.
    /// The default must convert to the parameter's type (and respect the valid values, if any).
    ///
    /// Neither the verb nor a boolean parameter may have a default.
    /// A default does not count as setting the parameter.
    pub fn default_value(self, value: impl Into<String>) -> Self {
        let mut inner = self.0;
        inner.spec.default_value = Some(value.into());
        Self(inner)
    }

    /// Place this parameter in a mutually exclusive group, identified by the `tag` (case-insensitive).
    /// At most one parameter of a group may be set on the command line.
    ///
    /// ### Example
    /// ```
    /// # use declarg_builder as declarg;
    /// use declarg::{Parameter, Scalar};
    ///
    /// #[derive(Default)]
    /// struct Options {
    ///     quiet: bool,
    ///     loud: bool,
    /// }
    ///
    /// Parameter::option(Scalar::new(|o: &mut Options| &mut o.quiet), "quiet")
    ///     .mutually_exclusive("volume");
    /// Parameter::option(Scalar::new(|o: &mut Options| &mut o.loud), "loud")
    ///     .mutually_exclusive("volume");
    /// ```
    pub fn mutually_exclusive(self, tag: impl Into<String>) -> Self {
        let mut inner = self.0;
        inner.spec.mutually_exclusive = Some(tag.into());
        Self(inner)
    }

    pub(super) fn consume(self) -> ParameterInner<T> {
        self.0
    }
}
