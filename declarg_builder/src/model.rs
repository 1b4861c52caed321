use chrono::NaiveDateTime;
use url::Url;

/// The semantic type of an option, after removing any collection or [`Option`] wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseType {
    /// Any text.
    String,
    /// `true` via `"true"` or `"1"` (case-insensitive); anything else is rejected.
    Bool,
    /// A 32-bit signed integer.
    Int,
    /// A 64-bit signed integer.
    Long,
    /// A 32-bit float.
    Float,
    /// A 64-bit float.
    Double,
    /// A closed set of named members, matched case-insensitively.
    Enum {
        /// The type name of the enum (used as the expected-type label).
        name: &'static str,
        /// The declared member names, in declaration order.
        members: &'static [&'static str],
    },
    /// A calendar date and time without timezone.
    DateTime,
    /// An absolute url.
    Uri,
}

impl BaseType {
    /// The label used in "expected ..." error messages.
    pub fn label(&self) -> &'static str {
        match self {
            BaseType::String => "string",
            BaseType::Bool => "bool",
            BaseType::Int => "int",
            BaseType::Long => "long",
            BaseType::Float => "float",
            BaseType::Double => "double",
            BaseType::Enum { name, .. } => name,
            BaseType::DateTime => "DateTime",
            BaseType::Uri => "Uri",
        }
    }
}

impl std::fmt::Display for BaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A coerced option value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A [`BaseType::String`] value.
    Str(String),
    /// A [`BaseType::Bool`] value.
    Bool(bool),
    /// A [`BaseType::Int`] value.
    Int(i32),
    /// A [`BaseType::Long`] value.
    Long(i64),
    /// A [`BaseType::Float`] value.
    Float(f32),
    /// A [`BaseType::Double`] value.
    Double(f64),
    /// A [`BaseType::Enum`] member.
    Enum {
        /// Position of the member in the declaration order.
        index: usize,
        /// The declared member name.
        name: &'static str,
    },
    /// A [`BaseType::DateTime`] value.
    DateTime(NaiveDateTime),
    /// A [`BaseType::Uri`] value.
    Uri(Url),
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Str(value) => write!(f, "{value}"),
            Value::Bool(value) => write!(f, "{value}"),
            Value::Int(value) => write!(f, "{value}"),
            Value::Long(value) => write!(f, "{value}"),
            Value::Float(value) => write!(f, "{value}"),
            Value::Double(value) => write!(f, "{value}"),
            Value::Enum { name, .. } => write!(f, "{name}"),
            Value::DateTime(value) => write!(f, "{value}"),
            Value::Uri(value) => write!(f, "{value}"),
        }
    }
}

/// How the option's field wraps its base type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    /// The field is the base type itself.
    Scalar,
    /// The field is an [`Option`] of the base type.
    Optional,
    /// The field collects every occurrence of the base type (see [`Collectable`](crate::prelude::Collectable)).
    Collection,
}

/// The declared metadata of a single option.
///
/// Built via [`Parameter`](crate::Parameter); exposed for inspection only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec {
    pub(crate) name: String,
    pub(crate) short: Option<char>,
    pub(crate) section: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) required: bool,
    pub(crate) verb: bool,
    pub(crate) valid_values: Vec<String>,
    pub(crate) only_for_verbs: Vec<String>,
    pub(crate) default_value: Option<String>,
    pub(crate) mutually_exclusive: Option<String>,
    pub(crate) base_type: BaseType,
    pub(crate) container: ContainerKind,
}

impl OptionSpec {
    pub(crate) fn new(
        name: impl Into<String>,
        verb: bool,
        base_type: BaseType,
        container: ContainerKind,
    ) -> Self {
        Self {
            name: name.into(),
            short: None,
            section: None,
            description: None,
            required: false,
            verb,
            valid_values: Vec::default(),
            only_for_verbs: Vec::default(),
            default_value: None,
            mutually_exclusive: None,
            base_type,
            container,
        }
    }

    /// The long name (matched as `--name`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The single character alias (matched as `-x`).
    pub fn short(&self) -> Option<char> {
        self.short
    }

    /// The display section.
    pub fn section(&self) -> Option<&str> {
        self.section.as_deref()
    }

    /// The display description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Whether the option must be set.
    pub fn required(&self) -> bool {
        self.required
    }

    /// Whether this is the verb option.
    pub fn verb(&self) -> bool {
        self.verb
    }

    /// The raw values this option is restricted to.
    pub fn valid_values(&self) -> &[String] {
        &self.valid_values
    }

    /// The raw verb values for which this option applies.
    pub fn only_for_verbs(&self) -> &[String] {
        &self.only_for_verbs
    }

    /// The raw value written before parsing.
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    /// The mutually exclusive group tag.
    pub fn mutually_exclusive(&self) -> Option<&str> {
        self.mutually_exclusive.as_deref()
    }

    /// The base type of the bound field.
    pub fn base_type(&self) -> BaseType {
        self.base_type
    }

    /// The container kind of the bound field.
    pub fn container(&self) -> ContainerKind {
        self.container
    }

    /// Whether this option is a boolean switch (a `bool` scalar or optional).
    pub fn is_switch(&self) -> bool {
        self.base_type == BaseType::Bool && self.container != ContainerKind::Collection
    }
}

/// Settings that affect how tokens are split and values are coerced.
///
/// ### Example
/// ```
/// # use declarg_builder as declarg;
/// use declarg::ParserSettings;
///
/// let settings = ParserSettings::default()
///     .with_equal_syntax(false)
///     .with_date_time_format("%d.%m.%Y %H:%M");
///
/// assert!(!settings.equal_syntax());
/// assert_eq!(settings.date_time_format(), Some("%d.%m.%Y %H:%M"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserSettings {
    equal_syntax: bool,
    date_time_format: Option<String>,
}

impl Default for ParserSettings {
    fn default() -> Self {
        Self {
            equal_syntax: true,
            date_time_format: None,
        }
    }
}

impl ParserSettings {
    /// Enable or disable the `--name=value` syntax (enabled by default).
    pub fn with_equal_syntax(mut self, enabled: bool) -> Self {
        self.equal_syntax = enabled;
        self
    }

    /// Use an exact [`chrono` format](https://docs.rs/chrono/latest/chrono/format/strftime/index.html) for date-time options.
    /// Without one, a permissive set of ISO-like formats is tried.
    pub fn with_date_time_format(mut self, format: impl Into<String>) -> Self {
        self.date_time_format.replace(format.into());
        self
    }

    /// Whether the `--name=value` syntax is enabled.
    pub fn equal_syntax(&self) -> bool {
        self.equal_syntax
    }

    /// The configured date-time format, if any.
    pub fn date_time_format(&self) -> Option<&str> {
        self.date_time_format.as_deref()
    }
}
