use thiserror::Error;

use crate::api::GenericCapturable;
use crate::coerce::{coerce, CoerceError};
use crate::matcher::*;
use crate::model::{ContainerKind, OptionSpec, ParserSettings, Value};
use crate::parser::schema::{coerce_all, validate, ConfigError};
use crate::tokens::expand_equal_syntax;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

// We need a (dyn .. [ignoring F] ..) here in order to put all the fields of varying types F under one collection.
// In other words, we want the bottom of the object graph to include the field types F, but up here we want to work across all F.
pub(crate) type OptionCapture<T> = (OptionSpec, Box<dyn GenericCapturable<T>>);

/// An error encountered while parsing.
///
/// Every error of a parse is collected; parsing never stops at the first one.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct ParseError {
    option_name: Option<String>,
    message: String,
}

impl ParseError {
    fn new(option_name: Option<&str>, message: String) -> Self {
        Self {
            option_name: option_name
                .filter(|name| !name.is_empty())
                .map(str::to_string),
            message,
        }
    }

    /// The name of the option this error refers to (`None` for errors that refer to no option, such as an unknown option).
    pub fn option_name(&self) -> Option<&str> {
        self.option_name.as_deref()
    }

    /// The error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<MatchError> for ParseError {
    fn from(error: MatchError) -> Self {
        ParseError::new(error.option_name(), error.to_string())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum ValidationError {
    #[error("Invalid value for verb option: {raw}")]
    InvalidVerbValue { name: String, raw: String },

    #[error("Invalid value for option '{name}' (expected {label}): {raw}")]
    InvalidValue {
        name: String,
        label: &'static str,
        raw: String,
    },

    #[error("Option '{name}' set multiple times")]
    SetMultipleTimes { name: String },

    #[error("Invalid value for option '{name}': {value}")]
    NotValidValue { name: String, value: String },

    #[error("Option '{name}' can be set only for specific verbs but no verb has been specified")]
    NoVerbSpecified { name: String },

    #[error("Option '{name}' is not valid for verb {verb}")]
    NotValidForVerb { name: String, verb: String },

    #[error("Required verb option not set")]
    RequiredVerb { name: String },

    #[error("Required option '{name}' not set")]
    Required { name: String },

    #[error("Option '{name}' cannot be used with option '{other}'")]
    MutuallyExclusive { name: String, other: String },
}

impl ValidationError {
    fn option_name(&self) -> &str {
        match self {
            ValidationError::InvalidVerbValue { name, .. }
            | ValidationError::InvalidValue { name, .. }
            | ValidationError::SetMultipleTimes { name }
            | ValidationError::NotValidValue { name, .. }
            | ValidationError::NoVerbSpecified { name }
            | ValidationError::NotValidForVerb { name, .. }
            | ValidationError::RequiredVerb { name }
            | ValidationError::Required { name }
            | ValidationError::MutuallyExclusive { name, .. } => name,
        }
    }
}

impl From<ValidationError> for ParseError {
    fn from(error: ValidationError) -> Self {
        ParseError::new(Some(error.option_name()), error.to_string())
    }
}

/// The mutable state of a single parse.
#[derive(Debug)]
pub(crate) struct ParseContext {
    verb_value: Option<Value>,
    is_set: Vec<bool>,
    errors: Vec<ParseError>,
}

impl ParseContext {
    fn new(options: usize) -> Self {
        Self {
            verb_value: None,
            is_set: vec![false; options],
            errors: Vec::default(),
        }
    }

    fn error(&mut self, error: impl Into<ParseError>) {
        self.errors.push(error.into());
    }
}

pub(crate) struct Parser<T> {
    specs: Vec<OptionSpec>,
    fields: Vec<Box<dyn GenericCapturable<T>>>,
    table: OptionTable,
    verb: Option<usize>,
}

impl<T> std::fmt::Debug for Parser<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser{..}").finish()
    }
}

impl From<&OptionSpec> for OptionConfig {
    fn from(value: &OptionSpec) -> Self {
        OptionConfig::new(value.name.clone(), value.short, value.is_switch(), value.verb)
    }
}

impl<T> Parser<T> {
    /// Normalize the declaration order (verb first) and validate the declarations.
    pub(crate) fn new(
        captures: Vec<OptionCapture<T>>,
        settings: &ParserSettings,
    ) -> Result<Self, ConfigError> {
        let mut captures = captures;
        captures.sort_by_key(|(spec, _)| !spec.verb);
        let (specs, fields): (Vec<OptionSpec>, Vec<Box<dyn GenericCapturable<T>>>) =
            captures.into_iter().unzip();
        validate(&specs, settings)?;
        let table = OptionTable::new(specs.iter().map(OptionConfig::from).collect());
        let verb = table.verb();

        Ok(Self {
            specs,
            fields,
            table,
            verb,
        })
    }

    pub(crate) fn validate(&self, settings: &ParserSettings) -> Result<(), ConfigError> {
        validate(&self.specs, settings)
    }

    pub(crate) fn specs(&self) -> &[OptionSpec] {
        &self.specs
    }
}

impl<T: Default> Parser<T> {
    pub(crate) fn consume<S: AsRef<str>>(
        &self,
        tokens: &[S],
        settings: &ParserSettings,
    ) -> (T, Vec<ParseError>) {
        let tokens: Vec<String> = if settings.equal_syntax() {
            expand_equal_syntax(tokens)
        } else {
            tokens.iter().map(|t| t.as_ref().to_string()).collect()
        };
        let mut target = T::default();
        let mut context = ParseContext::new(self.specs.len());
        self.apply_defaults(&mut target, settings);

        let mut token_matcher = TokenMatcher::new(&self.table);

        for token in &tokens {
            token_matcher.feed(token);
        }

        for event in token_matcher.close() {
            match event {
                MatchEvent::Assign { option, value } => {
                    self.assign(&mut target, &mut context, option, &value, settings)
                }
                MatchEvent::Error(error) => context.error(error),
            }
        }

        self.check_required(&mut context, settings);
        self.check_mutually_exclusive(&mut context);

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Parsed {} tokens with {} errors.",
                tokens.len(),
                context.errors.len()
            );
        }

        (target, context.errors)
    }

    fn apply_defaults(&self, target: &mut T, settings: &ParserSettings) {
        for (spec, field) in self.specs.iter().zip(self.fields.iter()) {
            if let Some(default_value) = &spec.default_value {
                // The schema guarantees the default coerces.
                if let Ok(value) = coerce(spec.base_type, default_value, settings) {
                    // The value has the field's own base type, so the capture cannot fail.
                    let _ = field.capture(target, value);
                }
            }
        }
    }

    fn assign(
        &self,
        target: &mut T,
        context: &mut ParseContext,
        index: usize,
        raw: &str,
        settings: &ParserSettings,
    ) {
        let spec = &self.specs[index];
        let field = &self.fields[index];

        let value = match coerce(spec.base_type, raw, settings) {
            Ok(value) => value,
            Err(error) => {
                context.error(self.invalid_value(spec, error));
                return;
            }
        };

        if spec.verb {
            context.verb_value = Some(value.clone());
        }

        if spec.container == ContainerKind::Collection || !context.is_set[index] {
            if field.capture(target, value.clone()).is_err() {
                let error = CoerceError {
                    token: raw.to_string(),
                    expected: spec.base_type.label(),
                };
                context.error(self.invalid_value(spec, error));
                return;
            }
        } else {
            context.error(ValidationError::SetMultipleTimes {
                name: spec.name.clone(),
            });
        }

        if !spec.valid_values.is_empty() {
            let valid_values = coerce_all(spec.base_type, &spec.valid_values, settings)
                .unwrap_or_default();

            if !valid_values.contains(&value) {
                field.reset(target);
                context.error(ValidationError::NotValidValue {
                    name: spec.name.clone(),
                    value: value.to_string(),
                });
            }
        }

        if !spec.only_for_verbs.is_empty() {
            match context.verb_value.clone() {
                None => {
                    context.error(ValidationError::NoVerbSpecified {
                        name: spec.name.clone(),
                    });
                }
                Some(verb_value) => {
                    if !self.applies_to(spec, &verb_value, settings) {
                        let verb = verb_value.to_string();
                        field.reset(target);
                        context.error(ValidationError::NotValidForVerb {
                            name: spec.name.clone(),
                            verb,
                        });
                    }
                }
            }
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Assigned '{raw}' to '{}'.", spec.name);
        }

        context.is_set[index] = true;
    }

    fn invalid_value(&self, spec: &OptionSpec, error: CoerceError) -> ValidationError {
        if spec.verb {
            ValidationError::InvalidVerbValue {
                name: spec.name.clone(),
                raw: error.token,
            }
        } else {
            ValidationError::InvalidValue {
                name: spec.name.clone(),
                label: error.expected,
                raw: error.token,
            }
        }
    }

    /// Whether the `spec`'s only-for-verbs contains the `verb_value`.
    fn applies_to(&self, spec: &OptionSpec, verb_value: &Value, settings: &ParserSettings) -> bool {
        match self.verb {
            Some(verb) => coerce_all(self.specs[verb].base_type, &spec.only_for_verbs, settings)
                .unwrap_or_default()
                .contains(verb_value),
            None => false,
        }
    }

    fn check_required(&self, context: &mut ParseContext, settings: &ParserSettings) {
        for (index, spec) in self.specs.iter().enumerate() {
            if !spec.required || context.is_set[index] {
                continue;
            }

            let name = spec.name.clone();

            if spec.verb {
                context.error(ValidationError::RequiredVerb { name });
            } else if spec.only_for_verbs.is_empty() {
                context.error(ValidationError::Required { name });
            } else {
                let applies = match &context.verb_value {
                    Some(verb_value) => self.applies_to(spec, verb_value, settings),
                    // Without a verb the option is treated as plainly required.
                    None => true,
                };

                if applies {
                    context.error(ValidationError::Required { name });
                }
            }
        }
    }

    fn check_mutually_exclusive(&self, context: &mut ParseContext) {
        for (i, spec) in self.specs.iter().enumerate() {
            let tag = match spec.mutually_exclusive.as_deref() {
                Some(tag) if !tag.is_empty() && context.is_set[i] => tag.to_lowercase(),
                _ => continue,
            };

            for (j, other) in self.specs.iter().enumerate().skip(i + 1) {
                let shared = other
                    .mutually_exclusive
                    .as_deref()
                    .map_or(false, |other_tag| other_tag.to_lowercase() == tag);

                if shared && context.is_set[j] {
                    context.error(ValidationError::MutuallyExclusive {
                        name: spec.name.clone(),
                        other: other.name.clone(),
                    });
                }
            }
        }
    }
}
