use std::collections::HashSet;
use thiserror::Error;

use crate::coerce::coerce;
use crate::constant::*;
use crate::matcher::fold;
use crate::model::{BaseType, ContainerKind, OptionSpec, ParserSettings, Value};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A self-contradictory command line parser configuration.
///
/// Returned when the parser is built, before any parsing happens.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// No options were declared.
    #[error("Config error: no options declared.")]
    NoOptions,

    /// More than one option was declared as the verb.
    #[error("Config error: only one option can be declared as verb ('{0}' and '{1}').")]
    MultipleVerbs(String, String),

    /// The verb option is a bool.
    #[error("Config error: verb option '{0}' cannot be a bool.")]
    VerbIsBool(String),

    /// A non-verb option has an empty name.
    #[error("Config error: empty option name.")]
    EmptyName,

    /// An option name contains whitespace, starts with '-', or is too short.
    #[error("Config error: invalid option name '{0}'.")]
    InvalidName(String),

    /// Two options share a name (case-insensitive).
    #[error("Config error: duplicated option name '{0}'.")]
    DuplicateName(String),

    /// Two options share a short name (case-insensitive).
    #[error("Config error: duplicated option short name '{0}'.")]
    DuplicateShort(char),

    /// A boolean option was marked as required.
    #[error("Config error: bool option '{0}' cannot be required.")]
    RequiredBool(String),

    /// A default value was declared on a bool, collection or verb option.
    #[error("Config error: option '{0}' cannot have a default value.")]
    DefaultNotAllowed(String),

    /// Both valid values and only-for-verbs were declared.
    #[error("Config error: cannot set both valid values and only for verbs for option '{0}'.")]
    ValidValuesAndOnlyForVerbs(String),

    /// A valid value does not coerce to the option's base type.
    #[error("Config error: invalid valid value for option '{name}': {value}.")]
    InvalidValidValue {
        /// The option name.
        name: String,
        /// The offending raw value.
        value: String,
    },

    /// The default value does not coerce to the option's base type.
    #[error("Config error: invalid default value for option '{name}': {value}.")]
    InvalidDefault {
        /// The option name.
        name: String,
        /// The offending raw value.
        value: String,
    },

    /// The default value is not one of the option's valid values.
    #[error("Config error: default value for option '{name}' is not a valid value: {value}.")]
    DefaultNotValid {
        /// The option name.
        name: String,
        /// The offending raw value.
        value: String,
    },

    /// Only-for-verbs was declared on the verb itself.
    #[error("Config error: verb option '{0}' cannot have only for verbs set.")]
    VerbOnlyForVerbs(String),

    /// Only-for-verbs was declared, but there is no verb.
    #[error("Config error: only for verbs set for option '{0}' but no verb defined.")]
    OnlyForVerbsWithoutVerb(String),

    /// An only-for-verbs entry does not coerce to the verb's base type.
    #[error("Config error: invalid only for verbs for option '{name}': {value}.")]
    InvalidOnlyForVerbs {
        /// The option name.
        name: String,
        /// The offending raw value.
        value: String,
    },
}

/// Validate the option declarations against each other.
pub(crate) fn validate(specs: &[OptionSpec], settings: &ParserSettings) -> Result<(), ConfigError> {
    if specs.is_empty() {
        return Err(ConfigError::NoOptions);
    }

    let mut verb: Option<&OptionSpec> = None;

    for spec in specs.iter().filter(|spec| spec.verb) {
        if let Some(previous) = verb {
            return Err(ConfigError::MultipleVerbs(
                previous.name.clone(),
                spec.name.clone(),
            ));
        }

        if spec.base_type == BaseType::Bool {
            return Err(ConfigError::VerbIsBool(spec.name.clone()));
        }

        verb.replace(spec);
    }

    let mut names: HashSet<String> = HashSet::default();
    let mut shorts: HashSet<char> = HashSet::default();

    for spec in specs {
        validate_name(spec)?;

        if !spec.name.is_empty() && !names.insert(spec.name.to_lowercase()) {
            return Err(ConfigError::DuplicateName(spec.name.clone()));
        }

        if let Some(short) = spec.short {
            if !shorts.insert(fold(short)) {
                return Err(ConfigError::DuplicateShort(short));
            }
        }

        if spec.is_switch() && spec.required {
            return Err(ConfigError::RequiredBool(spec.name.clone()));
        }

        if spec.default_value.is_some()
            && (spec.verb
                || spec.base_type == BaseType::Bool
                || spec.container == ContainerKind::Collection)
        {
            return Err(ConfigError::DefaultNotAllowed(spec.name.clone()));
        }

        if !spec.valid_values.is_empty() && !spec.only_for_verbs.is_empty() {
            return Err(ConfigError::ValidValuesAndOnlyForVerbs(spec.name.clone()));
        }

        let valid_values = coerce_all(spec.base_type, &spec.valid_values, settings).map_err(
            |value| ConfigError::InvalidValidValue {
                name: spec.name.clone(),
                value,
            },
        )?;

        if !spec.only_for_verbs.is_empty() {
            if spec.verb {
                return Err(ConfigError::VerbOnlyForVerbs(spec.name.clone()));
            }

            let verb =
                verb.ok_or_else(|| ConfigError::OnlyForVerbsWithoutVerb(spec.name.clone()))?;
            coerce_all(verb.base_type, &spec.only_for_verbs, settings).map_err(|value| {
                ConfigError::InvalidOnlyForVerbs {
                    name: spec.name.clone(),
                    value,
                }
            })?;
        }

        if let Some(default_value) = &spec.default_value {
            let value = coerce(spec.base_type, default_value, settings).map_err(|_| {
                ConfigError::InvalidDefault {
                    name: spec.name.clone(),
                    value: default_value.clone(),
                }
            })?;

            if !valid_values.is_empty() && !valid_values.contains(&value) {
                return Err(ConfigError::DefaultNotValid {
                    name: spec.name.clone(),
                    value: default_value.clone(),
                });
            }
        }
    }

    #[cfg(feature = "tracing_debug")]
    {
        debug!(
            "Validated {} options (verb: {:?}).",
            specs.len(),
            verb.map(|spec| &spec.name)
        );
    }

    Ok(())
}

fn validate_name(spec: &OptionSpec) -> Result<(), ConfigError> {
    let name = &spec.name;

    if name.is_empty() {
        if spec.verb {
            return Ok(());
        }

        return Err(ConfigError::EmptyName);
    }

    if name.chars().any(char::is_whitespace)
        || name.starts_with('-')
        || name.chars().count() < MINIMUM_NAME_LENGTH
    {
        return Err(ConfigError::InvalidName(name.clone()));
    }

    Ok(())
}

/// Coerce every raw value, or return the first one that does not coerce.
pub(crate) fn coerce_all(
    base_type: BaseType,
    raw_values: &[String],
    settings: &ParserSettings,
) -> Result<Vec<Value>, String> {
    raw_values
        .iter()
        .map(|raw| coerce(base_type, raw, settings).map_err(|_| raw.clone()))
        .collect()
}
