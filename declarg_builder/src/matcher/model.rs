use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MatchState {
    Idle,
    AwaitingValue(usize),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum MatchError {
    #[error("Unknown option '{0}'")]
    UnknownOption(String),

    #[error("Value without option: '{0}'")]
    ValueWithoutOption(String),

    #[error("Missing value for option '{0}'")]
    MissingValue(String),

    #[error("Cannot set option '{0}' with multiple switch (only boolean options supported)")]
    MultipleSwitch(String),
}

impl MatchError {
    /// The option this error refers to; token level errors refer to none.
    pub(crate) fn option_name(&self) -> Option<&str> {
        match self {
            MatchError::UnknownOption(_) | MatchError::ValueWithoutOption(_) => None,
            MatchError::MissingValue(name) | MatchError::MultipleSwitch(name) => {
                Some(name.as_str())
            }
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum MatchEvent {
    Assign { option: usize, value: String },
    Error(MatchError),
}
