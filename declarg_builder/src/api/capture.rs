use thiserror::Error;

use crate::model::{BaseType, ContainerKind, Value};

/// Behaviour to capture a coerced [`Value`] into a field of the target type T.
///
/// We use this at the bottom of the command line parser object graph so the compiler can maintain each field's type.
#[doc(hidden)]
pub trait GenericCapturable<T> {
    /// The base type of the field.
    fn base_type(&self) -> BaseType;

    /// How the field wraps its base type.
    fn container(&self) -> ContainerKind;

    /// Capture a value into the field of the target.
    fn capture(&self, target: &mut T, value: Value) -> Result<(), InvalidCapture>;

    /// Reset the field of the target to its default.
    fn reset(&self, target: &mut T);
}

#[derive(Debug, Error, PartialEq)]
#[doc(hidden)]
pub enum InvalidCapture {
    /// The coerced value does not convert into the field's type.
    #[error("cannot convert '{value}' to {type_name}.")]
    InvalidConversion {
        /// The offending value.
        value: Value,
        /// The field's type.
        type_name: &'static str,
    },
}
