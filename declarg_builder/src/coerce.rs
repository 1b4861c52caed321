use chrono::{DateTime, NaiveDate, NaiveDateTime};
use thiserror::Error;
use url::Url;

use crate::constant::*;
use crate::model::{BaseType, ParserSettings, Value};
use crate::prelude::Coercible;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("cannot convert '{token}' to {expected}.")]
pub(crate) struct CoerceError {
    pub(crate) token: String,
    pub(crate) expected: &'static str,
}

/// Convert the raw `token` into a [`Value`] of `base_type`.
pub(crate) fn coerce(
    base_type: BaseType,
    token: &str,
    settings: &ParserSettings,
) -> Result<Value, CoerceError> {
    let error = || CoerceError {
        token: token.to_string(),
        expected: base_type.label(),
    };

    match base_type {
        BaseType::String => Ok(Value::Str(token.to_string())),
        BaseType::Bool => {
            let normalized = token.trim().to_lowercase();

            if normalized == "true" || normalized == "1" {
                Ok(Value::Bool(true))
            } else {
                Err(error())
            }
        }
        BaseType::Int => token.parse().map(Value::Int).map_err(|_| error()),
        BaseType::Long => token.parse().map(Value::Long).map_err(|_| error()),
        // NaN and infinities are rejected, since they never compare equal to a valid value.
        BaseType::Float => token
            .parse::<f32>()
            .ok()
            .filter(|value| value.is_finite())
            .map(Value::Float)
            .ok_or_else(error),
        BaseType::Double => token
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(Value::Double)
            .ok_or_else(error),
        BaseType::Enum { members, .. } => {
            let lowered = token.to_lowercase();
            members
                .iter()
                .enumerate()
                .find(|(_, member)| member.to_lowercase() == lowered)
                .map(|(index, member)| Value::Enum {
                    index,
                    name: *member,
                })
                .ok_or_else(error)
        }
        BaseType::DateTime => coerce_date_time(token, settings.date_time_format())
            .map(Value::DateTime)
            .ok_or_else(error),
        BaseType::Uri => Url::parse(token).map(Value::Uri).map_err(|_| error()),
    }
}

fn coerce_date_time(token: &str, format: Option<&str>) -> Option<NaiveDateTime> {
    match format {
        Some(format) => parse_date_time(token, format).or_else(|| parse_date(token, format)),
        None => {
            if let Ok(date_time) = DateTime::parse_from_rfc3339(token) {
                return Some(date_time.naive_local());
            }

            let result = DATE_TIME_FORMATS
                .iter()
                .find_map(|format| parse_date_time(token, format))
                .or_else(|| {
                    DATE_FORMATS
                        .iter()
                        .find_map(|format| parse_date(token, format))
                });

            #[cfg(feature = "tracing_debug")]
            {
                debug!("Permissive date-time parse of '{token}': {result:?}.");
            }

            result
        }
    }
}

fn parse_date_time(token: &str, format: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(token, format).ok()
}

fn parse_date(token: &str, format: &str) -> Option<NaiveDateTime> {
    NaiveDate::parse_from_str(token, format)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

macro_rules! coercible {
    ($type:ty, $base_type:expr, $variant:ident) => {
        impl Coercible for $type {
            fn base_type() -> BaseType {
                $base_type
            }

            fn from_value(value: Value) -> Option<Self> {
                match value {
                    Value::$variant(inner) => Some(inner),
                    _ => None,
                }
            }
        }
    };
}

coercible!(String, BaseType::String, Str);
coercible!(bool, BaseType::Bool, Bool);
coercible!(i32, BaseType::Int, Int);
coercible!(i64, BaseType::Long, Long);
coercible!(f32, BaseType::Float, Float);
coercible!(f64, BaseType::Double, Double);
coercible!(NaiveDateTime, BaseType::DateTime, DateTime);
coercible!(Url, BaseType::Uri, Uri);
