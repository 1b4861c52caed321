/// The raw token assigned to a boolean option when it is matched by name or short name.
pub(crate) const SWITCH_VALUE: &str = "true";

/// Formats tried, in order, when no explicit date-time format is configured.
pub(crate) const DATE_TIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Date-only formats tried after [`DATE_TIME_FORMATS`]; these resolve to midnight.
pub(crate) const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

pub(crate) const MINIMUM_NAME_LENGTH: usize = 2;
