use chrono::{SecondsFormat, Utc};

/// Current UTC time as an RFC 3339 string with millisecond precision and a `Z`
/// suffix, e.g. `2024-01-01T12:00:00.000Z`. Values sort lexically.
pub fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
