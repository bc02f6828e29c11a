//! DateTime display utilities.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Formats a stored `updated_at` string in the system timezone.
///
/// Stored values are free-form ISO-8601 strings, and older records carry
/// timestamps without an offset. Anything that does not parse as an instant
/// is printed as stored.
///
/// # Format
///
/// `YYYY-MM-DD HH:MM:SS TZ` for parseable instants.
pub struct StepTime<'a>(pub &'a str);

impl fmt::Display for StepTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.parse::<Timestamp>() {
            Ok(ts) => write!(
                f,
                "{}",
                ts.to_zoned(TimeZone::system())
                    .strftime("%Y-%m-%d %H:%M:%S %Z")
            ),
            Err(_) => write!(f, "{}", self.0),
        }
    }
}
