//! crates/logging/src/timestamp.rs
//! Wall-clock timestamps in the `YY-MM-DD HH:MM:SS` layout.

use std::time::SystemTime;

use time::format_description::FormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

/// Layout of the timestamp column, e.g. `24-06-15 09:23:01`.
pub const TIMESTAMP_FORMAT: &[FormatItem<'static>] = format_description!(
    "[year repr:last_two]-[month padding:zero]-[day padding:zero] [hour padding:zero]:[minute padding:zero]:[second padding:zero]"
);

/// Rendered in place of a timestamp that cannot be formatted.
const FALLBACK_TIMESTAMP: &str = "70-01-01 00:00:00";

/// Returns the current local time formatted with [`TIMESTAMP_FORMAT`].
///
/// When the local UTC offset cannot be determined (the `time` crate refuses to
/// read it while other threads may be mutating the environment), UTC is used.
#[must_use]
pub fn now() -> String {
    let now = OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::from(SystemTime::now()));
    format(now)
}

/// Formats `moment` with [`TIMESTAMP_FORMAT`].
#[must_use]
pub fn format(moment: OffsetDateTime) -> String {
    moment
        .format(TIMESTAMP_FORMAT)
        .unwrap_or_else(|_| FALLBACK_TIMESTAMP.to_owned())
}
