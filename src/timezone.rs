//! Resolving the local calendar day from a canonical timezone name.

use time::{Date, OffsetDateTime, UtcOffset};
use time_tz::{Offset, TimeZone};

use crate::Error;

/// Get the UTC offset currently in effect for `canonical_timezone`,
/// e.g. "Pacific/Auckland".
pub fn get_local_offset(canonical_timezone: &str) -> Option<UtcOffset> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .map(|tz| tz.get_offset_utc(&OffsetDateTime::now_utc()).to_utc())
}

/// The current calendar day in `canonical_timezone`.
///
/// The aggregation windows are anchored to the user's local day, not UTC,
/// so an expense recorded late in the evening lands on the right day.
///
/// # Errors
/// Returns [Error::InvalidTimezone] if the timezone name is not a valid
/// canonical timezone string.
pub fn local_today(canonical_timezone: &str) -> Result<Date, Error> {
    let offset = get_local_offset(canonical_timezone)
        .ok_or_else(|| Error::InvalidTimezone(canonical_timezone.to_owned()))?;

    Ok(OffsetDateTime::now_utc().to_offset(offset).date())
}
