//! Time-of-day arithmetic on a fixed anchor date.
//!
//! Questionnaire times carry no date. Both ends of an interval are pinned to
//! the same arbitrary civil date so the result never depends on "today".

use jiff::SignedDuration;
use jiff::civil::{Date, DateTime, Time, date};

pub const ANCHOR_DATE: Date = date(2000, 1, 1);

const ONE_DAY: SignedDuration = SignedDuration::from_hours(24);

/// Pin a time of day to [`ANCHOR_DATE`].
pub fn anchor(time: Time) -> DateTime {
    ANCHOR_DATE.to_datetime(time)
}

/// Elapsed time from `bedtime` to `wakeup`.
///
/// The wakeup is always taken to follow the bedtime: when its clock time is
/// earlier, the interval crosses midnight. Equal times yield zero.
pub fn time_in_bed(bedtime: Time, wakeup: Time) -> SignedDuration {
    let bed = anchor(bedtime);
    let wake = anchor(wakeup);
    let elapsed = wake.duration_since(bed);
    if elapsed.is_negative() {
        elapsed + ONE_DAY
    } else {
        elapsed
    }
}

/// Convert a duration to fractional hours.
pub fn as_hours(duration: SignedDuration) -> f64 {
    duration.as_secs_f64() / 3600.0
}
