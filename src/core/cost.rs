//! Parking cost policy.

use chrono::NaiveDateTime;

/// Default hourly rate, used when the config file does not override it.
pub const DEFAULT_RATE_PER_HOUR: f64 = 20.0;

/// Charge for a stay from `in_time` to `out_time`.
///
/// Billing is ceiling-rounded to whole hours: any started hour is billed
/// in full, so a 61-minute stay costs two hours. A stay of exactly zero
/// minutes costs nothing. An `out_time` earlier than `in_time` is a
/// caller-ordering violation; the elapsed time is clamped to zero so the
/// result is never negative.
pub fn parking_cost(in_time: NaiveDateTime, out_time: NaiveDateTime, rate_per_hour: f64) -> f64 {
    let minutes = (out_time - in_time).num_minutes().max(0);
    let hours = minutes as f64 / 60.0;
    hours.ceil() * rate_per_hour
}
