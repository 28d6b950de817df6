use chrono::NaiveDateTime;
use serde::Serialize;

/// One completed stay: written when a slot is released, never updated
/// afterwards. `slot_id` is stored as a plain value, not a live reference;
/// the slot it points to may be reshaped by later admin operations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Booking {
    pub slot_id: i64,           // ⇔ bookings.slot_id
    pub user: String,           // ⇔ bookings.user
    pub vehicle: String,        // ⇔ bookings.vehicle
    pub in_time: NaiveDateTime, // ⇔ bookings.in_time (TEXT, ISO-8601)
    pub out_time: NaiveDateTime, // ⇔ bookings.out_time (TEXT, ISO-8601)
    pub cost: f64,              // ⇔ bookings.cost (REAL, computed once)
}

impl Booking {
    pub fn new(
        slot_id: i64,
        user: &str,
        vehicle: &str,
        in_time: NaiveDateTime,
        out_time: NaiveDateTime,
        cost: f64,
    ) -> Self {
        Self {
            slot_id,
            user: user.to_string(),
            vehicle: vehicle.to_string(),
            in_time,
            out_time,
            cost,
        }
    }
}
