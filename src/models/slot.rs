use chrono::NaiveDateTime;
use serde::Serialize;

/// Occupant details of a booked slot.
/// All three fields travel together: a slot either has a full occupancy
/// or none at all, so the "available ⇔ all occupant fields null" rule
/// cannot be violated by construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Occupancy {
    pub user: String,           // ⇔ parking_slots.booked_by
    pub vehicle: String,        // ⇔ parking_slots.vehicle
    pub since: NaiveDateTime,   // ⇔ parking_slots.in_time (TEXT, ISO-8601)
}

/// A single parking slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slot {
    pub id: i64,
    pub occupancy: Option<Occupancy>,
}

impl Slot {
    /// A fresh, available slot with the given id.
    pub fn new(id: i64) -> Self {
        Self {
            id,
            occupancy: None,
        }
    }

    pub fn occupied(id: i64, user: &str, vehicle: &str, since: NaiveDateTime) -> Self {
        Self {
            id,
            occupancy: Some(Occupancy {
                user: user.to_string(),
                vehicle: vehicle.to_string(),
                since,
            }),
        }
    }

    pub fn is_available(&self) -> bool {
        self.occupancy.is_none()
    }
}
