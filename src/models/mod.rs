pub mod booking;
pub mod slot;

pub use booking::Booking;
pub use slot::{Occupancy, Slot};
