use crate::errors::AppResult;
use crate::models::Booking;
use std::fs::File;
use std::io::BufWriter;

/// Write the booking ledger as a pretty-printed JSON array.
pub fn write_json(path: &str, bookings: &[Booking]) -> AppResult<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, bookings)?;
    Ok(())
}
