use crate::errors::AppResult;
use crate::models::Booking;
use crate::utils::time::format_db_datetime;
use csv::Writer;

/// Write the booking ledger as CSV, one row per completed stay.
pub fn write_csv(path: &str, bookings: &[Booking]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["slot_id", "user", "vehicle", "in_time", "out_time", "cost"])?;

    for b in bookings {
        wtr.write_record(&[
            b.slot_id.to_string(),
            b.user.clone(),
            b.vehicle.clone(),
            format_db_datetime(&b.in_time),
            format_db_datetime(&b.out_time),
            format!("{:.2}", b.cost),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
