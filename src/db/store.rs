//! Durable storage for slots and the booking ledger.
//!
//! Every operation returns `AppResult` so callers can decide what a
//! failure means; the registry logs and carries on, tests assert on the
//! error values directly.

use crate::db::initialize::init_db;
use crate::errors::{AppError, AppResult};
use crate::models::{Booking, Occupancy, Slot};
use crate::utils::time::{format_db_datetime, parse_db_datetime};
use rusqlite::{Connection, Row, params};
use std::path::Path;

pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open (or create) the database at `path` and ensure the schema.
    /// Failure here is the "storage unavailable" condition: the caller
    /// falls back to memory-only mode instead of aborting.
    pub fn open(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        init_db(&conn)?;
        Ok(Self { conn })
    }

    pub fn count_slots(&self) -> AppResult<i64> {
        let n: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM parking_slots", [], |r| r.get(0))?;
        Ok(n)
    }

    /// Insert slot rows `existing+1 ..= n` so at least `n` slots exist.
    /// Safe to call on every startup; already-present ids are skipped.
    pub fn ensure_minimum_slots(&mut self, n: i64) -> AppResult<()> {
        let existing = self.count_slots()?;
        if existing >= n {
            return Ok(());
        }

        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT OR IGNORE INTO parking_slots (id, available) VALUES (?1, 1)",
            )?;
            for id in existing + 1..=n {
                stmt.execute([id])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    /// All slots, id ascending.
    pub fn fetch_all_slots(&self) -> AppResult<Vec<Slot>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT id, available, booked_by, vehicle, in_time
             FROM parking_slots
             ORDER BY id ASC",
        )?;
        let rows = stmt.query_map([], map_slot_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    /// Create one available slot with the given id.
    pub fn insert_slot(&self, id: i64) -> AppResult<()> {
        self.conn.execute(
            "INSERT INTO parking_slots (id, available) VALUES (?1, 1)",
            [id],
        )?;
        Ok(())
    }

    /// Full replace of the occupancy fields for `slot.id`.
    pub fn update_slot(&self, slot: &Slot) -> AppResult<()> {
        let (available, user, vehicle, in_time) = match &slot.occupancy {
            Some(occ) => (
                0i64,
                Some(occ.user.as_str()),
                Some(occ.vehicle.as_str()),
                Some(format_db_datetime(&occ.since)),
            ),
            None => (1i64, None, None, None),
        };

        self.conn.execute(
            "UPDATE parking_slots
             SET available = ?1, booked_by = ?2, vehicle = ?3, in_time = ?4
             WHERE id = ?5",
            params![available, user, vehicle, in_time, slot.id],
        )?;
        Ok(())
    }

    /// The full ledger, most recent first (reverse insertion order).
    pub fn fetch_all_bookings(&self) -> AppResult<Vec<Booking>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT slot_id, user, vehicle, in_time, out_time, cost
             FROM bookings
             ORDER BY id DESC",
        )?;
        let rows = stmt.query_map([], map_booking_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    /// Append one immutable ledger row.
    pub fn insert_booking(&self, booking: &Booking) -> AppResult<()> {
        self.conn.execute(
            "INSERT INTO bookings (slot_id, user, vehicle, in_time, out_time, cost)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                booking.slot_id,
                booking.user,
                booking.vehicle,
                format_db_datetime(&booking.in_time),
                format_db_datetime(&booking.out_time),
                booking.cost,
            ],
        )?;
        Ok(())
    }

    /// Delete every booking and reset every slot to available.
    /// Runs in a single transaction: either the whole reset applies or
    /// nothing does.
    pub fn reset_all(&mut self) -> AppResult<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM bookings", [])?;
        tx.execute(
            "UPDATE parking_slots
             SET available = 1, booked_by = NULL, vehicle = NULL, in_time = NULL",
            [],
        )?;
        tx.commit()?;
        Ok(())
    }
}

fn map_slot_row(row: &Row) -> rusqlite::Result<Slot> {
    let id: i64 = row.get("id")?;
    let available: i64 = row.get("available")?;
    let user: Option<String> = row.get("booked_by")?;
    let vehicle: Option<String> = row.get("vehicle")?;
    let in_time: Option<String> = row.get("in_time")?;

    let occupancy = if available == 0 {
        match (user, vehicle, in_time) {
            (Some(user), Some(vehicle), Some(raw)) => {
                let since = parse_db_datetime(&raw).ok_or_else(|| {
                    rusqlite::Error::FromSqlConversionFailure(
                        0,
                        rusqlite::types::Type::Text,
                        Box::new(AppError::InvalidDate(raw.clone())),
                    )
                })?;
                Some(Occupancy {
                    user,
                    vehicle,
                    since,
                })
            }
            // Occupied flag without full occupant data is a malformed row;
            // treat it as available rather than invent a partial occupancy.
            _ => None,
        }
    } else {
        None
    };

    Ok(Slot { id, occupancy })
}

fn map_booking_row(row: &Row) -> rusqlite::Result<Booking> {
    let in_raw: String = row.get("in_time")?;
    let out_raw: String = row.get("out_time")?;

    let in_time = parse_db_datetime(&in_raw).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(in_raw.clone())),
        )
    })?;
    let out_time = parse_db_datetime(&out_raw).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(out_raw.clone())),
        )
    })?;

    Ok(Booking {
        slot_id: row.get("slot_id")?,
        user: row.get("user")?,
        vehicle: row.get("vehicle")?,
        in_time,
        out_time,
        cost: row.get("cost")?,
    })
}
