use crate::errors::AppResult;
use rusqlite::Connection;

/// Ensure the durable schema exists. Idempotent, runs on every startup.
///
/// Two tables only: the live slot table keyed by slot id, and the
/// append-only booking ledger with its own surrogate id.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS parking_slots (
            id        INTEGER PRIMARY KEY,
            available INTEGER NOT NULL DEFAULT 1,
            booked_by TEXT,
            vehicle   TEXT,
            in_time   TEXT
        );

        CREATE TABLE IF NOT EXISTS bookings (
            id       INTEGER PRIMARY KEY AUTOINCREMENT,
            slot_id  INTEGER NOT NULL,
            user     TEXT NOT NULL,
            vehicle  TEXT NOT NULL,
            in_time  TEXT NOT NULL,
            out_time TEXT NOT NULL,
            cost     REAL NOT NULL
        );
        "#,
    )?;
    Ok(())
}
