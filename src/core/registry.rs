//! The process-wide authoritative view of slots and the booking ledger.
//!
//! When durable storage is available the registry is a read-through cache
//! over it: every read reloads from the store first, every write goes
//! through the store and then reloads. When storage is unavailable the
//! cache itself is authoritative. Which of the two applies is decided
//! exactly once, at construction.
//!
//! Store failures after construction are logged and swallowed: the caller
//! observes no change (the next reload shows pre-mutation state). That is
//! the documented degraded mode, not a crash path.

use crate::core::cost::parking_cost;
use crate::db::Store;
use crate::errors::{AppError, AppResult};
use crate::models::{Booking, Slot};
use crate::ui::messages::warning;
use chrono::NaiveDateTime;

pub struct Registry {
    backend: Option<Store>,
    slots: Vec<Slot>,
    bookings: Vec<Booking>,
}

impl Registry {
    /// Open the registry against the database at `db_path`, seeding at
    /// least `minimum_slots` slots. If the database cannot be opened the
    /// registry degrades to memory-only mode with a warning; it never
    /// fails to construct.
    pub fn open(db_path: &str, minimum_slots: i64) -> Self {
        let backend = match Store::open(db_path) {
            Ok(store) => Some(store),
            Err(e) => {
                warning(format!(
                    "Storage unavailable ({e}); running in memory-only mode"
                ));
                None
            }
        };

        let mut registry = Self {
            backend,
            slots: Vec::new(),
            bookings: Vec::new(),
        };
        registry.initialize(minimum_slots);
        registry
    }

    /// A registry with no durable backend at all. This is the same state
    /// `open` falls back to, exposed directly for callers and tests that
    /// want memory semantics on purpose.
    pub fn memory_only(minimum_slots: i64) -> Self {
        let mut registry = Self {
            backend: None,
            slots: Vec::new(),
            bookings: Vec::new(),
        };
        registry.initialize(minimum_slots);
        registry
    }

    pub fn is_durable(&self) -> bool {
        self.backend.is_some()
    }

    fn initialize(&mut self, minimum_slots: i64) {
        if let Some(store) = self.backend.as_mut() {
            if let Err(e) = store.ensure_minimum_slots(minimum_slots) {
                warning(format!("Failed to ensure minimum slots: {e}"));
            }
            self.reload_slots();
            self.reload_bookings();
        }

        if self.backend.is_none() && self.slots.is_empty() {
            for id in 1..=minimum_slots {
                self.slots.push(Slot::new(id));
            }
        }
    }

    fn reload_slots(&mut self) {
        if let Some(store) = &self.backend {
            match store.fetch_all_slots() {
                Ok(slots) => self.slots = slots,
                Err(e) => warning(format!("Failed to fetch parking slots: {e}")),
            }
        }
    }

    fn reload_bookings(&mut self) {
        if let Some(store) = &self.backend {
            match store.fetch_all_bookings() {
                Ok(bookings) => self.bookings = bookings,
                Err(e) => warning(format!("Failed to fetch bookings: {e}")),
            }
        }
    }

    /// Snapshot of every slot, id ascending. The returned slots are
    /// detached copies; mutating them does not touch registry state.
    pub fn list_slots(&mut self) -> Vec<Slot> {
        if self.is_durable() {
            self.reload_slots();
        }
        self.slots.clone()
    }

    /// The booking ledger, most recent first.
    pub fn list_bookings(&mut self) -> Vec<Booking> {
        if self.is_durable() {
            self.reload_bookings();
        }
        self.bookings.clone()
    }

    pub fn slot_by_id(&mut self, id: i64) -> Option<Slot> {
        if self.is_durable() {
            self.reload_slots();
        }
        self.slots.iter().find(|s| s.id == id).cloned()
    }

    /// Write the given slot state through to storage. The only path by
    /// which occupancy fields change.
    pub fn update_slot(&mut self, slot: &Slot) -> AppResult<()> {
        if self.is_durable() {
            self.reload_slots();
        }
        if !self.slots.iter().any(|s| s.id == slot.id) {
            return Err(AppError::SlotNotFound(slot.id));
        }

        if let Some(store) = &self.backend {
            if let Err(e) = store.update_slot(slot) {
                warning(format!("Failed to update slot {}: {e}", slot.id));
            }
            self.reload_slots();
        } else if let Some(existing) = self.slots.iter_mut().find(|s| s.id == slot.id) {
            *existing = slot.clone();
        }
        Ok(())
    }

    /// Next id for a freshly added slot: one past the current maximum,
    /// so ids stay unique even after the pool was grown before.
    pub fn next_slot_id(&mut self) -> i64 {
        if self.is_durable() {
            self.reload_slots();
        }
        self.slots.iter().map(|s| s.id).max().unwrap_or(0) + 1
    }

    pub fn add_slot(&mut self, id: i64) {
        if let Some(store) = &self.backend {
            if let Err(e) = store.insert_slot(id) {
                warning(format!("Failed to insert parking slot: {e}"));
            }
            self.reload_slots();
        } else {
            self.slots.push(Slot::new(id));
        }
    }

    /// Grow the pool by `count` fresh available slots. Returns the ids
    /// that were created.
    pub fn add_slots(&mut self, count: i64) -> AppResult<Vec<i64>> {
        if count <= 0 {
            return Err(AppError::InvalidInput(format!(
                "number of slots to add must be positive, got {count}"
            )));
        }

        let mut added = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let id = self.next_slot_id();
            self.add_slot(id);
            added.push(id);
        }
        Ok(added)
    }

    pub fn add_booking(&mut self, booking: Booking) {
        if let Some(store) = &self.backend {
            if let Err(e) = store.insert_booking(&booking) {
                warning(format!("Failed to insert booking: {e}"));
            }
            self.reload_bookings();
        } else {
            // Keep the memory ledger in the same most-recent-first order
            // the store query returns.
            self.bookings.insert(0, booking);
        }
    }

    /// Delete every booking and reset every slot to available.
    pub fn clear_all(&mut self) {
        if let Some(store) = self.backend.as_mut() {
            if let Err(e) = store.reset_all() {
                warning(format!("Failed to reset slots and bookings: {e}"));
            }
            self.reload_slots();
            self.reload_bookings();
        } else {
            for slot in &mut self.slots {
                slot.occupancy = None;
            }
            self.bookings.clear();
        }
    }

    /// The occupied slot currently held by (`user`, `vehicle`), if any.
    /// At most one slot can match: `allocate` refuses occupied targets,
    /// and a correctly behaving caller holds one active slot per identity.
    pub fn find_active_booking(&mut self, user: &str, vehicle: &str) -> Option<Slot> {
        if self.is_durable() {
            self.reload_slots();
        }
        self.slots
            .iter()
            .find(|s| {
                s.occupancy
                    .as_ref()
                    .is_some_and(|occ| occ.user == user && occ.vehicle == vehicle)
            })
            .cloned()
    }

    /// AVAILABLE → OCCUPIED. Checked transition: allocating a missing or
    /// already-occupied slot is rejected, not silently applied.
    pub fn allocate(
        &mut self,
        slot_id: i64,
        user: &str,
        vehicle: &str,
        now: NaiveDateTime,
    ) -> AppResult<Slot> {
        if user.trim().is_empty() || vehicle.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "user and vehicle must not be empty".to_string(),
            ));
        }

        let slot = self
            .slot_by_id(slot_id)
            .ok_or(AppError::SlotNotFound(slot_id))?;
        if !slot.is_available() {
            return Err(AppError::SlotOccupied(slot_id));
        }

        let updated = Slot::occupied(slot_id, user.trim(), vehicle.trim(), now);
        self.update_slot(&updated)?;
        Ok(updated)
    }

    /// OCCUPIED → AVAILABLE. Emits exactly one booking with the cost
    /// computed at release time, then clears the occupancy fields.
    pub fn release(
        &mut self,
        slot_id: i64,
        now: NaiveDateTime,
        rate_per_hour: f64,
    ) -> AppResult<Booking> {
        let slot = self
            .slot_by_id(slot_id)
            .ok_or(AppError::SlotNotFound(slot_id))?;
        let occupancy = slot
            .occupancy
            .ok_or(AppError::SlotNotOccupied(slot_id))?;

        let cost = parking_cost(occupancy.since, now, rate_per_hour);
        let booking = Booking::new(
            slot_id,
            &occupancy.user,
            &occupancy.vehicle,
            occupancy.since,
            now,
            cost,
        );

        self.add_booking(booking.clone());
        self.update_slot(&Slot::new(slot_id))?;
        Ok(booking)
    }

    /// What the current stay on `slot_id` would cost if released at `now`.
    pub fn cost_preview(
        &mut self,
        slot_id: i64,
        now: NaiveDateTime,
        rate_per_hour: f64,
    ) -> AppResult<f64> {
        let slot = self
            .slot_by_id(slot_id)
            .ok_or(AppError::SlotNotFound(slot_id))?;
        let occupancy = slot
            .occupancy
            .ok_or(AppError::SlotNotOccupied(slot_id))?;
        Ok(parking_cost(occupancy.since, now, rate_per_hour))
    }
}
