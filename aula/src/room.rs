//! The room entity and its booking operations.
//!
//! A [`Room`] is a bookable classroom: an identity (room id and building),
//! a fixed seating capacity, and a schedule of booked hours. Hours are flat
//! integers from 0 to 23 with no date dimension, and a booking has no owner
//! and no duration beyond its single hour.
//!
//! # Overview
//!
//! - [`Room::new`] - Creates a room with an empty schedule
//! - [`Room::is_available`] - Read-only availability check for one hour
//! - [`Room::book_hour`] - Marks an hour as booked, rejecting duplicates
//!
//! Bookings only accumulate: there is no cancellation, so the schedule of a
//! room never shrinks during a session.
//!
//! # Example
//!
//! ```rust
//! use aula::room::Room;
//!
//! # fn main() -> aula::Result<()> {
//! let mut room = Room::new("6101", "NAB", 50);
//! assert!(room.is_available(10));
//!
//! room.book_hour(10)?;
//! assert!(!room.is_available(10));
//!
//! // The same hour cannot be booked twice.
//! assert!(room.book_hour(10).is_err());
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeSet;
use std::fmt;

use crate::error::{BookingError, Result};

/// A bookable classroom with its hourly schedule.
///
/// The id, building, and capacity are fixed at creation; the schedule can
/// only grow, and only through [`Room::book_hour`]. Booked hours are kept
/// in a `BTreeSet` so they are unique and iterate in ascending order for
/// rendering and persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    /// Unique room identifier, e.g. "6101".
    room_id: String,
    /// Building the room is located in, matched exactly by searches.
    building: String,
    /// Seating capacity.
    capacity: u32,
    /// Hours (0-23) that are already booked, in ascending order.
    booked_hours: BTreeSet<u8>,
}

impl Room {
    /// Creates a room with an empty schedule.
    ///
    /// # Arguments
    ///
    /// * `room_id` - Unique identifier for the room
    /// * `building` - Building name, compared exactly by searches
    /// * `capacity` - Seating capacity
    pub fn new(room_id: &str, building: &str, capacity: u32) -> Self {
        Self {
            room_id: room_id.to_string(),
            building: building.to_string(),
            capacity,
            booked_hours: BTreeSet::new(),
        }
    }

    /// Returns the unique room identifier.
    pub fn room_id(&self) -> &str {
        &self.room_id
    }

    /// Returns the building name.
    pub fn building(&self) -> &str {
        &self.building
    }

    /// Returns the seating capacity.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Returns the booked hours in ascending order.
    pub fn booked_hours(&self) -> &BTreeSet<u8> {
        &self.booked_hours
    }

    /// Returns `true` if `hour` is not booked on this room.
    ///
    /// Read-only, with no validation of the hour range: callers are
    /// responsible for keeping hours within 0-23.
    pub fn is_available(&self, hour: u8) -> bool {
        !self.booked_hours.contains(&hour)
    }

    /// Books this room for the given hour.
    ///
    /// Booking is not idempotent: booking an hour that is already taken
    /// fails and leaves the schedule unchanged. As with
    /// [`Room::is_available`], the hour range is the caller's
    /// responsibility.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::TimeslotAlreadyBooked`] if `hour` is already
    /// present in the schedule.
    pub fn book_hour(&mut self, hour: u8) -> Result<()> {
        if !self.booked_hours.insert(hour) {
            return Err(BookingError::TimeslotAlreadyBooked {
                room_id: self.room_id.clone(),
                hour,
            }
            .into());
        }
        Ok(())
    }
}

/// Renders the room detail block shown by the interactive shell.
///
/// The schedule line lists booked hours as `9:00, 13:00` in ascending
/// order, or a free-all-day message when nothing is booked.
impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- Room Details: {} -", self.room_id)?;
        writeln!(f, "  Building: {}", self.building)?;
        writeln!(f, "  Capacity: {}", self.capacity)?;
        if self.booked_hours.is_empty() {
            writeln!(f, "  Schedule: This room is free all day.")?;
        } else {
            let hours: Vec<String> = self
                .booked_hours
                .iter()
                .map(|hour| format!("{hour}:00"))
                .collect();
            writeln!(f, "  Schedule (Booked Hours): {}", hours.join(", "))?;
        }
        write!(f, "-----------")
    }
}
