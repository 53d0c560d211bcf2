//! The room registry: the authoritative collection of rooms for a session.
//!
//! The registry exclusively owns every [`Room`] for the lifetime of the
//! process. Rooms are kept in creation order, which after a load is also
//! file order, and room ids are unique across the collection at all times.
//! Failed operations leave the registry unchanged.
//!
//! # Overview
//!
//! - [`RoomRegistry::find`] - Lookup by exact id
//! - [`RoomRegistry::create`] - Adds a room with an empty schedule
//! - [`RoomRegistry::book`] - Books an hour on a room by id
//! - [`RoomRegistry::rooms`] - The rooms in creation order, for iteration
//!
//! # Example
//!
//! ```rust
//! use aula::registry::RoomRegistry;
//!
//! # fn main() -> aula::Result<()> {
//! let mut registry = RoomRegistry::new();
//! registry.create("6101", "NAB", 50)?;
//! registry.book("6101", 10)?;
//!
//! let room = registry.find("6101").unwrap();
//! assert!(!room.is_available(10));
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! The registry is designed for single-threaded access. The interactive
//! shell is the only writer in the intended deployment, so there is no
//! interior locking.

use crate::error::{BookingError, Result};
use crate::room::Room;

/// Ordered collection of rooms with lookup by id.
///
/// Callers read rooms through shared references from
/// [`RoomRegistry::find`] and [`RoomRegistry::rooms`]; all mutation goes
/// through [`RoomRegistry::create`] and [`RoomRegistry::book`], which
/// enforce id uniqueness and schedule consistency.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomRegistry {
    /// Rooms in creation order.
    rooms: Vec<Room>,
}

impl RoomRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self { rooms: Vec::new() }
    }

    /// Looks up a room by exact id.
    ///
    /// A linear scan is enough at this scale; the uniqueness invariant
    /// makes the first match the only match.
    pub fn find(&self, room_id: &str) -> Option<&Room> {
        self.rooms.iter().find(|room| room.room_id() == room_id)
    }

    /// Mutable lookup backing the booking path.
    fn find_mut(&mut self, room_id: &str) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|room| room.room_id() == room_id)
    }

    /// Creates a room with an empty schedule and returns a reference to it.
    ///
    /// # Arguments
    ///
    /// * `room_id` - Unique identifier for the new room
    /// * `building` - Building name
    /// * `capacity` - Seating capacity
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::RoomAlreadyExists`] if a room with this id
    /// is already registered. A failed call leaves the registry unchanged.
    pub fn create(&mut self, room_id: &str, building: &str, capacity: u32) -> Result<&Room> {
        if self.find(room_id).is_some() {
            return Err(BookingError::RoomAlreadyExists {
                room_id: room_id.to_string(),
            }
            .into());
        }

        let index = self.rooms.len();
        self.rooms.push(Room::new(room_id, building, capacity));
        Ok(&self.rooms[index])
    }

    /// Books an hour on the room with the given id.
    ///
    /// # Arguments
    ///
    /// * `room_id` - Id of the room to book
    /// * `hour` - Hour to book, 0-23
    ///
    /// # Errors
    ///
    /// - [`BookingError::RoomNotFound`] if the id does not resolve
    /// - [`BookingError::TimeslotAlreadyBooked`] if the hour is taken
    pub fn book(&mut self, room_id: &str, hour: u8) -> Result<()> {
        let Some(room) = self.find_mut(room_id) else {
            return Err(BookingError::RoomNotFound {
                room_id: room_id.to_string(),
            }
            .into());
        };
        room.book_hour(hour)
    }

    /// Returns the rooms in creation order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Returns the number of registered rooms.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Returns `true` if no rooms are registered.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AulaError;

    #[test]
    fn test_new_registry_is_empty() {
        let registry = RoomRegistry::new();

        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.rooms().is_empty());
    }

    #[test]
    fn test_create_and_find() {
        let mut registry = RoomRegistry::new();

        let room = registry.create("6101", "NAB", 50).unwrap();
        assert_eq!(room.room_id(), "6101");
        assert_eq!(room.building(), "NAB");
        assert_eq!(room.capacity(), 50);

        let found = registry.find("6101").unwrap();
        assert_eq!(found.room_id(), "6101");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_find_requires_exact_id() {
        let mut registry = RoomRegistry::new();
        registry.create("6101", "NAB", 50).unwrap();

        assert!(registry.find("610").is_none());
        assert!(registry.find("61011").is_none());
        assert!(registry.find("NAB").is_none());
    }

    #[test]
    fn test_create_duplicate_id_fails() {
        let mut registry = RoomRegistry::new();
        registry.create("6101", "NAB", 50).unwrap();

        let result = registry.create("6101", "Library", 20);

        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            AulaError::Booking(BookingError::RoomAlreadyExists { .. })
        ));

        // The original room must be untouched.
        assert_eq!(registry.len(), 1);
        let room = registry.find("6101").unwrap();
        assert_eq!(room.building(), "NAB");
        assert_eq!(room.capacity(), 50);
    }

    #[test]
    fn test_book_unknown_room_fails() {
        let mut registry = RoomRegistry::new();

        let result = registry.book("6101", 10);

        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            AulaError::Booking(BookingError::RoomNotFound { .. })
        ));
    }

    #[test]
    fn test_book_marks_hour_taken() {
        let mut registry = RoomRegistry::new();
        registry.create("6101", "NAB", 50).unwrap();

        registry.book("6101", 10).unwrap();

        let room = registry.find("6101").unwrap();
        assert!(!room.is_available(10));
        assert!(room.is_available(11));
    }

    #[test]
    fn test_book_taken_hour_fails() {
        let mut registry = RoomRegistry::new();
        registry.create("6101", "NAB", 50).unwrap();
        registry.book("6101", 10).unwrap();

        let result = registry.book("6101", 10);

        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            AulaError::Booking(BookingError::TimeslotAlreadyBooked { hour: 10, .. })
        ));
    }

    #[test]
    fn test_rooms_keep_creation_order() {
        let mut registry = RoomRegistry::new();
        registry.create("6101", "NAB", 50).unwrap();
        registry.create("1203", "Library", 20).unwrap();
        registry.create("6102", "NAB", 30).unwrap();

        let ids: Vec<&str> = registry.rooms().iter().map(Room::room_id).collect();
        assert_eq!(ids, vec!["6101", "1203", "6102"]);
    }
}
