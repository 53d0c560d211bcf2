//! # aula
//!
//! Classroom booking core: rooms, hourly timeslots, filtered search, and
//! a flat-file round trip.
//!
//! aula is the library behind a small interactive booking shell. It keeps
//! a registry of classrooms in memory for the lifetime of a session, lets
//! callers reserve hourly timeslots and search by building, capacity, and
//! availability, and persists the registry to a delimited text file
//! between sessions. All state lives in an explicit [`RoomRegistry`]
//! value owned by the caller; there are no globals.
//!
//! ## Key Properties
//!
//! - Hours are flat integers 0-23 with no date dimension
//! - Bookings only accumulate; there is no cancellation or room deletion
//! - Rooms keep their creation order, and ids are unique at all times
//! - Loading is all-or-nothing: one malformed record discards the whole
//!   file and the session starts with an empty registry
//!
//! ## Quick Start
//!
//! ```rust
//! use aula::{RoomFilter, RoomRegistry, search};
//!
//! # fn main() -> aula::Result<()> {
//! let mut registry = RoomRegistry::new();
//! registry.create("6101", "NAB", 50)?;
//! registry.book("6101", 10)?;
//!
//! // Rooms free at 10:00 (the booking above excludes 6101).
//! let filter = RoomFilter {
//!     hour: Some(10),
//!     ..RoomFilter::any()
//! };
//! assert!(search(&registry, &filter).is_empty());
//!
//! // Rooms in NAB seating at least 30.
//! let filter = RoomFilter {
//!     building: Some("NAB".to_string()),
//!     min_capacity: Some(30),
//!     ..RoomFilter::any()
//! };
//! assert_eq!(search(&registry, &filter).len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`Room`] — A bookable classroom: identity, capacity, booked hours
//! - [`RoomRegistry`] — Ordered, exclusively-owned collection with lookup
//! - [`RoomFilter`] / [`search`] — AND-combined optional predicates
//! - [`store`] — Flat-file load and save with the all-or-nothing load
//!
//! ## Modules
//!
//! For lower-level access, the individual modules are also public:
//!
//! - [`room`] — Room entity and booking operations
//! - [`registry`] — The registry collection
//! - [`query`] — Filtered search
//! - [`store`] — Flat-file persistence
//! - [`error`] — Error types

pub mod error;
pub mod query;
pub mod registry;
pub mod room;
pub mod store;

// Re-export primary API types at crate root for convenience.
pub use error::{AulaError, BookingError, Result, StoreError};
pub use query::{RoomFilter, search};
pub use registry::RoomRegistry;
pub use room::Room;
