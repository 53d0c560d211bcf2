//! Filtered room search over the registry.
//!
//! Searches combine up to three optional predicates with logical AND: an
//! exact building match, a minimum capacity, and availability at a given
//! hour. A predicate that is not supplied matches every room, so an empty
//! filter returns the whole registry.
//!
//! # Overview
//!
//! - [`RoomFilter`] - Optional predicates, combined with AND
//! - [`search`] - Applies a filter to a registry, preserving room order
//!
//! # Invalid Hour Filters
//!
//! An hour filter outside 0-23, negative values included, is not an
//! error and does not exclude anything. It is reported once per room
//! considered and then skipped for that room, so a search with only an
//! out-of-range hour filter still returns every room. See
//! [`RoomFilter::matches`].
//!
//! # Example
//!
//! ```rust
//! use aula::query::{RoomFilter, search};
//! use aula::registry::RoomRegistry;
//!
//! # fn main() -> aula::Result<()> {
//! let mut registry = RoomRegistry::new();
//! registry.create("6101", "NAB", 50)?;
//! registry.create("1203", "Library", 20)?;
//!
//! let filter = RoomFilter {
//!     building: Some("NAB".to_string()),
//!     min_capacity: Some(30),
//!     ..RoomFilter::any()
//! };
//!
//! let results = search(&registry, &filter);
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].room_id(), "6101");
//! # Ok(())
//! # }
//! ```

use crate::registry::RoomRegistry;
use crate::room::Room;

/// Optional search predicates, combined with logical AND.
///
/// Each field left as `None` is skipped, so [`RoomFilter::any`] matches
/// every room. The hour is a signed, full-width integer rather than the
/// domain's 0-23 type: out-of-range values, negative ones included, must
/// reach [`RoomFilter::matches`], where the report-and-skip policy
/// applies, instead of being rejected at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomFilter {
    /// Exact building name a room must be in, if supplied.
    pub building: Option<String>,
    /// Minimum seating capacity a room must have, if supplied.
    pub min_capacity: Option<u32>,
    /// Hour a room must be free at, if supplied.
    pub hour: Option<i64>,
}

impl RoomFilter {
    /// Creates a filter with no predicates, matching every room.
    pub fn any() -> Self {
        Self::default()
    }

    /// Tests whether a room satisfies every supplied predicate.
    ///
    /// The three checks always all run; a failed predicate does not
    /// short-circuit the rest. This keeps the out-of-range hour report
    /// firing once for every room considered, including rooms another
    /// predicate already rejected.
    ///
    /// An hour filter outside 0-23 is reported as a warning and skipped
    /// for this room; it never excludes the room.
    pub fn matches(&self, room: &Room) -> bool {
        let mut matched = true;

        if let Some(building) = &self.building
            && room.building() != building
        {
            matched = false;
        }

        if let Some(min_capacity) = self.min_capacity
            && room.capacity() < min_capacity
        {
            matched = false;
        }

        if let Some(hour) = self.hour {
            match u8::try_from(hour).ok().filter(|hour| *hour <= 23) {
                Some(hour) => {
                    if !room.is_available(hour) {
                        matched = false;
                    }
                }
                None => {
                    tracing::warn!(
                        hour,
                        room_id = room.room_id(),
                        "hour filter outside 0-23, skipped for this room"
                    );
                }
            }
        }

        matched
    }
}

/// Returns every room matching `filter`, preserving registry order.
///
/// The result borrows from the registry; there is no pagination and no
/// reordering.
pub fn search<'a>(registry: &'a RoomRegistry, filter: &RoomFilter) -> Vec<&'a Room> {
    registry
        .rooms()
        .iter()
        .filter(|room| filter.matches(room))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_registry() -> RoomRegistry {
        let mut registry = RoomRegistry::new();
        registry.create("6101", "NAB", 50).unwrap();
        registry.create("6102", "NAB", 30).unwrap();
        registry.create("1203", "Library", 20).unwrap();
        registry.book("6101", 10).unwrap();
        registry
    }

    #[test]
    fn test_empty_filter_returns_all_in_order() {
        let registry = sample_registry();

        let results = search(&registry, &RoomFilter::any());

        let ids: Vec<&str> = results.iter().map(|room| room.room_id()).collect();
        assert_eq!(ids, vec!["6101", "6102", "1203"]);
    }

    #[test]
    fn test_building_filter_is_exact() {
        let registry = sample_registry();

        let filter = RoomFilter {
            building: Some("NAB".to_string()),
            ..RoomFilter::any()
        };
        assert_eq!(search(&registry, &filter).len(), 2);

        // Substrings and different casing do not match.
        let filter = RoomFilter {
            building: Some("NA".to_string()),
            ..RoomFilter::any()
        };
        assert!(search(&registry, &filter).is_empty());

        let filter = RoomFilter {
            building: Some("nab".to_string()),
            ..RoomFilter::any()
        };
        assert!(search(&registry, &filter).is_empty());
    }

    #[test]
    fn test_min_capacity_is_inclusive() {
        let registry = sample_registry();

        let filter = RoomFilter {
            min_capacity: Some(30),
            ..RoomFilter::any()
        };

        let ids: Vec<&str> = search(&registry, &filter)
            .iter()
            .map(|room| room.room_id())
            .collect();
        assert_eq!(ids, vec!["6101", "6102"]); // Exactly 30 still matches
    }

    #[test]
    fn test_hour_filter_excludes_booked_rooms() {
        let registry = sample_registry();

        let filter = RoomFilter {
            hour: Some(10),
            ..RoomFilter::any()
        };

        let ids: Vec<&str> = search(&registry, &filter)
            .iter()
            .map(|room| room.room_id())
            .collect();
        assert_eq!(ids, vec!["6102", "1203"]); // 6101 is booked at 10:00
    }

    #[test]
    fn test_hour_filter_boundaries_are_valid() {
        let registry = sample_registry();

        for hour in [0, 23] {
            let filter = RoomFilter {
                hour: Some(hour),
                ..RoomFilter::any()
            };
            assert_eq!(search(&registry, &filter).len(), 3);
        }
    }

    #[test]
    fn test_out_of_range_hour_filter_excludes_nothing() {
        let registry = sample_registry();

        for hour in [-1, 24, 99, i64::MIN, i64::MAX] {
            let filter = RoomFilter {
                hour: Some(hour),
                ..RoomFilter::any()
            };
            assert_eq!(search(&registry, &filter).len(), 3);
        }
    }

    #[test]
    fn test_out_of_range_hour_leaves_other_filters_active() {
        let registry = sample_registry();

        let filter = RoomFilter {
            building: Some("Library".to_string()),
            hour: Some(99),
            ..RoomFilter::any()
        };

        let results = search(&registry, &filter);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].room_id(), "1203");
    }

    #[test]
    fn test_filters_combine_with_and() {
        let registry = sample_registry();

        // Free at 10:00 AND in NAB: only 6102 (6101 is booked then).
        let filter = RoomFilter {
            building: Some("NAB".to_string()),
            hour: Some(10),
            ..RoomFilter::any()
        };
        let results = search(&registry, &filter);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].room_id(), "6102");

        // Adding a capacity the survivor cannot meet empties the result.
        let filter = RoomFilter {
            building: Some("NAB".to_string()),
            min_capacity: Some(40),
            hour: Some(10),
        };
        assert!(search(&registry, &filter).is_empty());
    }

    #[test]
    fn test_search_empty_registry() {
        let registry = RoomRegistry::new();
        assert!(search(&registry, &RoomFilter::any()).is_empty());
    }
}
