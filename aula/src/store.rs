//! Flat-file persistence for the room registry.
//!
//! The registry round-trips through a small comma-delimited UTF-8 text
//! file: one header row, then one row per room in registry order. The
//! booked-hours field is a `;`-joined list of hours in ascending order,
//! empty when the room has no bookings:
//!
//! ```text
//! room_no,building,capacity,booked_hours
//! 6101,NAB,50,9;13
//! 1203,Library,20,
//! ```
//!
//! Values are written verbatim with no quoting or escaping, so ids and
//! building names containing a delimiter cannot round-trip; such rows are
//! rejected on load like any other malformed record.
//!
//! # Load Policy
//!
//! Loading is forgiving at the file level and strict at the record level.
//! A missing file is the normal first-run case and yields an empty
//! registry. Any other problem, from an unreadable file down to a single
//! malformed row, discards the file as a whole: [`load`] logs a warning
//! and returns an empty registry rather than a partial one. [`try_load`]
//! exposes the underlying fail-fast path for callers that want the error.
//!
//! # Save Policy
//!
//! [`save`] overwrites the file in place, with no atomic rename and no
//! backup. A failed write can leave a truncated file behind, which the
//! next load will then discard.

use std::fs;
use std::path::Path;

use crate::error::{AulaError, Result, StoreError};
use crate::registry::RoomRegistry;

/// Default booking file name, resolved in the process working directory.
pub const DATA_FILE: &str = "data.csv";

/// Header row written ahead of the room records.
const HEADER: &str = "room_no,building,capacity,booked_hours";

/// Loads the registry from `path`, degrading every failure to an empty
/// registry.
///
/// A missing file is not reported; anything else that goes wrong is
/// logged as a warning and likewise yields an empty registry, discarding
/// the file as a whole.
pub fn load<P: AsRef<Path>>(path: P) -> RoomRegistry {
    let path = path.as_ref();
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no booking file, starting fresh");
        return RoomRegistry::new();
    }

    match try_load(path) {
        Ok(registry) => registry,
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "discarding booking file, starting with an empty registry"
            );
            RoomRegistry::new()
        }
    }
}

/// Loads the registry from `path`, failing fast on the first problem.
///
/// The header row is discarded without validation. Data rows are replayed
/// through the registry in file order, so a row that would violate a
/// registry invariant fails the load just like a syntactically bad one.
///
/// # Errors
///
/// - [`StoreError::ReadFailed`] if the file cannot be read
/// - [`StoreError::MissingHeader`] if the file has no rows at all
/// - [`StoreError::MalformedRecord`] for a row with the wrong field
///   count, a non-numeric capacity, a booked hour outside 0-23, a
///   duplicate room id, or a duplicate hour within one row
pub fn try_load<P: AsRef<Path>>(path: P) -> Result<RoomRegistry> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| StoreError::ReadFailed {
        path: path.display().to_string(),
        source: e,
    })?;

    let mut lines = contents.lines().enumerate();
    if lines.next().is_none() {
        return Err(StoreError::MissingHeader {
            path: path.display().to_string(),
        }
        .into());
    }

    let mut registry = RoomRegistry::new();
    for (index, row) in lines {
        let line_no = index + 1;
        let (room_id, building, capacity, hours) = parse_record(line_no, row)?;

        registry
            .create(room_id, building, capacity)
            .map_err(|e| replay_error(line_no, &e))?;
        for hour in hours {
            registry
                .book(room_id, hour)
                .map_err(|e| replay_error(line_no, &e))?;
        }
    }

    Ok(registry)
}

/// Serializes the registry to `path`, replacing any previous contents.
///
/// Rooms are written in registry order with hours ascending, so a save
/// followed by a load reproduces the registry exactly.
///
/// # Errors
///
/// Returns [`StoreError::WriteFailed`] if the file cannot be written.
pub fn save<P: AsRef<Path>>(path: P, registry: &RoomRegistry) -> Result<()> {
    let path = path.as_ref();

    let mut contents = String::from(HEADER);
    contents.push('\n');
    for room in registry.rooms() {
        let hours: Vec<String> = room
            .booked_hours()
            .iter()
            .map(|hour| hour.to_string())
            .collect();
        contents.push_str(&format!(
            "{},{},{},{}\n",
            room.room_id(),
            room.building(),
            room.capacity(),
            hours.join(";")
        ));
    }

    fs::write(path, contents).map_err(|e| StoreError::WriteFailed {
        path: path.display().to_string(),
        source: e,
    })?;

    tracing::debug!(path = %path.display(), rooms = registry.len(), "booking file written");
    Ok(())
}

/// Splits one data row into its fields, parsing capacity and hours.
fn parse_record(line_no: usize, row: &str) -> Result<(&str, &str, u32, Vec<u8>)> {
    let fields: Vec<&str> = row.split(',').collect();
    let &[room_id, building, capacity_raw, hours_raw] = fields.as_slice() else {
        return Err(StoreError::MalformedRecord {
            line: line_no,
            reason: format!("expected 4 fields, found {}", fields.len()),
        }
        .into());
    };

    let capacity: u32 = capacity_raw.parse().map_err(|_| StoreError::MalformedRecord {
        line: line_no,
        reason: format!("capacity '{capacity_raw}' is not a non-negative integer"),
    })?;

    let mut hours = Vec::new();
    if !hours_raw.is_empty() {
        for hour_raw in hours_raw.split(';') {
            let hour = hour_raw
                .parse::<u8>()
                .ok()
                .filter(|hour| *hour <= 23)
                .ok_or_else(|| StoreError::MalformedRecord {
                    line: line_no,
                    reason: format!("booked hour '{hour_raw}' is not an integer in 0-23"),
                })?;
            hours.push(hour);
        }
    }

    Ok((room_id, building, capacity, hours))
}

/// Maps a replay failure (duplicate id or hour) to a malformed record.
fn replay_error(line_no: usize, error: &AulaError) -> AulaError {
    let reason = match error {
        AulaError::Booking(cause) => cause.to_string(),
        other => other.to_string(),
    };
    StoreError::MalformedRecord {
        line: line_no,
        reason,
    }
    .into()
}
