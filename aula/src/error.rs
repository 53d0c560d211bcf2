//! Error types for the aula classroom booking core.

use thiserror::Error;

/// The main error type for all aula operations.
///
/// This enum covers all possible error conditions, from booking-domain
/// failures surfaced to the user to I/O and format problems in the
/// persistence layer.
#[derive(Error, Debug)]
pub enum AulaError {
    /// Error during a booking-domain operation.
    #[error("booking error: {0}")]
    Booking(#[from] BookingError),

    /// Error while loading or saving the booking file.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Errors raised by room and registry operations.
///
/// These are recoverable: the interactive shell reports them and returns to
/// the menu with the registry unchanged.
#[derive(Error, Debug)]
pub enum BookingError {
    /// No room with the given id exists in the registry.
    #[error("room with id '{room_id}' was not found")]
    RoomNotFound {
        /// The id that failed to resolve.
        room_id: String,
    },

    /// A room with the given id is already registered.
    #[error("room with id '{room_id}' already exists")]
    RoomAlreadyExists {
        /// The conflicting id.
        room_id: String,
    },

    /// The requested hour is already booked on this room.
    #[error("timeslot {hour}:00 is already booked for room '{room_id}'")]
    TimeslotAlreadyBooked {
        /// The room whose timeslot was requested.
        room_id: String,
        /// The hour that is already taken.
        hour: u8,
    },
}

/// Errors raised by the flat-file persistence adapter.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The booking file exists but could not be read.
    #[error("failed to read booking file '{path}': {source}")]
    ReadFailed {
        /// The file path that failed to read.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The booking file could not be written.
    #[error("failed to write booking file '{path}': {source}")]
    WriteFailed {
        /// The file path that failed to write.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The booking file has no rows at all, not even a header.
    #[error("booking file '{path}' is empty: missing header row")]
    MissingHeader {
        /// The offending file path.
        path: String,
    },

    /// A data row could not be interpreted as a room record.
    ///
    /// One malformed record fails the whole load; the file is discarded
    /// rather than partially recovered.
    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord {
        /// 1-based line number of the offending row.
        line: usize,
        /// Description of what was wrong with the row.
        reason: String,
    },
}

/// Type alias for `Result<T, AulaError>`.
pub type Result<T> = std::result::Result<T, AulaError>;
