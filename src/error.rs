use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use tracing::debug;

/// Rejections raised by the scheduling rules.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    #[error("show time {show_time} must be in the future")]
    PastShowTime { show_time: DateTime<Utc> },

    #[error(
        "show time {show_time} must be at least an hour after session {conflicting_session} \
         at {conflicting_time}"
    )]
    SchedulingConflict {
        show_time: DateTime<Utc>,
        conflicting_session: i32,
        conflicting_time: DateTime<Utc>,
    },
}

/// Rejections raised while allocating a seat.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeatError {
    #[error("invalid row {row}: the dome has rows 1 to {rows}")]
    InvalidRow { row: i32, rows: i32 },

    #[error("invalid seat {seat}: rows have seats 1 to {seats_in_row}")]
    InvalidSeat { seat: i32, seats_in_row: i32 },

    #[error("row {row}, seat {seat} is already taken for session {session_id}")]
    DuplicateSeat { session_id: i32, row: i32, seat: i32 },
}

/// Errors returned by the booking store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error(transparent)]
    Seat(#[from] SeatError),

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    #[error("invalid {field}: {message}")]
    Invalid { field: &'static str, message: String },

    #[error("a dome named {name:?} already exists")]
    DuplicateDomeName { name: String },

    #[error("session {session_id} has no dome assigned")]
    DomeUnassigned { session_id: i32 },

    #[error("referenced record does not exist: {message}")]
    UnknownReference { message: String },

    #[error("database error: {0}")]
    Backend(String),
}

impl BookingError {
    pub(crate) fn not_found(entity: &'static str, id: i32) -> Self {
        Self::NotFound { entity, id }
    }

    pub(crate) fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            message: message.into(),
        }
    }
}

/// Map a Sea-ORM error that has no domain meaning.
pub(crate) fn backend(error: DbErr) -> BookingError {
    debug!(%error, "database operation failed");
    BookingError::Backend(error.to_string())
}

/// Errors raised while loading [`DatabaseConfig`](crate::DatabaseConfig).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("environment variable {var} must be set")]
    Missing { var: &'static str },

    #[error("environment variable {var} has invalid value {value:?}")]
    Invalid { var: &'static str, value: String },
}

pub type Result<T, E = BookingError> = std::result::Result<T, E>;
