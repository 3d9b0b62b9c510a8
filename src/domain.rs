//! Plain value types passed between the validators, the repositories and
//! callers of the store.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Seating grid of a dome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomeLayout {
    pub rows: i32,
    pub seats_in_row: i32,
}

impl DomeLayout {
    pub fn new(rows: i32, seats_in_row: i32) -> Self {
        Self { rows, seats_in_row }
    }

    /// Total number of seats, `rows * seats_in_row`.
    pub fn capacity(&self) -> i64 {
        i64::from(self.rows) * i64::from(self.seats_in_row)
    }
}

impl fmt::Display for DomeLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rows x {} seats per row", self.rows, self.seats_in_row)
    }
}

/// A session that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCandidate {
    pub show_id: i32,
    pub dome_id: Option<i32>,
    pub show_time: DateTime<Utc>,
}

/// A persisted session, as seen by the scheduling rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledSession {
    pub id: i32,
    pub show_id: i32,
    pub dome_id: Option<i32>,
    pub show_time: DateTime<Utc>,
}

impl ScheduledSession {
    /// Show time rendered as `YYYY-MM-DD HH:MM`.
    pub fn show_time_formatted(&self) -> String {
        self.show_time.format("%Y-%m-%d %H:%M").to_string()
    }
}

/// Request for a single seat in a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRequest {
    pub session_id: i32,
    pub row: i32,
    pub seat: i32,
}

/// The user an operation runs for.
///
/// Staff see every reservation; everyone else only their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub user_id: i32,
    pub is_staff: bool,
}

impl Actor {
    pub fn customer(user_id: i32) -> Self {
        Self {
            user_id,
            is_staff: false,
        }
    }

    pub fn staff(user_id: i32) -> Self {
        Self {
            user_id,
            is_staff: true,
        }
    }
}

/// Input for [`BookingStore::create_dome`](crate::BookingStore::create_dome).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDome {
    pub name: String,
    pub rows: i32,
    pub seats_in_row: i32,
}

/// Input for [`BookingStore::create_show`](crate::BookingStore::create_show).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewShow {
    pub title: String,
    pub description: String,
    pub theme_ids: Vec<i32>,
}
