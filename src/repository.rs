//! Storage ports consumed by the booking rules.
//!
//! [`BookingStore`](crate::BookingStore) implements both traits over Sea-ORM;
//! the provided methods hold the validate-then-persist pipelines so any other
//! implementation gets the same rules.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::warn;

use crate::domain::{DomeLayout, ScheduledSession, SessionCandidate, TicketRequest};
use crate::entity::ticket;
use crate::error::Result;
use crate::validation::{conflict_window, ShowTimeValidator};

/// Reads and writes show sessions.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Sessions of `show_id` in `dome_id` with `from <= show_time < until`.
    ///
    /// A `None` dome matches only sessions without a dome.
    async fn sessions_in_window(
        &self,
        show_id: i32,
        dome_id: Option<i32>,
        from: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> Result<Vec<ScheduledSession>>;

    /// Persists a candidate that already passed validation.
    async fn insert_session(&self, candidate: &SessionCandidate) -> Result<ScheduledSession>;

    /// Validates `candidate` against the persisted schedule and stores it.
    async fn schedule(
        &self,
        validator: &ShowTimeValidator,
        candidate: &SessionCandidate,
    ) -> Result<ScheduledSession> {
        let (from, until) = conflict_window(candidate.show_time);
        let existing = self
            .sessions_in_window(candidate.show_id, candidate.dome_id, from, until)
            .await?;

        if let Err(error) = validator.validate(candidate, &existing, None) {
            warn!(
                show_id = candidate.show_id,
                dome_id = ?candidate.dome_id,
                show_time = %candidate.show_time,
                %error,
                "session rejected"
            );
            return Err(error.into());
        }

        self.insert_session(candidate).await
    }
}

/// Reads and writes tickets.
#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// Seating grid of the dome hosting `session_id`.
    async fn layout_for_session(&self, session_id: i32) -> Result<DomeLayout>;

    /// Inserts a ticket, relying on the storage-level uniqueness of
    /// `(session, row, seat)`. A taken seat fails with
    /// [`SeatError::DuplicateSeat`](crate::SeatError::DuplicateSeat).
    async fn insert_ticket(
        &self,
        reservation_id: i32,
        request: &TicketRequest,
    ) -> Result<ticket::Model>;

    /// Number of tickets issued for `session_id`.
    async fn count_for_session(&self, session_id: i32) -> Result<u64>;

    /// Seats still free in `session_id`, recomputed from committed tickets.
    async fn available_seats(&self, session_id: i32) -> Result<i64> {
        let layout = self.layout_for_session(session_id).await?;
        let taken = self.count_for_session(session_id).await?;

        Ok(layout.capacity() - i64::try_from(taken).unwrap_or(i64::MAX))
    }
}
