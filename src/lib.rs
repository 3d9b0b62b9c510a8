//! # Planetarium Booking Store for Sea-ORM
//!
//! Storage and booking rules for a planetarium: a show catalog, domes with
//! fixed seating grids, scheduled show sessions, and reservations holding
//! one ticket per seat. Built on [Sea-ORM](https://crates.io/crates/sea-orm)
//! and usable with PostgreSQL (default) or SQLite (`sqlite` feature).
//!
//! ## Rules
//!
//! - A session must start strictly in the future.
//! - No earlier session of the same show in the same dome may start within
//!   the hour before a new session. Only the hour *before* is checked.
//! - A ticket's row and seat must lie inside the dome's grid.
//! - At most one ticket exists per `(session, row, seat)`, enforced by a
//!   unique index so concurrent bookings of one seat cannot both succeed.
//!
//! The scheduling and seating rules live in [`validation`] and are pure; the
//! [`BookingStore`] loads the state they need, runs them, and persists only on
//! success.
//!
//! ## Quick Start
//!
//! ```no_run
//! use planetarium_booking_seaorm::{
//!     Actor, BookingStore, DatabaseConfig, NewDome, NewShow, SessionCandidate, TicketRequest,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let conn = DatabaseConfig::from_env()?.connect_and_migrate().await?;
//! let store = BookingStore::new(conn);
//!
//! let dome = store
//!     .create_dome(NewDome { name: "Main".into(), rows: 10, seats_in_row: 20 })
//!     .await?;
//! let show = store
//!     .create_show(NewShow { title: "Black Holes".into(), ..Default::default() })
//!     .await?;
//! let session = store
//!     .create_session(SessionCandidate {
//!         show_id: show.id,
//!         dome_id: Some(dome.id),
//!         show_time: chrono::Utc::now() + chrono::Duration::days(2),
//!     })
//!     .await?;
//!
//! let booking = store
//!     .create_reservation(
//!         &Actor::customer(42),
//!         &[TicketRequest { session_id: session.id, row: 3, seat: 7 }],
//!     )
//!     .await?;
//! println!("reserved {} tickets", booking.tickets.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! [`DatabaseConfig::from_env`] reads `DATABASE_URL` and optional pool
//! settings, loading a `.env` file first when one exists.

pub mod config;
pub mod domain;
pub mod entity;
pub mod error;
pub mod import;
#[cfg(feature = "migration")]
pub mod migration;
pub mod repository;
mod store;
pub mod validation;

pub use config::DatabaseConfig;
pub use domain::{
    Actor, DomeLayout, NewDome, NewShow, ScheduledSession, SessionCandidate, TicketRequest,
};
pub use error::{BookingError, ConfigError, ScheduleError, SeatError};
pub use import::{ImportReport, RowError, SessionImportRow};
pub use repository::{SessionRepository, TicketRepository};
pub use store::{Booking, BookingStore};
pub use validation::{validate_seat, ShowTimeValidator};

/// Clock abstraction used for "now"; re-exported from `mockable`.
pub use mockable::{Clock, DefaultClock};
