//! Database entity models for planetarium-booking-seaorm.
//!
//! This module contains the Sea-ORM entity definitions backing the booking
//! store. The relations declared here mirror the foreign keys created by the
//! migrations, including their delete policies:
//!
//! | Relationship                       | On delete of parent |
//! |------------------------------------|---------------------|
//! | `show_session` -> `astronomy_show` | cascade             |
//! | `show_session` -> `planetarium_dome` | set null          |
//! | `ticket` -> `show_session`         | cascade             |
//! | `ticket` -> `reservation`          | cascade             |
//! | `astronomy_show_theme` -> both ends | cascade            |

/// Show catalog themes ("deep space", "solar system", ...).
pub mod show_theme;

/// Astronomy shows that sessions screen.
pub mod astronomy_show;

/// Join table linking shows to their themes.
pub mod astronomy_show_theme;

/// Domes and their seating grids.
pub mod planetarium_dome;

/// Scheduled screenings of a show in a dome.
pub mod show_session;

/// A user's booking, grouping tickets.
pub mod reservation;

/// One seat claimed for one session.
pub mod ticket;
