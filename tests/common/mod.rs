#![allow(dead_code)]

use std::sync::{Arc, Once};
use std::time::Duration;

use chrono::{DateTime, Local, TimeZone, Utc};
use planetarium_booking_seaorm::entity::{astronomy_show, planetarium_dome};
use planetarium_booking_seaorm::migration::{Migrator, MigratorTrait};
use planetarium_booking_seaorm::{
    BookingStore, Clock, DatabaseConfig, NewDome, NewShow, ScheduledSession, SessionCandidate,
};
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// The instant every test store treats as "now".
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2029, 12, 31, 12, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

/// A time on 2030-01-01, the day every fixture session runs.
pub fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2030, 1, 1, hour, minute, 0)
        .single()
        .expect("valid fixture timestamp")
}

fn init_tracing() {
    TRACING.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .init();
    });
}

/// A migrated in-memory SQLite store whose clock is pinned to [`now`].
pub async fn store() -> BookingStore {
    init_tracing();

    // One long-lived connection: every new in-memory connection is a fresh,
    // empty database.
    let mut config = DatabaseConfig::new("sqlite::memory:").with_max_connections(1);
    config.min_connections = 1;
    config.idle_timeout = Duration::from_secs(600);
    config.max_lifetime = Duration::from_secs(600);

    let conn = config.connect().await.expect("connect to sqlite");
    Migrator::up(&conn, None).await.expect("run migrations");

    BookingStore::new(conn).with_clock(Arc::new(FixedClock(now())))
}

/// The 10 x 20 dome used throughout the tests.
pub async fn main_dome(store: &BookingStore) -> planetarium_dome::Model {
    store
        .create_dome(NewDome {
            name: "Main Dome".to_owned(),
            rows: 10,
            seats_in_row: 20,
        })
        .await
        .expect("create dome")
}

pub async fn show(store: &BookingStore, title: &str) -> astronomy_show::Model {
    store
        .create_show(NewShow {
            title: title.to_owned(),
            description: format!("{title} under the dome"),
            theme_ids: Vec::new(),
        })
        .await
        .expect("create show")
}

pub fn candidate(show_id: i32, dome_id: Option<i32>, show_time: DateTime<Utc>) -> SessionCandidate {
    SessionCandidate {
        show_id,
        dome_id,
        show_time,
    }
}

/// Dome, show and a session at 20:00 on 2030-01-01.
pub async fn evening_session(
    store: &BookingStore,
) -> (planetarium_dome::Model, astronomy_show::Model, ScheduledSession) {
    let dome = main_dome(store).await;
    let show = show(store, "Cosmic Dawn").await;
    let session = store
        .create_session(candidate(show.id, Some(dome.id), at(20, 0)))
        .await
        .expect("schedule evening session");

    (dome, show, session)
}
