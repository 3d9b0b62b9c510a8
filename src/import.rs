//! Bulk scheduling of sessions from already-parsed upload rows.
//!
//! Rows are scheduled one at a time through the same rules as single
//! creates. There is no all-or-nothing guarantee: accepted rows stay
//! persisted and rejected rows are reported with their position.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;
use tracing::{info, warn};

use crate::domain::{ScheduledSession, SessionCandidate};
use crate::error::{BookingError, Result};
use crate::repository::SessionRepository;
use crate::validation::ShowTimeValidator;

/// Format of the `show_time` column, read as UTC.
pub const IMPORT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One upload row. Field names follow the upload's column headers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SessionImportRow {
    pub astronomy_show: i32,
    #[serde(default)]
    pub planetarium_dome: Option<i32>,
    pub show_time: String,
}

/// A rejected row, numbered from 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    pub row: usize,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub created: Vec<ScheduledSession>,
    pub errors: Vec<RowError>,
}

impl ImportReport {
    /// True when every row was scheduled.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Schedules each row through `repo`, collecting per-row failures.
///
/// Later rows are checked against sessions created by earlier rows of the
/// same import.
pub async fn import_sessions<R, I>(
    repo: &R,
    validator: &ShowTimeValidator,
    rows: I,
) -> ImportReport
where
    R: SessionRepository + ?Sized,
    I: IntoIterator<Item = SessionImportRow>,
{
    let mut report = ImportReport::default();

    for (index, row) in rows.into_iter().enumerate() {
        let position = index + 1;
        match import_row(repo, validator, &row).await {
            Ok(session) => report.created.push(session),
            Err(error) => {
                warn!(row = position, %error, "session import row rejected");
                report.errors.push(RowError {
                    row: position,
                    message: error.to_string(),
                });
            }
        }
    }

    info!(
        created = report.created.len(),
        rejected = report.errors.len(),
        "session import finished"
    );
    report
}

async fn import_row<R>(
    repo: &R,
    validator: &ShowTimeValidator,
    row: &SessionImportRow,
) -> Result<ScheduledSession>
where
    R: SessionRepository + ?Sized,
{
    let candidate = SessionCandidate {
        show_id: row.astronomy_show,
        dome_id: row.planetarium_dome,
        show_time: parse_show_time(&row.show_time)?,
    };

    repo.schedule(validator, &candidate).await
}

fn parse_show_time(raw: &str) -> Result<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(raw.trim(), IMPORT_TIME_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|error| {
            BookingError::invalid(
                "show_time",
                format!("{raw:?} does not match {IMPORT_TIME_FORMAT}: {error}"),
            )
        })
}
