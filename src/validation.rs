//! Scheduling and seating rules.
//!
//! Both validators are pure: they read the injected clock and whatever state
//! they are handed, and never touch the database. The store loads the state,
//! runs the validator and persists only when it passes.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use mockable::Clock;

use crate::domain::{DomeLayout, ScheduledSession, SessionCandidate};
use crate::error::{ScheduleError, SeatError};

/// Minimum spacing between two sessions of the same show in the same dome.
pub const SESSION_SPACING_MINUTES: i64 = 60;

/// The half-open window `[show_time - spacing, show_time)` an earlier session
/// must not fall into.
pub fn conflict_window(show_time: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    (
        show_time - Duration::minutes(SESSION_SPACING_MINUTES),
        show_time,
    )
}

/// Checks candidate sessions against the clock and the existing schedule.
#[derive(Clone)]
pub struct ShowTimeValidator {
    clock: Arc<dyn Clock>,
}

impl fmt::Debug for ShowTimeValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShowTimeValidator").finish_non_exhaustive()
    }
}

impl ShowTimeValidator {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Current time according to the injected clock.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.utc()
    }

    /// Validates `candidate` against `existing`.
    ///
    /// Fails with [`ScheduleError::PastShowTime`] when the show time is not
    /// strictly in the future, and with [`ScheduleError::SchedulingConflict`]
    /// when another session of the same show in the same dome starts within
    /// the hour before the candidate. Sessions starting within the hour
    /// *after* the candidate are not checked.
    ///
    /// `excluding` names the session being updated so it never conflicts
    /// with itself.
    pub fn validate<'a, I>(
        &self,
        candidate: &SessionCandidate,
        existing: I,
        excluding: Option<i32>,
    ) -> Result<(), ScheduleError>
    where
        I: IntoIterator<Item = &'a ScheduledSession>,
    {
        if candidate.show_time <= self.now() {
            return Err(ScheduleError::PastShowTime {
                show_time: candidate.show_time,
            });
        }

        let (from, until) = conflict_window(candidate.show_time);
        let conflict = existing.into_iter().find(|session| {
            Some(session.id) != excluding
                && session.show_id == candidate.show_id
                && session.dome_id == candidate.dome_id
                && session.show_time >= from
                && session.show_time < until
        });

        match conflict {
            Some(session) => Err(ScheduleError::SchedulingConflict {
                show_time: candidate.show_time,
                conflicting_session: session.id,
                conflicting_time: session.show_time,
            }),
            None => Ok(()),
        }
    }
}

/// Checks that `(row, seat)` lies inside the dome's grid.
///
/// Occupancy is not checked here; the ticket table's unique index settles it.
pub fn validate_seat(row: i32, seat: i32, layout: &DomeLayout) -> Result<(), SeatError> {
    if seat < 1 || seat > layout.seats_in_row {
        return Err(SeatError::InvalidSeat {
            seat,
            seats_in_row: layout.seats_in_row,
        });
    }

    if row < 1 || row > layout.rows {
        return Err(SeatError::InvalidRow {
            row,
            rows: layout.rows,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone};
    use rstest::{fixture, rstest};

    use super::*;

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn local(&self) -> DateTime<Local> {
            self.0.with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2030, 1, 1, hour, minute, 0)
            .single()
            .expect("valid fixture timestamp")
    }

    #[fixture]
    fn validator() -> ShowTimeValidator {
        ShowTimeValidator::new(Arc::new(FixedClock(at(12, 0))))
    }

    fn candidate(show_time: DateTime<Utc>) -> SessionCandidate {
        SessionCandidate {
            show_id: 1,
            dome_id: Some(1),
            show_time,
        }
    }

    fn existing(id: i32, show_time: DateTime<Utc>) -> ScheduledSession {
        ScheduledSession {
            id,
            show_id: 1,
            dome_id: Some(1),
            show_time,
        }
    }

    #[rstest]
    #[case::now(at(12, 0))]
    #[case::earlier_today(at(9, 30))]
    fn rejects_show_times_not_in_the_future(
        validator: ShowTimeValidator,
        #[case] show_time: DateTime<Utc>,
    ) {
        let err = validator
            .validate(&candidate(show_time), &[], None)
            .expect_err("past show time accepted");

        assert_eq!(err, ScheduleError::PastShowTime { show_time });
    }

    #[rstest]
    #[case::thirty_minutes_before(at(19, 30), true)]
    #[case::exactly_one_hour_before(at(19, 0), true)]
    #[case::same_time(at(20, 0), false)]
    #[case::two_hours_before(at(18, 0), false)]
    #[case::thirty_minutes_after(at(20, 30), false)]
    fn checks_only_the_hour_before_the_candidate(
        validator: ShowTimeValidator,
        #[case] earlier: DateTime<Utc>,
        #[case] conflicts: bool,
    ) {
        let sessions = [existing(7, earlier)];
        let result = validator.validate(&candidate(at(20, 0)), &sessions, None);

        if conflicts {
            assert_eq!(
                result,
                Err(ScheduleError::SchedulingConflict {
                    show_time: at(20, 0),
                    conflicting_session: 7,
                    conflicting_time: earlier,
                })
            );
        } else {
            assert_eq!(result, Ok(()));
        }
    }

    #[rstest]
    fn ignores_other_shows_and_domes(validator: ShowTimeValidator) {
        let other_show = ScheduledSession {
            show_id: 2,
            ..existing(1, at(19, 30))
        };
        let other_dome = ScheduledSession {
            dome_id: Some(2),
            ..existing(2, at(19, 30))
        };
        let no_dome = ScheduledSession {
            dome_id: None,
            ..existing(3, at(19, 30))
        };

        let result = validator.validate(
            &candidate(at(20, 0)),
            &[other_show, other_dome, no_dome],
            None,
        );

        assert_eq!(result, Ok(()));
    }

    #[rstest]
    fn sessions_without_a_dome_conflict_with_each_other(validator: ShowTimeValidator) {
        let sessions = [ScheduledSession {
            dome_id: None,
            ..existing(4, at(19, 45))
        }];
        let result = validator.validate(
            &SessionCandidate {
                dome_id: None,
                ..candidate(at(20, 0))
            },
            &sessions,
            None,
        );

        assert!(matches!(
            result,
            Err(ScheduleError::SchedulingConflict {
                conflicting_session: 4,
                ..
            })
        ));
    }

    #[rstest]
    fn excluded_session_does_not_conflict_with_itself(validator: ShowTimeValidator) {
        let sessions = [existing(9, at(19, 30))];

        assert_eq!(
            validator.validate(&candidate(at(20, 0)), &sessions, Some(9)),
            Ok(())
        );
    }

    #[rstest]
    #[case::first_seat(1, 1)]
    #[case::last_seat(10, 20)]
    #[case::middle(5, 11)]
    fn accepts_seats_inside_the_grid(#[case] row: i32, #[case] seat: i32) {
        assert_eq!(validate_seat(row, seat, &DomeLayout::new(10, 20)), Ok(()));
    }

    #[rstest]
    #[case::row_zero(0, 5)]
    #[case::row_past_end(11, 5)]
    #[case::negative_row(-1, 5)]
    fn rejects_rows_outside_the_grid(#[case] row: i32, #[case] seat: i32) {
        assert_eq!(
            validate_seat(row, seat, &DomeLayout::new(10, 20)),
            Err(SeatError::InvalidRow { row, rows: 10 })
        );
    }

    #[rstest]
    #[case::seat_zero(3, 0)]
    #[case::seat_past_end(3, 21)]
    #[case::both_out_of_range(11, 21)]
    fn rejects_seats_outside_the_row(#[case] row: i32, #[case] seat: i32) {
        assert_eq!(
            validate_seat(row, seat, &DomeLayout::new(10, 20)),
            Err(SeatError::InvalidSeat {
                seat,
                seats_in_row: 20,
            })
        );
    }

    #[test]
    fn layout_reports_capacity_and_description() {
        let layout = DomeLayout::new(10, 20);

        assert_eq!(layout.capacity(), 200);
        assert_eq!(layout.to_string(), "10 rows x 20 seats per row");
    }
}
