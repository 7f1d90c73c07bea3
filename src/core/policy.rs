//! Rotation policy: due dates and overdue status.
//!
//! Pure date arithmetic on already-validated inputs. A credential is due on
//! `last_rotated + rotation_days` and becomes overdue only once the current
//! date is strictly past that day.

use chrono::{Days, NaiveDate};
use serde::Serialize;

/// Date on which the next rotation is due.
///
/// Saturates at [`NaiveDate::MAX`] when the interval runs past the calendar range.
pub fn next_due_date(last_rotated: NaiveDate, rotation_days: u32) -> NaiveDate {
    last_rotated
        .checked_add_days(Days::new(u64::from(rotation_days)))
        .unwrap_or(NaiveDate::MAX)
}

/// Whether `today` is strictly past the due date. Due today is not overdue.
pub fn is_overdue(last_rotated: NaiveDate, rotation_days: u32, today: NaiveDate) -> bool {
    today > next_due_date(last_rotated, rotation_days)
}

/// Whole days from `today` until the due date; negative once overdue.
pub fn days_remaining(last_rotated: NaiveDate, rotation_days: u32, today: NaiveDate) -> i64 {
    (next_due_date(last_rotated, rotation_days) - today).num_days()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RotationState {
    Ok,
    Overdue,
}

impl RotationState {
    pub fn label(self) -> &'static str {
        match self {
            RotationState::Ok => "OK",
            RotationState::Overdue => "OVERDUE",
        }
    }
}

/// Rotation status of one record as of a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RotationStatus {
    pub next_due: NaiveDate,
    pub days_remaining: i64,
    pub state: RotationState,
}

impl RotationStatus {
    pub fn compute(last_rotated: NaiveDate, rotation_days: u32, today: NaiveDate) -> Self {
        let next_due = next_due_date(last_rotated, rotation_days);
        let state = if today > next_due {
            RotationState::Overdue
        } else {
            RotationState::Ok
        };
        Self {
            next_due,
            days_remaining: (next_due - today).num_days(),
            state,
        }
    }

    pub fn is_overdue(&self) -> bool {
        self.state == RotationState::Overdue
    }
}
