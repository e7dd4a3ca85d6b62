/// Data models for the availability calendar.
///
/// This module defines the core data structures used throughout the system:
/// - DateKey: join key identifying a calendar day
/// - Patient / Appointment: booked-slot records
/// - AvailabilitySlot: a declared open half-hour
/// - DayStatus: derived per-day state
/// - DayCell / MonthGrid / TimeSlot: derived view structures

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CalendarError;

/// Join key identifying a calendar day across the availability and
/// appointment collections. Built over a zero-based month so identical
/// calendar days always produce an identical key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateKey(String);

impl DateKey {
    /// Build a key from a year, zero-based month and day-of-month.
    pub fn from_ymd(year: i32, month0: u32, day: u32) -> Self {
        DateKey(format!("{}-{}-{}", year, month0, day))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        DateKey::from_ymd(date.year(), date.month0(), date.day())
    }
}

impl std::fmt::Display for DateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Patient details attached to a booked appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub name: String,
    pub reason: String,
    pub clinic: String,
}

/// A declared open half-hour in a doctor's day.
///
/// Slot lists are replaced wholesale, never patched; a fresh id is minted
/// whenever a slot is (re)declared open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    pub id: Uuid,
    pub time: String,
    pub is_available: bool,
}

impl AvailabilitySlot {
    /// Create an open slot with validation of the time label.
    pub fn new(time: impl Into<String>) -> Result<Self, CalendarError> {
        let time = time.into();
        if time.trim().is_empty() {
            return Err(CalendarError::EmptyTimeLabel);
        }
        Ok(AvailabilitySlot {
            id: Uuid::new_v4(),
            time,
            is_available: true,
        })
    }
}

/// A booked appointment on a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub time: String,
    pub patient: Option<Patient>,
}

impl Appointment {
    /// Create an appointment with validation of the time label.
    pub fn new(time: impl Into<String>, patient: Option<Patient>) -> Result<Self, CalendarError> {
        let time = time.into();
        if time.trim().is_empty() {
            return Err(CalendarError::EmptyTimeLabel);
        }
        Ok(Appointment {
            id: Uuid::new_v4(),
            time,
            patient,
        })
    }
}

/// Derived display/semantic state of a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DayStatus {
    Past,
    Available,
    WithPatients,
    Full,
    Unavailable,
}

impl DayStatus {
    pub fn name(&self) -> &'static str {
        match self {
            DayStatus::Past => "past",
            DayStatus::Available => "available",
            DayStatus::WithPatients => "with-patients",
            DayStatus::Full => "full",
            DayStatus::Unavailable => "unavailable",
        }
    }
}

/// One entry of the fixed slot template: the 24-hour label and its
/// 12-hour AM/PM display form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotTime {
    pub label_24h: String,
    pub display: String,
}

/// A single day cell of the month grid. Recomputed on every build;
/// never stored.
#[derive(Debug, Clone, Serialize)]
pub struct DayCell {
    pub day: u32,
    pub date: NaiveDate,
    pub is_past: bool,
    pub is_weekend: bool,
    pub status: DayStatus,
    pub appointments: Vec<Appointment>,
    pub availability: Vec<AvailabilitySlot>,
}

/// A month laid out as 7-column weeks, `None` padding the first and last
/// rows to full width.
#[derive(Debug, Clone, Serialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month0: u32,
    pub month_name: &'static str,
    pub weeks: Vec<Vec<Option<DayCell>>>,
}

/// A day-view row: one template slot joined against the day's
/// availability and appointment sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeSlot {
    pub time: String,
    pub original_time: String,
    pub available: bool,
    pub has_appointment: bool,
    pub patient: Option<Patient>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_key_is_stable_for_equal_days() {
        let a = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();
        let b = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();
        assert_eq!(DateKey::from(a), DateKey::from(b));
    }

    #[test]
    fn date_key_uses_zero_based_month() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        assert_eq!(DateKey::from(date).as_str(), "2026-0-5");
    }

    #[test]
    fn empty_time_label_is_rejected() {
        assert_eq!(
            AvailabilitySlot::new("  ").unwrap_err(),
            CalendarError::EmptyTimeLabel
        );
        assert_eq!(
            Appointment::new("", None).unwrap_err(),
            CalendarError::EmptyTimeLabel
        );
    }

    #[test]
    fn day_status_serializes_kebab_case() {
        let json = serde_json::to_string(&DayStatus::WithPatients).unwrap();
        assert_eq!(json, "\"with-patients\"");
    }
}
