/// Day-status classification.
///
/// Derives one of five statuses for a calendar day from its availability
/// and appointment sets. Total over every input combination; the `Full`
/// status (booked with no declared open hours) is inconsistent but
/// representable and is rendered, not rejected.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::{Appointment, AvailabilitySlot, DayStatus};

/// Classify a day. The past check is date-only and dominates everything
/// else; weekend-ness never enters the rules.
pub fn classify_day(
    date: NaiveDate,
    today: NaiveDate,
    availability: &[AvailabilitySlot],
    appointments: &[Appointment],
) -> DayStatus {
    if date < today {
        return DayStatus::Past;
    }

    match (availability.is_empty(), appointments.is_empty()) {
        (true, true) => DayStatus::Unavailable,
        (true, false) => DayStatus::Full,
        (false, true) => DayStatus::Available,
        (false, false) => DayStatus::WithPatients,
    }
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
