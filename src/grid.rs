/// Month grid construction.
///
/// Lays a calendar month out as 7-column weeks (Monday = column 0),
/// building each day cell from store lookups plus the day-status
/// classifier. Pure read + transform; callers rebuild after any store
/// change since cell status depends on both collections.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::CalendarError;
use crate::models::{DateKey, DayCell, MonthGrid};
use crate::status;
use crate::store::CalendarStore;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Reference month for grid navigation. Months are zero-based;
/// navigation is unbounded in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthCursor {
    pub year: i32,
    pub month0: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month0: u32) -> Result<Self, CalendarError> {
        if month0 > 11 {
            return Err(CalendarError::InvalidMonth { month0 });
        }
        Ok(MonthCursor { year, month0 })
    }

    pub fn for_date(date: NaiveDate) -> Self {
        MonthCursor {
            year: date.year(),
            month0: date.month0(),
        }
    }

    pub fn previous(self) -> Self {
        if self.month0 == 0 {
            MonthCursor {
                year: self.year - 1,
                month0: 11,
            }
        } else {
            MonthCursor {
                year: self.year,
                month0: self.month0 - 1,
            }
        }
    }

    pub fn next(self) -> Self {
        if self.month0 == 11 {
            MonthCursor {
                year: self.year + 1,
                month0: 0,
            }
        } else {
            MonthCursor {
                year: self.year,
                month0: self.month0 + 1,
            }
        }
    }

    pub fn month_name(self) -> &'static str {
        MONTH_NAMES[(self.month0 as usize).min(11)]
    }
}

/// Number of days in the cursor's month.
pub fn days_in_month(cursor: MonthCursor) -> Result<u32, CalendarError> {
    let next = cursor.next();
    let first_of_next =
        NaiveDate::from_ymd_opt(next.year, next.month0 + 1, 1).ok_or(CalendarError::InvalidDate {
            year: next.year,
            month0: next.month0,
            day: 1,
        })?;
    let last = first_of_next.pred_opt().ok_or(CalendarError::InvalidDate {
        year: cursor.year,
        month0: cursor.month0,
        day: 1,
    })?;
    Ok(last.day())
}

/// Build the month grid for `cursor`, classifying every day against the
/// store's availability and appointment sets.
pub fn build_month_grid(
    cursor: MonthCursor,
    today: NaiveDate,
    store: &CalendarStore,
) -> Result<MonthGrid, CalendarError> {
    let first = NaiveDate::from_ymd_opt(cursor.year, cursor.month0 + 1, 1).ok_or(
        CalendarError::InvalidDate {
            year: cursor.year,
            month0: cursor.month0,
            day: 1,
        },
    )?;
    let days = days_in_month(cursor)?;

    let mut weeks: Vec<Vec<Option<DayCell>>> = Vec::new();
    let mut week: Vec<Option<DayCell>> = Vec::with_capacity(7);

    // Monday = column 0.
    for _ in 0..first.weekday().num_days_from_monday() {
        week.push(None);
    }

    for day in 1..=days {
        let date = NaiveDate::from_ymd_opt(cursor.year, cursor.month0 + 1, day).ok_or(
            CalendarError::InvalidDate {
                year: cursor.year,
                month0: cursor.month0,
                day,
            },
        )?;
        let key = DateKey::from(date);
        let availability = store.availability(&key).to_vec();
        let appointments = store.appointments(&key).to_vec();
        let day_status = status::classify_day(date, today, &availability, &appointments);

        week.push(Some(DayCell {
            day,
            date,
            is_past: date < today,
            is_weekend: status::is_weekend(date),
            status: day_status,
            appointments,
            availability,
        }));

        if week.len() == 7 {
            weeks.push(std::mem::take(&mut week));
        }
    }

    if !week.is_empty() {
        while week.len() < 7 {
            week.push(None);
        }
        weeks.push(week);
    }

    Ok(MonthGrid {
        year: cursor.year,
        month0: cursor.month0,
        month_name: cursor.month_name(),
        weeks,
    })
}

impl MonthGrid {
    /// Look up a day cell by day-of-month.
    pub fn day(&self, day: u32) -> Option<&DayCell> {
        self.weeks
            .iter()
            .flatten()
            .flatten()
            .find(|cell| cell.day == day)
    }
}
