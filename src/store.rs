/// In-memory availability and appointment store.
///
/// `CalendarStore` is the single source of truth the grid and day view
/// derive from. It maps a `DateKey` to the day's availability slots and
/// to its booked appointments; both sets are replaced wholesale, never
/// merged. Lookups on unrecorded days return an empty slice, never an
/// option.

use std::collections::{HashMap, HashSet};

use chrono::{Datelike, NaiveDate};
use tracing::debug;
use uuid::Uuid;

use crate::error::CalendarError;
use crate::models::{Appointment, AvailabilitySlot, DateKey};
use crate::slots;
use crate::status;

#[derive(Debug, Clone, Default)]
pub struct CalendarStore {
    availability: HashMap<DateKey, Vec<AvailabilitySlot>>,
    appointments: HashMap<DateKey, Vec<Appointment>>,
}

impl CalendarStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with every weekday (Mon-Fri) of `today`'s month
    /// pre-populated with the full slot template, all marked available.
    /// Weekends and all other months start empty.
    pub fn seeded(today: NaiveDate) -> Self {
        let mut store = Self::new();
        let template = slots::slot_template();

        let mut date = match today.with_day(1) {
            Some(first) => first,
            None => today,
        };
        while date.month0() == today.month0() && date.year() == today.year() {
            if !status::is_weekend(date) {
                let day_slots: Vec<AvailabilitySlot> = template
                    .iter()
                    .map(|slot| AvailabilitySlot {
                        id: Uuid::new_v4(),
                        time: slot.display.clone(),
                        is_available: true,
                    })
                    .collect();
                store.availability.insert(DateKey::from(date), day_slots);
            }
            date = match date.succ_opt() {
                Some(next) => next,
                None => break,
            };
        }

        debug!(days = store.availability.len(), "seeded current month");
        store
    }

    /// The day's availability slots; empty when none recorded.
    pub fn availability(&self, key: &DateKey) -> &[AvailabilitySlot] {
        self.availability.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The day's booked appointments; empty when none recorded.
    pub fn appointments(&self, key: &DateKey) -> &[Appointment] {
        self.appointments.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Replace a day's availability list wholesale. Callers compute the
    /// full desired list; two entries sharing a time label are rejected.
    pub fn set_availability(
        &mut self,
        key: DateKey,
        day_slots: Vec<AvailabilitySlot>,
    ) -> Result<(), CalendarError> {
        let mut seen = HashSet::new();
        for slot in &day_slots {
            if !seen.insert(slot.time.as_str()) {
                return Err(CalendarError::DuplicateSlotTime {
                    time: slot.time.clone(),
                });
            }
        }

        debug!(day = key.as_str(), count = day_slots.len(), "replacing availability");
        if day_slots.is_empty() {
            self.availability.remove(&key);
        } else {
            self.availability.insert(key, day_slots);
        }
        Ok(())
    }

    /// Replace a day's appointment list wholesale.
    pub fn set_appointments(&mut self, key: DateKey, appointments: Vec<Appointment>) {
        debug!(day = key.as_str(), count = appointments.len(), "replacing appointments");
        if appointments.is_empty() {
            self.appointments.remove(&key);
        } else {
            self.appointments.insert(key, appointments);
        }
    }
}
