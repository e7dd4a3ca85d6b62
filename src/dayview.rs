/// Day view controller.
///
/// Presents a single day's full slot template joined against the store
/// and mediates the slot/day mutations. The store is injected by mutable
/// borrow; every mutation ends in a wholesale `set_availability` or
/// `set_appointments` write, and callers rebuild their views afterwards.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::CalendarError;
use crate::models::{Appointment, AvailabilitySlot, DateKey, TimeSlot};
use crate::slots;
use crate::store::CalendarStore;

pub struct DayViewController<'a> {
    store: &'a mut CalendarStore,
}

impl<'a> DayViewController<'a> {
    pub fn new(store: &'a mut CalendarStore) -> Self {
        DayViewController { store }
    }

    /// Join the fixed slot template against the day's availability and
    /// appointment sets, matching on the display label.
    pub fn day_slots(&self, date: NaiveDate) -> Vec<TimeSlot> {
        let key = DateKey::from(date);
        let availability = self.store.availability(&key);
        let appointments = self.store.appointments(&key);

        slots::slot_template()
            .into_iter()
            .map(|slot| {
                let appointment = appointments.iter().find(|a| a.time == slot.display);
                let open = availability
                    .iter()
                    .find(|a| a.time == slot.display)
                    .map(|a| a.is_available)
                    .unwrap_or(false);

                TimeSlot {
                    has_appointment: appointment.is_some(),
                    patient: appointment.and_then(|a| a.patient.clone()),
                    available: open,
                    time: slot.display,
                    original_time: slot.label_24h,
                }
            })
            .collect()
    }

    /// Flip one slot's availability and persist the day's new list.
    ///
    /// Slots carrying an appointment are not togglable through this path;
    /// the attempt is ignored and `Ok(false)` returned with the store
    /// untouched.
    pub fn toggle_slot(&mut self, date: NaiveDate, index: usize) -> Result<bool, CalendarError> {
        let mut day = self.day_slots(date);
        let len = day.len();
        let slot = day
            .get_mut(index)
            .ok_or(CalendarError::SlotIndexOutOfRange { index, len })?;

        if slot.has_appointment {
            debug!(time = slot.time.as_str(), "toggle ignored: slot has an appointment");
            return Ok(false);
        }

        slot.available = !slot.available;
        debug!(%date, time = day[index].time.as_str(), "toggled slot");
        self.write_back(date, &day)?;
        Ok(true)
    }

    /// Set every non-appointment slot to a single availability state in
    /// one operation; turning the day off persists an empty list.
    pub fn toggle_day(&mut self, date: NaiveDate, make_available: bool) -> Result<(), CalendarError> {
        let mut day = self.day_slots(date);
        for slot in day.iter_mut().filter(|s| !s.has_appointment) {
            slot.available = make_available;
        }

        debug!(%date, make_available, "toggled whole day");
        self.write_back(date, &day)
    }

    /// Unconditionally empty the day's availability list. Appointments
    /// are left untouched; only the open-hours declarations go.
    pub fn clear_day(&mut self, date: NaiveDate) -> Result<(), CalendarError> {
        debug!(%date, "clearing availability");
        self.store.set_availability(DateKey::from(date), Vec::new())
    }

    /// Cancel the appointment occupying a slot. The cancellation is
    /// written through to the appointment store, so it survives month
    /// navigation and grid rebuilds. Returns `Ok(false)` when the slot
    /// holds no appointment.
    pub fn cancel_appointment(
        &mut self,
        date: NaiveDate,
        index: usize,
    ) -> Result<bool, CalendarError> {
        let day = self.day_slots(date);
        let len = day.len();
        let slot = day
            .get(index)
            .ok_or(CalendarError::SlotIndexOutOfRange { index, len })?;

        if !slot.has_appointment {
            return Ok(false);
        }

        let key = DateKey::from(date);
        let remaining: Vec<Appointment> = self
            .store
            .appointments(&key)
            .iter()
            .filter(|a| a.time != slot.time)
            .cloned()
            .collect();

        debug!(%date, time = slot.time.as_str(), "cancelling appointment");
        self.store.set_appointments(key, remaining);
        Ok(true)
    }

    /// Persist the day: every slot now flagged available, excluding any
    /// carrying an appointment.
    fn write_back(&mut self, date: NaiveDate, day: &[TimeSlot]) -> Result<(), CalendarError> {
        let open: Vec<AvailabilitySlot> = day
            .iter()
            .filter(|s| s.available && !s.has_appointment)
            .map(|s| AvailabilitySlot::new(s.time.clone()))
            .collect::<Result<_, _>>()?;

        self.store.set_availability(DateKey::from(date), open)
    }
}
