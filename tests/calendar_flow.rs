/// End-to-end scenarios: seeding, status transitions, toggles, and
/// cancellation surviving a grid rebuild.

use availcal::{
    build_month_grid, classify_day, Appointment, AvailabilitySlot, CalendarStore, DateKey,
    DayStatus, DayViewController, MonthCursor, Patient,
};
use chrono::NaiveDate;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn patient(name: &str, reason: &str) -> Patient {
    Patient {
        name: name.to_string(),
        reason: reason.to_string(),
        clinic: "City Health Clinic".to_string(),
    }
}

#[test]
fn available_to_with_patients_to_full() {
    let today = day(2026, 8, 23);
    let date = day(2026, 8, 24);
    let key = DateKey::from(date);
    let mut store = CalendarStore::new();

    store
        .set_availability(key.clone(), vec![AvailabilitySlot::new("9:00 AM").unwrap()])
        .unwrap();
    assert_eq!(
        classify_day(date, today, store.availability(&key), store.appointments(&key)),
        DayStatus::Available
    );

    store.set_appointments(
        key.clone(),
        vec![Appointment::new("9:00 AM", Some(patient("Sarah Johnson", "Follow-up"))).unwrap()],
    );
    assert_eq!(
        classify_day(date, today, store.availability(&key), store.appointments(&key)),
        DayStatus::WithPatients
    );

    let mut controller = DayViewController::new(&mut store);
    controller.clear_day(date).unwrap();

    assert!(store.availability(&key).is_empty());
    assert_eq!(store.appointments(&key).len(), 1);
    assert_eq!(
        classify_day(date, today, store.availability(&key), store.appointments(&key)),
        DayStatus::Full
    );
}

#[test]
fn seeded_month_renders_available_weekdays() {
    let today = day(2026, 8, 3); // a Monday
    let store = CalendarStore::seeded(today);

    let grid = build_month_grid(MonthCursor::for_date(today), today, &store).unwrap();

    // Before-today weekdays are past despite being seeded.
    assert_eq!(grid.day(1).unwrap().status, DayStatus::Past);
    // Seeded weekdays on/after today are available, weekends unavailable.
    assert_eq!(grid.day(3).unwrap().status, DayStatus::Available);
    assert_eq!(grid.day(4).unwrap().status, DayStatus::Available);
    assert_eq!(grid.day(8).unwrap().status, DayStatus::Unavailable);
    assert!(grid.day(8).unwrap().is_weekend);
    assert_eq!(grid.day(3).unwrap().availability.len(), 21);
}

#[test]
fn toggle_day_on_excludes_booked_time() {
    let date = day(2026, 8, 24);
    let key = DateKey::from(date);
    let mut store = CalendarStore::new();
    store.set_appointments(
        key.clone(),
        vec![Appointment::new("10:00 AM", Some(patient("Liam Carter", "Checkup"))).unwrap()],
    );

    let mut controller = DayViewController::new(&mut store);
    controller.toggle_day(date, false).unwrap();
    assert!(store.availability(&key).is_empty());

    let mut controller = DayViewController::new(&mut store);
    controller.toggle_day(date, true).unwrap();
    let stored = store.availability(&key);
    assert_eq!(stored.len(), 20);
    assert!(stored.iter().all(|slot| slot.time != "10:00 AM"));
}

#[test]
fn cancellation_survives_month_navigation() {
    let today = day(2026, 8, 23);
    let date = day(2026, 8, 24);
    let key = DateKey::from(date);
    let mut store = CalendarStore::new();
    store.set_appointments(
        key.clone(),
        vec![Appointment::new("10:00 AM", Some(patient("Sarah Johnson", "Follow-up"))).unwrap()],
    );

    let mut controller = DayViewController::new(&mut store);
    assert!(controller.cancel_appointment(date, 6).unwrap());

    // Navigate away and back; the rebuilt grid must not resurrect it.
    let cursor = MonthCursor::for_date(today);
    let elsewhere = build_month_grid(cursor.next(), today, &store).unwrap();
    assert_eq!(elsewhere.month0, cursor.next().month0);
    let back = build_month_grid(cursor, today, &store).unwrap();

    let cell = back.day(24).unwrap();
    assert!(cell.appointments.is_empty());
    assert_eq!(cell.status, DayStatus::Unavailable);
}

#[test]
fn toggling_a_booked_slot_changes_nothing() {
    let date = day(2026, 8, 24);
    let key = DateKey::from(date);
    let mut store = CalendarStore::seeded(date);
    store.set_appointments(
        key.clone(),
        vec![Appointment::new("9:00 AM", Some(patient("Sarah Johnson", "Follow-up"))).unwrap()],
    );
    let availability_before = store.availability(&key).to_vec();
    let appointments_before = store.appointments(&key).to_vec();

    let mut controller = DayViewController::new(&mut store);
    assert!(!controller.toggle_slot(date, 4).unwrap());

    assert_eq!(store.availability(&key), availability_before.as_slice());
    assert_eq!(store.appointments(&key), appointments_before.as_slice());
}
