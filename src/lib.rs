/// In-memory doctor availability and appointment calendar model.
///
/// A fixed half-hour slot template (07:00-17:00) is joined against a
/// per-day availability/appointment store to derive month grids and
/// day views; a controller mediates slot and whole-day toggles, day
/// clearing, and appointment cancellation.

pub mod dayview;
pub mod error;
pub mod grid;
pub mod models;
pub mod slots;
pub mod status;
pub mod store;

pub use dayview::DayViewController;
pub use error::CalendarError;
pub use grid::{build_month_grid, days_in_month, MonthCursor};
pub use models::{
    Appointment, AvailabilitySlot, DateKey, DayCell, DayStatus, MonthGrid, Patient, SlotTime,
    TimeSlot,
};
pub use slots::slot_template;
pub use status::classify_day;
pub use store::CalendarStore;
