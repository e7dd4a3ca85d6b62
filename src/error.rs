use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Time label cannot be empty")]
    EmptyTimeLabel,

    #[error("Duplicate time label in availability list: {time}")]
    DuplicateSlotTime { time: String },

    #[error("Slot index {index} out of range for a {len}-slot day")]
    SlotIndexOutOfRange { index: usize, len: usize },

    #[error("Month index {month0} out of range (expected 0-11)")]
    InvalidMonth { month0: u32 },

    #[error("No such calendar date: year {year}, month {month0}, day {day}")]
    InvalidDate { year: i32, month0: u32, day: u32 },
}
