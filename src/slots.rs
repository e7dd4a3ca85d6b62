/// The fixed half-hour slot template for a working day.
///
/// Every bookable hour in the system comes from this template: 07:00
/// through 17:00 inclusive, stepping by 30 minutes (the 17:30 slot does
/// not exist). Each entry carries a 24-hour label and the 12-hour AM/PM
/// display label the rest of the system joins on.

use crate::models::SlotTime;

pub const DAY_START_HOUR: u32 = 7;
pub const DAY_END_HOUR: u32 = 17;
pub const SLOT_MINUTES: u32 = 30;

/// Produce the ordered slot template. Deterministic; 21 entries.
pub fn slot_template() -> Vec<SlotTime> {
    let mut slots = Vec::new();
    let mut minutes = DAY_START_HOUR * 60;

    while minutes <= DAY_END_HOUR * 60 {
        let hour = minutes / 60;
        let minute = minutes % 60;
        slots.push(SlotTime {
            label_24h: format!("{:02}:{:02}", hour, minute),
            display: display_label(hour, minute),
        });
        minutes += SLOT_MINUTES;
    }

    slots
}

/// 12-hour AM/PM form of an hour/minute pair, without a leading zero on
/// the hour ("7:00 AM", "12:30 PM", "1:00 PM").
pub fn display_label(hour: u32, minute: u32) -> String {
    let suffix = if hour < 12 { "AM" } else { "PM" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", display_hour, minute, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_has_21_half_hour_slots() {
        let template = slot_template();
        assert_eq!(template.len(), 21);
    }

    #[test]
    fn template_spans_seven_to_five() {
        let template = slot_template();
        assert_eq!(template[0].label_24h, "07:00");
        assert_eq!(template[0].display, "7:00 AM");
        assert_eq!(template[template.len() - 1].label_24h, "17:00");
        assert_eq!(template[template.len() - 1].display, "5:00 PM");
    }

    #[test]
    fn template_is_ordered_and_half_hour_stepped() {
        let template = slot_template();
        for pair in template.windows(2) {
            assert!(pair[0].label_24h < pair[1].label_24h);
        }
        assert_eq!(template[1].label_24h, "07:30");
        assert_eq!(template[1].display, "7:30 AM");
    }

    #[test]
    fn noon_and_afternoon_labels() {
        assert_eq!(display_label(12, 0), "12:00 PM");
        assert_eq!(display_label(12, 30), "12:30 PM");
        assert_eq!(display_label(13, 0), "1:00 PM");
        assert_eq!(display_label(11, 30), "11:30 AM");
    }
}
