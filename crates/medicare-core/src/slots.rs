use chrono::{Datelike, Days, Local, NaiveDate, NaiveTime, Weekday};
use medicare_schema::AvailableSlot;

/// Fixed consultation times offered on every working day, as (hour, minute).
pub const SLOT_TIMES: [(u32, u32); 5] = [(9, 0), (10, 30), (14, 0), (15, 30), (16, 30)];

fn slot_times() -> impl Iterator<Item = NaiveTime> {
    SLOT_TIMES
        .iter()
        .filter_map(|&(h, m)| NaiveTime::from_hms_opt(h, m, 0))
}

/// Upcoming availability relative to the current local date.
pub fn available_slots() -> Vec<AvailableSlot> {
    available_slots_from(Local::now().date_naive())
}

/// Deterministic availability for the 7 days after `today`: weekdays only,
/// one slot per fixed time, all marked available. Any 7-day window holds
/// exactly 5 weekdays, so this always yields 25 entries. Recomputed on
/// every call, never cached or decremented.
pub fn available_slots_from(today: NaiveDate) -> Vec<AvailableSlot> {
    let mut slots = Vec::new();
    for i in 1..=7 {
        let date = today + Days::new(i);
        if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            continue;
        }
        for time in slot_times() {
            slots.push(AvailableSlot::new(date, time));
        }
    }
    slots
}
