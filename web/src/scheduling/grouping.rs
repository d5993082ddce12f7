use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use shared_types::InterviewAvailability;

/// Display-ready projection of one published availability slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySlot {
    pub availability_id: i64,
    pub start_at: NaiveDateTime,
    pub date: NaiveDate,
    pub date_label: String,
    pub time_label: String,
    pub available: bool,
    pub capacity: i64,
    pub professor_name: String,
    pub program_name: String,
    pub academic_period_name: String,
    pub mode: String,
    pub location: String,
    pub meeting_link: String,
}

impl DisplaySlot {
    /// Returns `None` when the backend sends a start timestamp in none of
    /// the accepted formats.
    pub fn from_availability(availability: &InterviewAvailability) -> Option<Self> {
        let start_at = parse_start_at(&availability.interviewer_start_at)?;
        Some(Self {
            availability_id: availability.id,
            start_at,
            date: start_at.date(),
            date_label: format_date_label(start_at.date()),
            time_label: start_at.format("%H:%M").to_string(),
            available: availability.capacity > 0,
            capacity: availability.capacity,
            professor_name: availability.professor_name.clone(),
            program_name: availability.program_name.clone(),
            academic_period_name: availability.academic_period_name.clone(),
            mode: availability.mode.clone(),
            location: availability.location.clone(),
            meeting_link: availability.meeting_link.clone(),
        })
    }
}

/// All slots sharing one calendar day, in start-time order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub date: NaiveDate,
    pub label: String,
    pub slots: Vec<DisplaySlot>,
}

/// The full schedule, days ascending.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupedSchedule {
    pub days: Vec<DaySchedule>,
}

impl GroupedSchedule {
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn slot_count(&self) -> usize {
        self.days.iter().map(|day| day.slots.len()).sum()
    }
}

/// Buckets availabilities by the calendar date of their start timestamp.
///
/// Every parseable record maps to exactly one slot; fully booked slots
/// (`capacity == 0`) are kept and flagged unavailable. Days come out in
/// chronological order and slots within a day in start-time order.
pub fn group_by_date(availabilities: &[InterviewAvailability]) -> GroupedSchedule {
    let mut buckets: BTreeMap<NaiveDate, Vec<DisplaySlot>> = BTreeMap::new();

    for availability in availabilities {
        match DisplaySlot::from_availability(availability) {
            Some(slot) => buckets.entry(slot.date).or_default().push(slot),
            None => leptos::logging::warn!(
                "dropping availability {}: malformed start timestamp {:?}",
                availability.id,
                availability.interviewer_start_at
            ),
        }
    }

    let days = buckets
        .into_iter()
        .map(|(date, mut slots)| {
            slots.sort_by_key(|slot| slot.start_at);
            DaySchedule {
                date,
                label: format_date_label(date),
                slots,
            }
        })
        .collect();

    GroupedSchedule { days }
}

/// Formats a raw backend timestamp as `(date label, time label)`, e.g.
/// `("Monday, March 2, 2026", "09:00")`. Used for appointment summaries,
/// which carry raw timestamps rather than display slots.
pub fn format_start_label(raw: &str) -> Option<(String, String)> {
    let start_at = parse_start_at(raw)?;
    Some((
        format_date_label(start_at.date()),
        start_at.format("%H:%M").to_string(),
    ))
}

// Laravel serializes timestamps either as RFC 3339 or as a bare local
// datetime, depending on the model cast.
fn parse_start_at(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(parsed) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.naive_local());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S"))
        .ok()
}

fn format_date_label(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn availability(id: i64, start_at: &str, capacity: i64) -> InterviewAvailability {
        InterviewAvailability {
            id,
            interviewer_start_at: start_at.to_string(),
            interviewer_end_at: start_at.to_string(),
            professor_name: "Elena Vargas".to_string(),
            academic_period_name: "2026-I".to_string(),
            program_name: "MSc Systems Engineering".to_string(),
            capacity,
            mode: "in-person".to_string(),
            location: "Building A, Room 301".to_string(),
            meeting_link: String::new(),
        }
    }

    #[test]
    fn empty_input_yields_empty_schedule() {
        let schedule = group_by_date(&[]);
        assert!(schedule.is_empty());
        assert_eq!(schedule.slot_count(), 0);
    }

    #[test]
    fn same_day_slots_share_one_group_and_keep_full_slots() {
        // Two slots on 2026-03-02; the 09:30 one is fully booked.
        let input = vec![
            availability(1, "2026-03-02T09:00:00", 1),
            availability(2, "2026-03-02T09:30:00", 0),
        ];
        let schedule = group_by_date(&input);

        assert_eq!(schedule.days.len(), 1);
        let day = &schedule.days[0];
        assert_eq!(day.date, NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
        assert_eq!(day.label, "Monday, March 2, 2026");
        assert_eq!(day.slots.len(), 2);
        assert!(day.slots[0].available);
        assert!(!day.slots[1].available);
        assert_eq!(day.slots[1].time_label, "09:30");
    }

    #[test]
    fn grouping_partitions_the_input_exactly() {
        let input = vec![
            availability(1, "2026-03-04T10:00:00", 1),
            availability(2, "2026-03-02T09:00:00", 2),
            availability(3, "2026-03-04T08:00:00", 0),
            availability(4, "2026-03-03T11:00:00", 1),
        ];
        let schedule = group_by_date(&input);

        assert_eq!(schedule.slot_count(), input.len());
        let mut seen: Vec<i64> = schedule
            .days
            .iter()
            .flat_map(|day| day.slots.iter().map(|slot| slot.availability_id))
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![1, 2, 3, 4]);
    }

    #[test]
    fn days_ascend_and_slots_sort_by_start_time() {
        let input = vec![
            availability(1, "2026-03-04T10:00:00", 1),
            availability(2, "2026-03-02T09:00:00", 1),
            availability(3, "2026-03-04T08:00:00", 1),
        ];
        let schedule = group_by_date(&input);

        let dates: Vec<NaiveDate> = schedule.days.iter().map(|day| day.date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);

        let march_4 = &schedule.days[1];
        assert_eq!(march_4.slots[0].availability_id, 3);
        assert_eq!(march_4.slots[1].availability_id, 1);
    }

    #[test]
    fn malformed_timestamps_are_skipped_not_fatal() {
        let input = vec![
            availability(1, "2026-03-02T09:00:00", 1),
            availability(2, "not-a-date", 1),
        ];
        let schedule = group_by_date(&input);
        assert_eq!(schedule.slot_count(), 1);
        assert_eq!(schedule.days[0].slots[0].availability_id, 1);
    }

    #[test]
    fn start_label_splits_date_and_time() {
        assert_eq!(
            format_start_label("2026-03-02T09:00:00"),
            Some(("Monday, March 2, 2026".to_string(), "09:00".to_string()))
        );
        assert_eq!(format_start_label("soon"), None);
    }

    #[test]
    fn accepts_rfc3339_and_space_separated_formats() {
        let input = vec![
            availability(1, "2026-03-02T09:00:00-05:00", 1),
            availability(2, "2026-03-02 09:30:00", 1),
        ];
        let schedule = group_by_date(&input);
        assert_eq!(schedule.slot_count(), 2);
        assert_eq!(schedule.days.len(), 1);
    }
}
