use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::Event;

/// How a day renders on the schedule calendar.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DayMarking {
    /// The selected day. Wins over `Marked` when the day also has events.
    Selected,
    /// At least one event falls on this day.
    Marked,
}

impl DayMarking {
    pub fn is_selected(self) -> bool {
        matches!(self, DayMarking::Selected)
    }

    pub fn has_dot(self) -> bool {
        matches!(self, DayMarking::Marked)
    }
}

/// Calendar markings for every event date plus the selected date.
pub fn marked_dates(events: &[Event], selected: NaiveDate) -> BTreeMap<NaiveDate, DayMarking> {
    let mut marks: BTreeMap<NaiveDate, DayMarking> = events
        .iter()
        .map(|event| (event.date, DayMarking::Marked))
        .collect();
    marks.insert(selected, DayMarking::Selected);
    marks
}

/// Inclusive date range the calendar is allowed to show.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct FairWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl FairWindow {
    /// Swaps the bounds when given in reverse.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn clamp(&self, date: NaiveDate) -> NaiveDate {
        date.clamp(self.start, self.end)
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, day).unwrap()
    }

    #[test]
    fn every_event_date_gets_a_dot() {
        let data = seed::agroexpo_2025();
        let marks = marked_dates(&data.events, date(21));
        assert_eq!(marks.get(&date(21)), Some(&DayMarking::Selected));
        for day in [22, 23, 24, 25] {
            assert_eq!(marks.get(&date(day)), Some(&DayMarking::Marked), "day {day}");
        }
        assert_eq!(marks.len(), 5);
    }

    #[test]
    fn window_iterates_inclusive_days() {
        let window = FairWindow::new(date(25), date(21));
        assert_eq!(window.start, date(21));
        assert_eq!(window.days().count(), 5);
        assert!(window.contains(date(25)));
        assert!(!window.contains(date(26)));
        assert_eq!(window.clamp(date(30)), date(25));
        assert_eq!(window.clamp(date(1)), date(21));
    }
}
