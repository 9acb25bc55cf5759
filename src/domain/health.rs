// src/domain/health.rs
use std::rc::Rc;

use chrono::NaiveDate;

use crate::datekey::{day_key, today};
use crate::entity::{HealthEntry, HealthField, HealthState};
use crate::store::{Collection, Substrate};

use super::keys;

/// One day of the rolling window; `entry` is None when nothing was
/// recorded for that day, which callers must handle per day.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySample {
    pub day: String,
    pub entry: Option<HealthEntry>,
}

/// Daily health metrics, keyed by day.
pub struct HealthLog {
    collection: Collection<HealthState>,
    state: HealthState,
}

impl HealthLog {
    pub fn open(substrate: Rc<dyn Substrate>) -> Self {
        let collection = Collection::new(substrate, keys::HEALTH);
        let state = collection.load(HealthState::default());
        Self { collection, state }
    }

    /// Record one field for today, creating today's entry lazily and
    /// preserving the other field.
    pub fn update(&mut self, field: HealthField, value: &str) {
        self.update_on(field, value, today());
    }

    pub fn update_on(&mut self, field: HealthField, value: &str, date: NaiveDate) {
        let entry = self.state.entries.entry(day_key(date)).or_default();
        match field {
            HealthField::Weight => entry.weight = Some(value.to_string()),
            HealthField::Sleep => entry.sleep = Some(value.to_string()),
        }
        self.collection.save(&self.state);
    }

    pub fn entry(&self, day: &str) -> Option<&HealthEntry> {
        self.state.entries.get(day)
    }

    /// Today and the six preceding days, oldest first, with or without a
    /// recorded entry for each day.
    pub fn last7(&self) -> Vec<DaySample> {
        self.last7_as_of(today())
    }

    pub fn last7_as_of(&self, end: NaiveDate) -> Vec<DaySample> {
        let mut days = Vec::with_capacity(7);
        let mut day = end;
        for _ in 0..7 {
            days.push(day);
            match day.pred_opt() {
                Some(prev) => day = prev,
                None => break,
            }
        }

        days.into_iter()
            .rev()
            .map(|d| {
                let key = day_key(d);
                DaySample {
                    entry: self.state.entries.get(&key).cloned(),
                    day: key,
                }
            })
            .collect()
    }

    pub fn state(&self) -> &HealthState {
        &self.state
    }

    pub(crate) fn replace(&mut self, state: HealthState) {
        self.state = state;
        self.collection.save(&self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemorySubstrate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn health() -> HealthLog {
        HealthLog::open(Rc::new(MemorySubstrate::new()) as Rc<dyn Substrate>)
    }

    #[test]
    fn test_update_creates_entry_lazily() {
        let mut health = health();
        assert!(health.entry("2024-03-10").is_none());

        health.update_on(HealthField::Weight, "81.5", date(2024, 3, 10));
        let entry = health.entry("2024-03-10").unwrap();
        assert_eq!(entry.weight.as_deref(), Some("81.5"));
        assert_eq!(entry.sleep, None);
    }

    #[test]
    fn test_update_preserves_other_field() {
        let mut health = health();
        let day = date(2024, 3, 10);

        health.update_on(HealthField::Weight, "81.5", day);
        health.update_on(HealthField::Sleep, "7.5", day);

        let entry = health.entry("2024-03-10").unwrap();
        assert_eq!(entry.weight.as_deref(), Some("81.5"));
        assert_eq!(entry.sleep.as_deref(), Some("7.5"));
    }

    #[test]
    fn test_last7_covers_exactly_seven_days_oldest_first() {
        let mut health = health();
        let end = date(2024, 3, 10);
        health.update_on(HealthField::Sleep, "8", end);
        health.update_on(HealthField::Sleep, "6", date(2024, 3, 7));

        let window = health.last7_as_of(end);
        assert_eq!(window.len(), 7);
        assert_eq!(window[0].day, "2024-03-04");
        assert_eq!(window[6].day, "2024-03-10");

        // Days without an entry come back as None.
        assert!(window[0].entry.is_none());
        assert_eq!(window[3].entry.as_ref().unwrap().sleep.as_deref(), Some("6"));
        assert_eq!(window[6].entry.as_ref().unwrap().sleep.as_deref(), Some("8"));
    }

    #[test]
    fn test_last7_spans_month_boundary() {
        let health = health();
        let window = health.last7_as_of(date(2024, 3, 2));
        assert_eq!(window[0].day, "2024-02-25");
        assert_eq!(window[6].day, "2024-03-02");
    }
}
