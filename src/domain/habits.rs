// src/domain/habits.rs
use std::rc::Rc;

use chrono::NaiveDate;

use crate::datekey::{day_key, today};
use crate::entity::Habit;
use crate::store::{Collection, Substrate};

use super::keys;

/// Habit list, newest addition first.
pub struct Habits {
    collection: Collection<Vec<Habit>>,
    items: Vec<Habit>,
}

impl Habits {
    pub fn open(substrate: Rc<dyn Substrate>) -> Self {
        let collection = Collection::new(substrate, keys::HABITS);
        let items = collection.load(Vec::new());
        Self { collection, items }
    }

    /// Add a habit with an empty log. Blank names are rejected as a no-op.
    pub fn add(&mut self, name: &str) -> Option<&Habit> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        self.items.insert(0, Habit::new(name.to_string()));
        self.collection.save(&self.items);
        self.items.first()
    }

    /// Flip today's log entry for the habit. An absent entry counts as
    /// false before the flip, so the first toggle of a day marks it done.
    pub fn toggle_today(&mut self, id: &str) {
        self.toggle_on(id, today());
    }

    pub fn toggle_on(&mut self, id: &str, date: NaiveDate) {
        let key = day_key(date);
        if let Some(habit) = self.items.iter_mut().find(|h| h.id == id) {
            let done = habit.done_on(&key);
            habit.log.insert(key, !done);
            self.collection.save(&self.items);
        }
    }

    pub fn remove(&mut self, id: &str) {
        let before = self.items.len();
        self.items.retain(|h| h.id != id);
        if self.items.len() != before {
            self.collection.save(&self.items);
        }
    }

    pub fn list(&self) -> &[Habit] {
        &self.items
    }

    pub(crate) fn replace(&mut self, items: Vec<Habit>) {
        self.items = items;
        self.collection.save(&self.items);
    }
}

/// Consecutive done-days ending at `as_of`, walking backward one calendar
/// day at a time. The chain must include `as_of` itself: a day with no mark
/// breaks it, so an unmarked today yields 0 even after a long prior run.
pub fn streak(habit: &Habit, as_of: NaiveDate) -> u32 {
    let mut count = 0;
    let mut day = as_of;
    while habit.done_on(&day_key(day)) {
        count += 1;
        match day.pred_opt() {
            Some(prev) => day = prev,
            None => break,
        }
    }
    count
}
