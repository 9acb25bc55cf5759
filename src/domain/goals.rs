// src/domain/goals.rs
use std::rc::Rc;

use crate::entity::Goal;
use crate::store::{Collection, Substrate};

use super::keys;

/// Goal list, newest addition first.
pub struct Goals {
    collection: Collection<Vec<Goal>>,
    items: Vec<Goal>,
}

impl Goals {
    pub fn open(substrate: Rc<dyn Substrate>) -> Self {
        let collection = Collection::new(substrate, keys::GOALS);
        let items = collection.load(Vec::new());
        Self { collection, items }
    }

    /// Add a goal at 0% progress. Blank names are rejected as a no-op.
    pub fn add(&mut self, name: &str) -> Option<&Goal> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        self.items.insert(0, Goal::new(name.to_string()));
        self.collection.save(&self.items);
        self.items.first()
    }

    /// Set progress from raw user text: non-numeric input counts as 0 and
    /// the result is clamped into [0, 100] before storing.
    pub fn set_progress(&mut self, id: &str, raw: &str) {
        if let Some(goal) = self.items.iter_mut().find(|g| g.id == id) {
            goal.progress = clamp_progress(raw);
            self.collection.save(&self.items);
        }
    }

    pub fn remove(&mut self, id: &str) {
        let before = self.items.len();
        self.items.retain(|g| g.id != id);
        if self.items.len() != before {
            self.collection.save(&self.items);
        }
    }

    pub fn list(&self) -> &[Goal] {
        &self.items
    }

    pub(crate) fn replace(&mut self, items: Vec<Goal>) {
        self.items = items;
        self.collection.save(&self.items);
    }
}

fn clamp_progress(raw: &str) -> u8 {
    let value = raw.trim().parse::<f64>().unwrap_or(0.0);
    let value = if value.is_nan() { 0.0 } else { value };
    value.clamp(0.0, 100.0) as u8
}
