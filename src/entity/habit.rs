// src/entity/habit.rs
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::new_id;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub name: String,
    /// day-key -> done. An absent key means the habit was not done that day.
    #[serde(default)]
    pub log: BTreeMap<String, bool>,
}

impl Habit {
    pub fn new(name: String) -> Self {
        Self {
            id: new_id(),
            name,
            log: BTreeMap::new(),
        }
    }

    /// Whether the habit was done on the given day-key.
    pub fn done_on(&self, day: &str) -> bool {
        self.log.get(day).copied().unwrap_or(false)
    }
}
