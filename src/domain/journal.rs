// src/domain/journal.rs
use std::collections::BTreeMap;
use std::rc::Rc;

use chrono::NaiveDate;

use crate::datekey::{day_key, today};
use crate::store::{Collection, Substrate};

use super::keys;

/// Daily journal: one free-text entry per day-key, overwritten wholesale
/// on every update.
pub struct Journal {
    collection: Collection<BTreeMap<String, String>>,
    entries: BTreeMap<String, String>,
}

impl Journal {
    pub fn open(substrate: Rc<dyn Substrate>) -> Self {
        let collection = Collection::new(substrate, keys::JOURNAL);
        let entries = collection.load(BTreeMap::new());
        Self { collection, entries }
    }

    pub fn set_today(&mut self, text: &str) {
        self.set_on(today(), text);
    }

    pub fn set_on(&mut self, date: NaiveDate, text: &str) {
        self.entries.insert(day_key(date), text.to_string());
        self.collection.save(&self.entries);
    }

    pub fn entry(&self, day: &str) -> Option<&str> {
        self.entries.get(day).map(String::as_str)
    }

    pub fn entries(&self) -> &BTreeMap<String, String> {
        &self.entries
    }

    pub(crate) fn replace(&mut self, entries: BTreeMap<String, String>) {
        self.entries = entries;
        self.collection.save(&self.entries);
    }
}
