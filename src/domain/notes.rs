// src/domain/notes.rs
use std::rc::Rc;

use crate::entity::Note;
use crate::store::{Collection, Substrate};

use super::keys;

/// Quick-capture notes, newest first.
pub struct Notes {
    collection: Collection<Vec<Note>>,
    items: Vec<Note>,
}

impl Notes {
    pub fn open(substrate: Rc<dyn Substrate>) -> Self {
        let collection = Collection::new(substrate, keys::NOTES);
        let items = collection.load(Vec::new());
        Self { collection, items }
    }

    /// Capture a note. Empty or whitespace-only text is rejected as a no-op.
    pub fn add(&mut self, text: &str) -> Option<&Note> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.items.insert(0, Note::new(text.to_string()));
        self.collection.save(&self.items);
        self.items.first()
    }

    pub fn remove(&mut self, id: &str) {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        if self.items.len() != before {
            self.collection.save(&self.items);
        }
    }

    pub fn list(&self) -> &[Note] {
        &self.items
    }

    pub(crate) fn replace(&mut self, items: Vec<Note>) {
        self.items = items;
        self.collection.save(&self.items);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemorySubstrate;

    #[test]
    fn test_add_and_remove() {
        let substrate = Rc::new(MemorySubstrate::new());
        let mut notes = Notes::open(substrate as Rc<dyn Substrate>);

        assert!(notes.add("  ").is_none());
        let id = notes.add(" capture this ").unwrap().id.clone();
        assert_eq!(notes.list()[0].text, "capture this");

        notes.remove(&id);
        assert!(notes.list().is_empty());
    }
}
