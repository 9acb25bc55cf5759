// src/domain/events.rs
use std::rc::Rc;

use crate::datekey::{day_key, today};
use crate::entity::{new_id, Event};
use crate::store::{Collection, Substrate};

use super::keys;

/// Input for a new event. `date` and `time` arrive as raw user text; an
/// empty date falls back to today's day-key, an empty time stays unset.
#[derive(Debug, Clone, Default)]
pub struct EventForm {
    pub title: String,
    pub date: String,
    pub time: String,
    pub note: String,
}

/// Agenda entries, newest addition first.
pub struct Events {
    collection: Collection<Vec<Event>>,
    items: Vec<Event>,
}

impl Events {
    pub fn open(substrate: Rc<dyn Substrate>) -> Self {
        let collection = Collection::new(substrate, keys::EVENTS);
        let items = collection.load(Vec::new());
        Self { collection, items }
    }

    /// Add an event. A blank title is rejected as a no-op; a blank date
    /// defaults to the current day-key.
    pub fn add(&mut self, form: &EventForm) -> Option<&Event> {
        let title = form.title.trim();
        if title.is_empty() {
            return None;
        }

        let date = match form.date.trim() {
            "" => day_key(today()),
            d => d.to_string(),
        };
        let time = match form.time.trim() {
            "" => None,
            t => Some(t.to_string()),
        };

        self.items.insert(
            0,
            Event {
                id: new_id(),
                title: title.to_string(),
                date,
                time,
                note: form.note.clone(),
            },
        );
        self.collection.save(&self.items);
        self.items.first()
    }

    pub fn remove(&mut self, id: &str) {
        let before = self.items.len();
        self.items.retain(|e| e.id != id);
        if self.items.len() != before {
            self.collection.save(&self.items);
        }
    }

    pub fn list(&self) -> &[Event] {
        &self.items
    }

    pub(crate) fn replace(&mut self, items: Vec<Event>) {
        self.items = items;
        self.collection.save(&self.items);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemorySubstrate;

    fn events() -> Events {
        Events::open(Rc::new(MemorySubstrate::new()) as Rc<dyn Substrate>)
    }

    #[test]
    fn test_add_requires_title() {
        let mut events = events();
        let form = EventForm {
            date: "2024-06-01".to_string(),
            ..EventForm::default()
        };
        assert!(events.add(&form).is_none());
        assert!(events.list().is_empty());
    }

    #[test]
    fn test_add_keeps_given_date_and_time() {
        let mut events = events();
        let form = EventForm {
            title: " Dentist ".to_string(),
            date: "2024-06-01".to_string(),
            time: "14:30".to_string(),
            note: "bring card".to_string(),
        };

        let event = events.add(&form).unwrap();
        assert_eq!(event.title, "Dentist");
        assert_eq!(event.date, "2024-06-01");
        assert_eq!(event.time.as_deref(), Some("14:30"));
    }

    #[test]
    fn test_add_blank_date_defaults_to_today() {
        let mut events = events();
        let form = EventForm {
            title: "Standup".to_string(),
            ..EventForm::default()
        };

        let event = events.add(&form).unwrap();
        assert_eq!(event.date, day_key(today()));
        assert_eq!(event.time, None);
    }

    #[test]
    fn test_remove() {
        let mut events = events();
        let id = events
            .add(&EventForm {
                title: "Gone".to_string(),
                ..EventForm::default()
            })
            .unwrap()
            .id
            .clone();

        events.remove(&id);
        assert!(events.list().is_empty());
    }
}
