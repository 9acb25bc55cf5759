// src/domain/tasks.rs
use std::rc::Rc;

use crate::entity::Task;
use crate::store::{Collection, Substrate};

use super::keys;

/// Task list, newest addition first.
pub struct Tasks {
    collection: Collection<Vec<Task>>,
    items: Vec<Task>,
}

impl Tasks {
    pub fn open(substrate: Rc<dyn Substrate>) -> Self {
        let collection = Collection::new(substrate, keys::TASKS);
        let items = collection.load(Vec::new());
        Self { collection, items }
    }

    /// Add a task. Empty or whitespace-only text is rejected as a no-op.
    pub fn add(&mut self, text: &str) -> Option<&Task> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.items.insert(0, Task::new(text.to_string()));
        self.collection.save(&self.items);
        self.items.first()
    }

    /// Flip the done flag of the task with the given id.
    pub fn toggle(&mut self, id: &str) {
        if let Some(task) = self.items.iter_mut().find(|t| t.id == id) {
            task.done = !task.done;
            self.collection.save(&self.items);
        }
    }

    pub fn remove(&mut self, id: &str) {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        if self.items.len() != before {
            self.collection.save(&self.items);
        }
    }

    pub fn list(&self) -> &[Task] {
        &self.items
    }

    /// Replace the whole collection (snapshot import path).
    pub(crate) fn replace(&mut self, items: Vec<Task>) {
        self.items = items;
        self.collection.save(&self.items);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemorySubstrate;

    fn tasks() -> (Rc<MemorySubstrate>, Tasks) {
        let substrate = Rc::new(MemorySubstrate::new());
        let tasks = Tasks::open(Rc::clone(&substrate) as Rc<dyn Substrate>);
        (substrate, tasks)
    }

    #[test]
    fn test_add_trims_and_prepends() {
        let (_s, mut tasks) = tasks();
        tasks.add("  first  ");
        tasks.add("second");

        let texts: Vec<_> = tasks.list().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["second", "first"]);
        assert!(!tasks.list()[0].done);
    }

    #[test]
    fn test_add_rejects_blank_text() {
        let (_s, mut tasks) = tasks();
        assert!(tasks.add("").is_none());
        assert!(tasks.add("   \t ").is_none());
        assert!(tasks.list().is_empty());
    }

    #[test]
    fn test_toggle_flips_done() {
        let (_s, mut tasks) = tasks();
        let id = tasks.add("write tests").unwrap().id.clone();

        tasks.toggle(&id);
        assert!(tasks.list()[0].done);
        tasks.toggle(&id);
        assert!(!tasks.list()[0].done);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let (_s, mut tasks) = tasks();
        tasks.add("only");
        tasks.toggle("missing1");
        assert!(!tasks.list()[0].done);
    }

    #[test]
    fn test_remove() {
        let (_s, mut tasks) = tasks();
        let id = tasks.add("gone soon").unwrap().id.clone();
        tasks.add("stays");

        tasks.remove(&id);
        assert_eq!(tasks.list().len(), 1);
        assert_eq!(tasks.list()[0].text, "stays");
    }

    #[test]
    fn test_mutations_persist_across_reopen() {
        let (substrate, mut tasks) = tasks();
        tasks.add("durable");

        let reopened = Tasks::open(Rc::clone(&substrate) as Rc<dyn Substrate>);
        assert_eq!(reopened.list().len(), 1);
        assert_eq!(reopened.list()[0].text, "durable");
    }
}
