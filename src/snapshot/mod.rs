// src/snapshot/mod.rs
//! Whole-state export/import.
//!
//! The export document carries exactly one named field per domain module.
//! Import is partial per field: a present field replaces that module's
//! whole collection, an absent field leaves the module alone. The top
//! level is the opposite: input that does not parse as the document object
//! is rejected all-or-nothing with no state change.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::Dashboard;
use crate::entity::{Event, Goal, Habit, HealthState, Note, Task, Transaction};
use crate::error::Result;

/// The cross-module backup document. Field names are part of the on-disk
/// format and never change.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<Task>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<Note>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub habits: Option<Vec<Habit>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goals: Option<Vec<Goal>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health: Option<HealthState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx: Option<Vec<Transaction>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<Event>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal: Option<BTreeMap<String, String>>,
}

/// Clone every module's current collection into one document. Reads only;
/// no module is touched.
pub fn export(dashboard: &Dashboard) -> Snapshot {
    Snapshot {
        tasks: Some(dashboard.tasks.list().to_vec()),
        notes: Some(dashboard.notes.list().to_vec()),
        habits: Some(dashboard.habits.list().to_vec()),
        goals: Some(dashboard.goals.list().to_vec()),
        health: Some(dashboard.health.state().clone()),
        tx: Some(dashboard.finance.list().to_vec()),
        events: Some(dashboard.events.list().to_vec()),
        journal: Some(dashboard.journal.entries().clone()),
    }
}

/// Pretty-printed export document (the formatting is cosmetic).
pub fn export_json(dashboard: &Dashboard) -> Result<String> {
    Ok(serde_json::to_string_pretty(&export(dashboard))?)
}

/// Fan a parsed document back out to the modules: each present field
/// replaces that module's whole collection and persists through it.
pub fn apply(dashboard: &mut Dashboard, snapshot: Snapshot) {
    if let Some(tasks) = snapshot.tasks {
        dashboard.tasks.replace(tasks);
    }
    if let Some(notes) = snapshot.notes {
        dashboard.notes.replace(notes);
    }
    if let Some(habits) = snapshot.habits {
        dashboard.habits.replace(habits);
    }
    if let Some(goals) = snapshot.goals {
        dashboard.goals.replace(goals);
    }
    if let Some(health) = snapshot.health {
        dashboard.health.replace(health);
    }
    if let Some(tx) = snapshot.tx {
        dashboard.finance.replace(tx);
    }
    if let Some(events) = snapshot.events {
        dashboard.events.replace(events);
    }
    if let Some(journal) = snapshot.journal {
        dashboard.journal.replace(journal);
    }
}

/// Parse and apply a backup document. Anything that does not parse as the
/// document object is rejected before any module is touched; the only
/// caller-visible outcome of a rejection is the `false` return.
pub fn import_json(dashboard: &mut Dashboard, text: &str) -> bool {
    match serde_json::from_str::<Snapshot>(text) {
        Ok(snapshot) => {
            apply(dashboard, snapshot);
            true
        }
        Err(e) => {
            warn!(error = %e, "import rejected, state unchanged");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    use chrono::NaiveDate;

    use crate::domain::TxForm;
    use crate::entity::TxKind;
    use crate::store::{MemorySubstrate, Substrate};

    fn dashboard() -> Dashboard {
        Dashboard::open(Rc::new(MemorySubstrate::new()) as Rc<dyn Substrate>)
    }

    fn populated_dashboard() -> Dashboard {
        let mut dash = dashboard();
        let day = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();

        dash.tasks.add("ship the release");
        dash.notes.add("call the bank");
        let habit_id = dash.habits.add("Read").unwrap().id.clone();
        dash.habits.toggle_on(&habit_id, day);
        let goal_id = dash.goals.add("Save 10k").unwrap().id.clone();
        dash.goals.set_progress(&goal_id, "35");
        dash.health
            .update_on(crate::entity::HealthField::Weight, "80", day);
        dash.finance.add_on(
            &TxForm {
                kind: TxKind::Income,
                amount: "2000".to_string(),
                ..TxForm::default()
            },
            day,
        );
        dash.events.add(&crate::domain::EventForm {
            title: "Dentist".to_string(),
            date: "2024-03-12".to_string(),
            ..crate::domain::EventForm::default()
        });
        dash.journal.set_on(day, "good day");
        dash
    }

    #[test]
    fn test_export_has_all_eight_fields() {
        let dash = dashboard();
        let value: serde_json::Value =
            serde_json::from_str(&export_json(&dash).unwrap()).unwrap();
        let obj = value.as_object().unwrap();

        for field in [
            "tasks", "notes", "habits", "goals", "health", "tx", "events", "journal",
        ] {
            assert!(obj.contains_key(field), "missing field {field}");
        }
        assert_eq!(obj.len(), 8);
    }

    #[test]
    fn test_roundtrip_is_identity() {
        let mut dash = populated_dashboard();
        let before = export_json(&dash).unwrap();

        assert!(import_json(&mut dash, &before));
        let after = export_json(&dash).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_partial_import_touches_only_present_fields() {
        let mut dash = populated_dashboard();
        let notes_before = dash.notes.list().to_vec();
        let habits_before = dash.habits.list().to_vec();
        let journal_before = dash.journal.entries().clone();

        let incoming = r#"{"tasks": []}"#;
        assert!(import_json(&mut dash, incoming));

        assert!(dash.tasks.list().is_empty());
        assert_eq!(dash.notes.list(), notes_before.as_slice());
        assert_eq!(dash.habits.list(), habits_before.as_slice());
        assert_eq!(dash.journal.entries(), &journal_before);
        assert_eq!(dash.finance.list().len(), 1);
    }

    #[test]
    fn test_partial_import_replaces_wholesale() {
        let mut dash = populated_dashboard();
        let incoming = r#"{
            "journal": { "2020-01-01": "from the backup" }
        }"#;

        assert!(import_json(&mut dash, incoming));
        assert_eq!(dash.journal.entries().len(), 1);
        assert_eq!(dash.journal.entry("2020-01-01"), Some("from the backup"));
        assert_eq!(dash.journal.entry("2024-03-10"), None);
    }

    #[test]
    fn test_malformed_import_changes_nothing() {
        let mut dash = populated_dashboard();
        let before = export_json(&dash).unwrap();

        assert!(!import_json(&mut dash, "definitely not json"));
        assert!(!import_json(&mut dash, "[1, 2, 3]"));
        assert!(!import_json(&mut dash, "\"just a string\""));
        // A present field of the wrong shape rejects the whole document too.
        assert!(!import_json(&mut dash, r#"{"tasks": "nope"}"#));

        assert_eq!(export_json(&dash).unwrap(), before);
    }

    #[test]
    fn test_import_ignores_unknown_fields() {
        let mut dash = dashboard();
        assert!(import_json(&mut dash, r#"{"someday": true}"#));
        assert!(dash.tasks.list().is_empty());
    }

    #[test]
    fn test_imported_collections_persist() {
        let substrate = Rc::new(MemorySubstrate::new());
        let mut dash = Dashboard::open(Rc::clone(&substrate) as Rc<dyn Substrate>);

        let incoming = r#"{"goals": [{"id": "abcd1234", "name": "Imported", "progress": 70}]}"#;
        assert!(import_json(&mut dash, incoming));

        let reopened = Dashboard::open(substrate as Rc<dyn Substrate>);
        assert_eq!(reopened.goals.list().len(), 1);
        assert_eq!(reopened.goals.list()[0].progress, 70);
    }
}
