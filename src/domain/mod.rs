// src/domain/mod.rs
//! Domain modules: each one owns a single collection and the mutation and
//! derivation rules for its entity type. Mutations run to completion on the
//! calling thread and persist through the module's `Collection` exactly
//! once per mutation.

mod events;
mod finance;
mod goals;
mod habits;
mod health;
mod journal;
mod notes;
mod tasks;

pub use events::{EventForm, Events};
pub use finance::{Finance, MonthlyTotals, TxForm};
pub use goals::Goals;
pub use habits::{streak, Habits};
pub use health::{DaySample, HealthLog};
pub use journal::Journal;
pub use notes::Notes;
pub use tasks::Tasks;

use std::rc::Rc;

use crate::store::Substrate;

/// Substrate keys, one per domain module. These are stable forever:
/// renaming a key would silently orphan previously stored data.
pub(crate) mod keys {
    pub const TASKS: &str = "life:tasks";
    pub const NOTES: &str = "life:notes";
    pub const HABITS: &str = "life:habits";
    pub const GOALS: &str = "life:goals";
    pub const HEALTH: &str = "life:health";
    pub const FINANCE: &str = "life:finance";
    pub const EVENTS: &str = "life:events";
    pub const JOURNAL: &str = "life:journal";
}

/// All domain modules loaded from one substrate, constructed once per
/// process. Every consumer (CLI, snapshot export/import) goes through this.
pub struct Dashboard {
    pub tasks: Tasks,
    pub notes: Notes,
    pub habits: Habits,
    pub goals: Goals,
    pub health: HealthLog,
    pub finance: Finance,
    pub events: Events,
    pub journal: Journal,
}

impl Dashboard {
    pub fn open(substrate: Rc<dyn Substrate>) -> Self {
        Self {
            tasks: Tasks::open(Rc::clone(&substrate)),
            notes: Notes::open(Rc::clone(&substrate)),
            habits: Habits::open(Rc::clone(&substrate)),
            goals: Goals::open(Rc::clone(&substrate)),
            health: HealthLog::open(Rc::clone(&substrate)),
            finance: Finance::open(Rc::clone(&substrate)),
            events: Events::open(Rc::clone(&substrate)),
            journal: Journal::open(substrate),
        }
    }
}
