mod event;
mod goal;
mod habit;
mod health;
mod note;
mod task;
mod transaction;

pub use event::Event;
pub use goal::Goal;
pub use habit::Habit;
pub use health::{HealthEntry, HealthField, HealthState};
pub use note::Note;
pub use task::Task;
pub use transaction::{Transaction, TxKind};

use uuid::Uuid;

/// Generate an opaque short entity id (first 8 hex chars of a v4 UUID).
///
/// Ids only need to be unique within one collection; at personal-scale data
/// volumes the collision probability is treated as negligible.
pub fn new_id() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_string()
}
