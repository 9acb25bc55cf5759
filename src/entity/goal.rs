// src/entity/goal.rs
use serde::{Deserialize, Serialize};

use super::new_id;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub name: String,
    /// Percent complete, always within [0, 100].
    pub progress: u8,
}

impl Goal {
    pub fn new(name: String) -> Self {
        Self {
            id: new_id(),
            name,
            progress: 0,
        }
    }
}
