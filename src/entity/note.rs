// src/entity/note.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::new_id;

/// A quick-capture note: free text stamped with its capture time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub text: String,
    pub at: DateTime<Utc>,
}

impl Note {
    pub fn new(text: String) -> Self {
        Self {
            id: new_id(),
            text,
            at: Utc::now(),
        }
    }
}
