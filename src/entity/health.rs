// src/entity/health.rs
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Health metrics for one day. Both fields are raw user text and
/// independently optional; recording one never disturbs the other.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep: Option<String>,
}

/// The whole health collection: one entry per day-key, created lazily on
/// the first write for that day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthState {
    #[serde(default)]
    pub entries: BTreeMap<String, HealthEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthField {
    Weight,
    Sleep,
}

impl std::fmt::Display for HealthField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HealthField::Weight => write!(f, "weight"),
            HealthField::Sleep => write!(f, "sleep"),
        }
    }
}

impl std::str::FromStr for HealthField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "weight" => Ok(HealthField::Weight),
            "sleep" => Ok(HealthField::Sleep),
            _ => Err(s.to_string()),
        }
    }
}
