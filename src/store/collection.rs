// src/store/collection.rs
use std::marker::PhantomData;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use super::Substrate;

/// Bridges one substrate key to one typed in-memory collection.
///
/// Loading tolerates absent or corrupt stored data by handing back the
/// caller's default; saving swallows write failure, leaving the in-memory
/// value as the source of truth until the next successful save. Neither
/// direction ever raises past this boundary.
pub struct Collection<T> {
    substrate: Rc<dyn Substrate>,
    key: &'static str,
    _marker: PhantomData<T>,
}

impl<T> Collection<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(substrate: Rc<dyn Substrate>, key: &'static str) -> Self {
        Self {
            substrate,
            key,
            _marker: PhantomData,
        }
    }

    /// Read and decode the stored collection, falling back to `default` if
    /// nothing is stored or the stored text fails to decode. The substrate
    /// is never mutated on the fallback path.
    pub fn load(&self, default: T) -> T {
        match self.substrate.get(self.key) {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(e) => {
                    warn!(key = self.key, error = %e, "stored value unreadable, using default");
                    default
                }
            },
            None => default,
        }
    }

    /// Serialize and write the collection.
    pub fn save(&self, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => self.substrate.set(self.key, &raw),
            Err(e) => warn!(key = self.key, error = %e, "collection not serializable, write skipped"),
        }
    }
}
