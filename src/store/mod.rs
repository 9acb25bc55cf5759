// src/store/mod.rs
//! Persistence layer: the durable key-value substrate and the typed
//! collection stores layered on top of it.

mod collection;
mod substrate;

pub use collection::Collection;
pub use substrate::{MemorySubstrate, SqliteSubstrate, Substrate};
