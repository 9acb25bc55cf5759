pub mod cli;
pub mod datekey;
pub mod domain;
pub mod entity;
pub mod error;
pub mod snapshot;
pub mod store;

pub use domain::Dashboard;
pub use error::{LifeboardError, Result};
pub use store::{Collection, MemorySubstrate, SqliteSubstrate, Substrate};
