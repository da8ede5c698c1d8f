//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the step core and an external
//! system (time, randomness, UUIDs, configuration, the record store, the
//! metadata schema). Implementations live in `src/adapters/`.

pub mod clock;
pub mod config;
pub mod numbers;
pub mod records;
pub mod schema;
pub mod uuids;

pub use clock::Clock;
pub use config::ConfigSource;
pub use numbers::NumberSource;
pub use records::{Job, RecordStore};
pub use schema::{FieldDef, SchemaProvider};
pub use uuids::UuidSource;
