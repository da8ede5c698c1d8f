//! Live adapters for real external interactions.

pub mod clock;
pub mod config;
pub mod numbers;
pub mod records;
pub mod schema;
pub mod uuids;

pub use clock::LiveClock;
pub use config::LiveConfigSource;
pub use numbers::LiveNumberSource;
pub use records::LiveRecordStore;
pub use schema::LiveSchemaProvider;
pub use uuids::LiveUuidSource;
