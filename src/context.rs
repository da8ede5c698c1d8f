//! Service context bundling all port trait objects.

use std::path::Path;

use crate::adapters::live::{
    LiveClock, LiveConfigSource, LiveNumberSource, LiveRecordStore, LiveSchemaProvider,
    LiveUuidSource,
};
use crate::ports::clock::Clock;
use crate::ports::config::ConfigSource;
use crate::ports::numbers::NumberSource;
use crate::ports::records::RecordStore;
use crate::ports::schema::SchemaProvider;
use crate::ports::uuids::UuidSource;

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. Fields are public
/// so tests can substitute individual doubles.
pub struct ServiceContext {
    /// Clock for timestamp identifiers.
    pub clock: Box<dyn Clock>,
    /// Uniform integer draws for random identifiers.
    pub numbers: Box<dyn NumberSource>,
    /// UUIDs for the default mode.
    pub uuids: Box<dyn UuidSource>,
    /// Step configuration scoped to the current (project, step) identity.
    pub config: Box<dyn ConfigSource>,
    /// Metadata record storage.
    pub records: Box<dyn RecordStore>,
    /// Metadata-type schema of the governing rule set.
    pub schema: Box<dyn SchemaProvider>,
}

impl ServiceContext {
    /// Creates a live context wired to the real clock, RNG, and the YAML
    /// configuration, record, and ruleset files.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file exists but cannot be
    /// read or parsed.
    pub fn live(
        config_path: &Path,
        project: &str,
        step: &str,
        ruleset_path: &Path,
    ) -> Result<Self, String> {
        Ok(Self {
            clock: Box::new(LiveClock),
            numbers: Box::new(LiveNumberSource),
            uuids: Box::new(LiveUuidSource::new()),
            config: Box::new(LiveConfigSource::load(config_path, project, step)?),
            records: Box::new(LiveRecordStore),
            schema: Box::new(LiveSchemaProvider::new(ruleset_path)),
        })
    }
}
