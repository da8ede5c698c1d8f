//! Record store port for reading and persisting metadata records.

use std::path::PathBuf;

use crate::record::DocumentNode;

/// Identity of the digitization job a step invocation operates on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    /// Human-readable job name, used in log and error context.
    pub name: String,
    /// Location of the job's metadata record.
    pub meta_path: PathBuf,
}

impl Job {
    /// Creates a job identity from a name and record location.
    #[must_use]
    pub fn new(name: impl Into<String>, meta_path: impl Into<PathBuf>) -> Self {
        Self { name: name.into(), meta_path: meta_path.into() }
    }
}

/// Reads and writes the metadata record owned by a job.
///
/// The step mutates the record in memory and persists it through this
/// port only after the update succeeded.
pub trait RecordStore: Send + Sync {
    /// Reads the job's metadata record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be read or parsed.
    fn read_record(&self, job: &Job)
        -> Result<DocumentNode, Box<dyn std::error::Error + Send + Sync>>;

    /// Persists the job's metadata record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be serialized or written.
    fn write_record(
        &self,
        job: &Job,
        record: &DocumentNode,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
