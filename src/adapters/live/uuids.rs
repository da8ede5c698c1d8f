//! Live UUID source producing random v4 UUIDs.

use uuid::Uuid;

use crate::ports::UuidSource;

/// Live UUID source backed by `uuid`'s v4 generator.
pub struct LiveUuidSource;

impl LiveUuidSource {
    /// Creates a new live UUID source.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for LiveUuidSource {
    fn default() -> Self {
        Self::new()
    }
}

impl UuidSource for LiveUuidSource {
    fn new_uuid(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
