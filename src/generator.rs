//! Identifier generation.
//!
//! Three modes: a fixed-length random digit string, a millisecond
//! timestamp, and a v4 UUID as the fallback for anything else. Randomness
//! and time come in through ports so the exact output can be pinned in
//! tests.

use crate::ports::{Clock, ConfigSource, NumberSource, UuidSource};

/// Upper bound (inclusive) of the random-mode draw.
const RANDOM_DRAW_MAX: u32 = 999_999_999;

/// How the identifier value is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    /// Fixed-length string of decimal digits from a uniform draw.
    Random,
    /// Milliseconds since the Unix epoch, as a decimal string.
    Timestamp,
    /// Canonical hyphenated v4 UUID. Default for unrecognized mode strings.
    UuidDefault,
}

impl GenerationMode {
    /// Parses a configured mode string, case-insensitively.
    ///
    /// Anything other than "random" or "timestamp" selects the UUID mode;
    /// an unrecognized value is a fallback, not an error.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "random" => Self::Random,
            "timestamp" => Self::Timestamp,
            _ => Self::UuidDefault,
        }
    }
}

/// Resolved settings for one step invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Generation mode.
    pub mode: GenerationMode,
    /// Metadata field the identifier is written to.
    pub field: String,
    /// Target length for random-mode identifiers, at least 1.
    pub length: usize,
    /// Whether existing field values are replaced.
    pub overwrite: bool,
}

impl GenerationConfig {
    /// Loads the configuration from a scoped config source, applying the
    /// step's defaults for unset keys. A configured length below 1 is
    /// clamped to 1.
    #[must_use]
    pub fn from_source(source: &dyn ConfigSource) -> Self {
        Self {
            mode: GenerationMode::parse(&source.get_string("type", "uuid")),
            field: source.get_string("field", "CatalogIDDigital"),
            length: usize::try_from(source.get_int("length", 9).max(1)).unwrap_or(1),
            overwrite: source.get_bool("overwrite", false),
        }
    }
}

/// Produces one identifier value for the configured mode.
///
/// Random mode renders a uniform draw from `[1, 999_999_999]` as decimal
/// digits, truncated to the first `length` characters when too long and
/// left-padded with '0' when too short, so the result is always exactly
/// `length` digits. The truncation keeps the leading characters of the
/// draw; distinct draws can collide on the same shortened value.
#[must_use]
pub fn generate(
    clock: &dyn Clock,
    numbers: &dyn NumberSource,
    uuids: &dyn UuidSource,
    config: &GenerationConfig,
) -> String {
    match config.mode {
        GenerationMode::Random => {
            let mut id = numbers.draw(1, RANDOM_DRAW_MAX).to_string();
            if id.len() > config.length {
                id.truncate(config.length);
            }
            format!("{id:0>width$}", width = config.length)
        }
        GenerationMode::Timestamp => clock.unix_millis().to_string(),
        GenerationMode::UuidDefault => uuids.new_uuid(),
    }
}
