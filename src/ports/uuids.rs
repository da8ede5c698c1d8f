//! UUID port for producing fallback identifiers.

/// Produces random UUIDs.
///
/// The default generation mode renders one of these per run; substituting
/// a canned source keeps step tests deterministic.
pub trait UuidSource: Send + Sync {
    /// Returns a new UUID in canonical hyphenated form.
    fn new_uuid(&self) -> String;
}
