//! Configuration port supplying per-run step settings.

/// Supplies typed configuration values for one step invocation.
///
/// The lookup is already scoped to a (project, step) identity by the
/// adapter, so keys here are plain setting names. Every accessor takes a
/// default; a missing or mistyped value never fails, it falls back.
pub trait ConfigSource: Send + Sync {
    /// Returns the string value for `key`, or `default` if unset.
    fn get_string(&self, key: &str, default: &str) -> String;

    /// Returns the integer value for `key`, or `default` if unset.
    fn get_int(&self, key: &str, default: i64) -> i64;

    /// Returns the boolean value for `key`, or `default` if unset.
    fn get_bool(&self, key: &str, default: bool) -> bool;
}
