//! Live configuration source backed by a YAML file of scoped blocks.
//!
//! The file holds a list of blocks, each addressed to a (project, step)
//! pair with `"*"` as a wildcard:
//!
//! ```text
//! blocks:
//!   - project: "*"
//!     step: "*"
//!     type: uuid
//!   - project: Manuscripts
//!     step: generate-identifier
//!     type: random
//!     length: 9
//! ```
//!
//! Block selection tries the most specific combination first:
//! (project, step), (project, \*), (\*, step), (\*, \*).

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use serde_yaml::Value;

use crate::ports::ConfigSource;

#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    blocks: Vec<ConfigBlock>,
}

#[derive(Debug, Deserialize)]
struct ConfigBlock {
    #[serde(default = "wildcard")]
    project: String,
    #[serde(default = "wildcard")]
    step: String,
    #[serde(flatten)]
    settings: BTreeMap<String, Value>,
}

fn wildcard() -> String {
    "*".to_string()
}

/// Live config source holding the settings of the block selected for one
/// (project, step) identity.
pub struct LiveConfigSource {
    settings: BTreeMap<String, Value>,
}

impl LiveConfigSource {
    /// Loads the configuration file and selects the block for the given
    /// project and step.
    ///
    /// A missing file behaves as an empty configuration; every lookup
    /// then falls back to its default.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read or parsed.
    pub fn load(path: &Path, project: &str, step: &str) -> Result<Self, String> {
        if !path.exists() {
            tracing::warn!(
                path = %path.display(),
                "step configuration file not found, using defaults"
            );
            return Ok(Self { settings: BTreeMap::new() });
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read step configuration {}: {e}", path.display()))?;
        let file: ConfigFile = serde_yaml::from_str(&contents)
            .map_err(|e| format!("Failed to parse step configuration {}: {e}", path.display()))?;
        Ok(Self { settings: select_block(&file.blocks, project, step) })
    }
}

fn select_block(
    blocks: &[ConfigBlock],
    project: &str,
    step: &str,
) -> BTreeMap<String, Value> {
    let candidates = [(project, step), (project, "*"), ("*", step), ("*", "*")];
    for (p, s) in candidates {
        if let Some(block) = blocks.iter().find(|b| b.project == p && b.step == s) {
            return block.settings.clone();
        }
    }
    BTreeMap::new()
}

impl ConfigSource for LiveConfigSource {
    fn get_string(&self, key: &str, default: &str) -> String {
        match self.settings.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => default.to_string(),
        }
    }

    fn get_int(&self, key: &str, default: i64) -> i64 {
        match self.settings.get(key) {
            Some(Value::Number(n)) => n.as_i64().unwrap_or(default),
            Some(Value::String(s)) => s.trim().parse().unwrap_or(default),
            _ => default,
        }
    }

    fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.settings.get(key) {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => s.trim().parse().unwrap_or(default),
            _ => default,
        }
    }
}
