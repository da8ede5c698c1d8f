//! Live schema provider reading a YAML ruleset file.
//!
//! ```text
//! fields:
//!   - name: CatalogIDDigital
//!     allowed_for: [Monograph, Volume]
//!   - name: TitleDocMain
//! ```
//!
//! An omitted `allowed_for` list allows the field on any document type.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::ports::schema::{FieldDef, SchemaProvider};

#[derive(Debug, Deserialize)]
struct RulesetFile {
    #[serde(default)]
    fields: Vec<RulesetField>,
}

#[derive(Debug, Deserialize)]
struct RulesetField {
    name: String,
    #[serde(default)]
    allowed_for: Vec<String>,
}

/// Live schema provider resolving fields from a ruleset file on disk.
///
/// The file is read per lookup; rulesets are small and the step performs
/// a single lookup per invocation.
pub struct LiveSchemaProvider {
    path: PathBuf,
}

impl LiveSchemaProvider {
    /// Creates a provider for the ruleset at the given path.
    #[must_use]
    pub fn new(path: &Path) -> Self {
        Self { path: path.to_path_buf() }
    }
}

impl SchemaProvider for LiveSchemaProvider {
    fn field_definition(
        &self,
        name: &str,
    ) -> Result<Option<FieldDef>, Box<dyn std::error::Error + Send + Sync>> {
        let contents = std::fs::read_to_string(&self.path)?;
        let ruleset: RulesetFile = serde_yaml::from_str(&contents)?;
        Ok(ruleset
            .fields
            .into_iter()
            .find(|f| f.name == name)
            .map(|f| FieldDef { name: f.name, allowed_for: f.allowed_for }))
    }
}
