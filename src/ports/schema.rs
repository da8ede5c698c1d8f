//! Schema port resolving field names against the governing rule set.

/// Definition of a metadata field in the rule set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    /// Field name as it appears on record nodes.
    pub name: String,
    /// Document types the field may be attached to; empty means any.
    pub allowed_for: Vec<String>,
}

impl FieldDef {
    /// Returns `true` if the field may be attached to the given document type.
    #[must_use]
    pub fn allows(&self, doc_type: &str) -> bool {
        self.allowed_for.is_empty() || self.allowed_for.iter().any(|t| t == doc_type)
    }
}

/// Resolves field names against the metadata-type schema.
pub trait SchemaProvider: Send + Sync {
    /// Looks up the definition for a field name.
    ///
    /// Returns `Ok(None)` when the rule set defines no such field; the
    /// caller treats that as a silent skip, not a failure.
    ///
    /// # Errors
    ///
    /// Returns an error if the rule set itself cannot be accessed.
    fn field_definition(
        &self,
        name: &str,
    ) -> Result<Option<FieldDef>, Box<dyn std::error::Error + Send + Sync>>;
}

#[cfg(test)]
mod tests {
    use super::FieldDef;

    #[test]
    fn empty_allowed_list_allows_any_type() {
        let def = FieldDef { name: "CatalogIDDigital".into(), allowed_for: vec![] };
        assert!(def.allows("Monograph"));
        assert!(def.allows("Volume"));
    }

    #[test]
    fn populated_allowed_list_is_exact() {
        let def =
            FieldDef { name: "CatalogIDDigital".into(), allowed_for: vec!["Monograph".into()] };
        assert!(def.allows("Monograph"));
        assert!(!def.allows("Periodical"));
    }
}
