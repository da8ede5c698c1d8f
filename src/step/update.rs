//! Metadata update decision logic.
//!
//! One call makes one atomic decision against the record: skip (field not
//! in the rule set), rewrite every existing value, keep existing values,
//! or attach exactly one new value. The caller owns the record and
//! persists it afterwards; nothing here touches storage.

use crate::generator::GenerationConfig;
use crate::ports::SchemaProvider;
use crate::record::{DocumentNode, MetadataValue};

/// Failure kinds of a step invocation.
#[derive(Debug, thiserror::Error)]
pub enum UpdateError {
    /// The record root is an anchor with no child to carry metadata.
    #[error("anchor record of type {doc_type} has no child to carry metadata")]
    AnchorWithoutChild {
        /// Document type of the childless anchor.
        doc_type: String,
    },

    /// The rule set could not be consulted.
    #[error("schema lookup for field {field} failed: {source}")]
    SchemaLookup {
        /// Field whose definition was being resolved.
        field: String,
        /// Underlying schema access failure.
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The rule set forbids attaching the field to the target node.
    #[error("field {field} is not allowed on {doc_type} records")]
    TypeNotAllowed {
        /// Field that was being attached.
        field: String,
        /// Document type that rejects it.
        doc_type: String,
    },

    /// The job's metadata record could not be read.
    #[error("failed to read metadata record for job {job}: {source}")]
    StoreRead {
        /// Job whose record was being read.
        job: String,
        /// Underlying store failure.
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The job's metadata record could not be persisted.
    #[error("failed to write metadata record for job {job}: {source}")]
    StoreWrite {
        /// Job whose record was being written.
        job: String,
        /// Underlying store failure.
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// What `apply` did to the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The rule set defines no such field; the record is untouched.
    SkippedUnknownField,
    /// Existing values were kept because overwriting is off.
    KeptExisting,
    /// Every existing value was rewritten to the new identifier.
    Overwrote(usize),
    /// One new value was attached.
    Created,
}

/// Writes the generated identifier into the record, honoring the
/// overwrite policy.
///
/// Resolves the record to its effective target first: an anchor root
/// descends to its first child. When the field already has values and
/// overwriting is on, ALL of them receive the identifier, not just the
/// first. A field name the rule set does not define is a silent skip.
///
/// # Errors
///
/// Returns [`UpdateError::AnchorWithoutChild`] for a childless anchor
/// root, [`UpdateError::SchemaLookup`] if the rule set cannot be
/// consulted, and [`UpdateError::TypeNotAllowed`] when a new value may
/// not be attached to the target's document type.
pub fn apply(
    record: &mut DocumentNode,
    schema: &dyn SchemaProvider,
    config: &GenerationConfig,
    value: &str,
) -> Result<ApplyOutcome, UpdateError> {
    let root_type = record.doc_type.clone();
    let Some(target) = record.effective_target_mut() else {
        return Err(UpdateError::AnchorWithoutChild { doc_type: root_type });
    };

    let def = schema
        .field_definition(&config.field)
        .map_err(|source| UpdateError::SchemaLookup { field: config.field.clone(), source })?;
    let Some(def) = def else {
        return Ok(ApplyOutcome::SkippedUnknownField);
    };

    let existing = target.metadata.iter().filter(|m| m.name == config.field).count();
    if existing == 0 {
        if !def.allows(&target.doc_type) {
            return Err(UpdateError::TypeNotAllowed {
                field: def.name,
                doc_type: target.doc_type.clone(),
            });
        }
        target
            .metadata
            .push(MetadataValue { name: config.field.clone(), value: value.to_string() });
        Ok(ApplyOutcome::Created)
    } else if config.overwrite {
        for entry in target.metadata.iter_mut().filter(|m| m.name == config.field) {
            entry.value = value.to_string();
        }
        Ok(ApplyOutcome::Overwrote(existing))
    } else {
        Ok(ApplyOutcome::KeptExisting)
    }
}
