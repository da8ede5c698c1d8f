//! Step orchestration.
//!
//! One invocation is self-contained: load the scoped configuration,
//! generate one identifier, read the job's record, apply the update,
//! persist the record. `run` is the host-facing surface and collapses
//! everything into a tri-state outcome; `execute` reports what happened.

pub mod update;

pub use update::{apply, ApplyOutcome, UpdateError};

use crate::context::ServiceContext;
use crate::generator::{self, GenerationConfig};
use crate::ports::Job;

/// Host-facing outcome of one step invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The step completed, including the silent-skip case.
    Finish,
    /// The step failed; the failure has been logged with context.
    Error,
    /// Deferred for later continuation. Never produced by this step,
    /// present only to satisfy the host contract.
    Wait,
}

/// What one successful invocation produced and did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    /// The identifier generated this run.
    pub identifier: String,
    /// How the record was affected.
    pub outcome: ApplyOutcome,
}

/// Runs one invocation end to end.
///
/// The record is persisted only after the update succeeded, so a failed
/// invocation leaves the stored record as it was.
///
/// # Errors
///
/// Returns an [`UpdateError`] for any structure, schema, or store
/// failure. An unknown field name is not a failure; it reports
/// [`ApplyOutcome::SkippedUnknownField`].
pub fn execute(ctx: &ServiceContext, job: &Job) -> Result<StepReport, UpdateError> {
    let config = GenerationConfig::from_source(ctx.config.as_ref());
    tracing::info!(field = %config.field, mode = ?config.mode, "identifier step initialized");

    let identifier =
        generator::generate(ctx.clock.as_ref(), ctx.numbers.as_ref(), ctx.uuids.as_ref(), &config);

    let mut record = ctx
        .records
        .read_record(job)
        .map_err(|source| UpdateError::StoreRead { job: job.name.clone(), source })?;

    let outcome = update::apply(&mut record, ctx.schema.as_ref(), &config, &identifier)?;

    ctx.records
        .write_record(job, &record)
        .map_err(|source| UpdateError::StoreWrite { job: job.name.clone(), source })?;

    Ok(StepReport { identifier, outcome })
}

/// Host-facing wrapper around [`execute`].
///
/// Logs the result and maps it onto the engine's tri-state outcome; no
/// failure is retried here.
pub fn run(ctx: &ServiceContext, job: &Job) -> StepOutcome {
    match execute(ctx, job) {
        Ok(report) => {
            tracing::info!(
                identifier = %report.identifier,
                outcome = ?report.outcome,
                "identifier step executed"
            );
            StepOutcome::Finish
        }
        Err(error) => {
            tracing::error!(job = %job.name, %error, "identifier step failed");
            StepOutcome::Error
        }
    }
}
