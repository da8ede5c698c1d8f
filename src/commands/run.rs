//! `mintid run` command.

use crate::cli::RunArgs;
use crate::context::ServiceContext;
use crate::ports::Job;
use crate::step::{self, StepOutcome};

/// Execute the `run` command.
///
/// Wires the live adapters for the given process directory and hands the
/// job to the step. Failure details are logged by the step itself.
///
/// # Errors
///
/// Returns an error string if the context cannot be built or the step
/// reports an error outcome.
pub fn run(args: &RunArgs) -> Result<(), String> {
    let ruleset = args.ruleset.clone().unwrap_or_else(|| args.process.join("ruleset.yaml"));
    let meta = args.meta.clone().unwrap_or_else(|| args.process.join("meta.yaml"));

    let ctx = ServiceContext::live(&args.config, &args.project, &args.step, &ruleset)?;

    let job_name = args
        .process
        .file_name()
        .map_or_else(|| "process".to_string(), |n| n.to_string_lossy().into_owned());
    let job = Job::new(job_name, meta);

    match step::run(&ctx, &job) {
        StepOutcome::Finish | StepOutcome::Wait => Ok(()),
        StepOutcome::Error => Err(format!("identifier step failed for {}", job.name)),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn setup_process(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("mintid_run_cmd_tests").join(name);
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("meta.yaml"), "doc_type: Monograph\n").unwrap();
        std::fs::write(dir.join("ruleset.yaml"), "fields:\n  - name: CatalogIDDigital\n").unwrap();
        dir
    }

    fn args_for(process: PathBuf) -> RunArgs {
        RunArgs {
            process,
            project: String::new(),
            step: String::new(),
            config: PathBuf::from("/nonexistent/mintid.yaml"),
            ruleset: None,
            meta: None,
        }
    }

    #[test]
    fn run_updates_the_record_in_place() {
        let dir = setup_process("updates");
        run(&args_for(dir.clone())).unwrap();

        let meta = std::fs::read_to_string(dir.join("meta.yaml")).unwrap();
        assert!(meta.contains("CatalogIDDigital"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn run_fails_when_the_record_is_missing() {
        let dir = setup_process("missing_meta");
        std::fs::remove_file(dir.join("meta.yaml")).unwrap();

        assert!(run(&args_for(dir.clone())).is_err());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
