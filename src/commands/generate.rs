//! `mintid generate` command.

use crate::adapters::live::{LiveClock, LiveConfigSource, LiveNumberSource, LiveUuidSource};
use crate::cli::GenerateArgs;
use crate::generator::{self, GenerationConfig};

/// Execute the `generate` command.
///
/// Resolves the configuration for the given project and step, produces
/// one identifier, and prints it. No record is read or written, so this
/// is safe to use for checking what a configuration block will produce.
///
/// # Errors
///
/// Returns an error string if the configuration file cannot be loaded.
pub fn run(args: &GenerateArgs) -> Result<(), String> {
    let source = LiveConfigSource::load(&args.config, &args.project, &args.step)?;
    let config = GenerationConfig::from_source(&source);

    let id =
        generator::generate(&LiveClock, &LiveNumberSource, &LiveUuidSource::new(), &config);
    println!("{id}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn generate_with_default_config_succeeds() {
        let args = GenerateArgs {
            project: String::new(),
            step: String::new(),
            config: PathBuf::from("/nonexistent/mintid.yaml"),
        };
        assert!(run(&args).is_ok());
    }

    #[test]
    fn generate_with_broken_config_fails() {
        let dir = std::env::temp_dir().join("mintid_generate_cmd_tests");
        std::fs::create_dir_all(&dir).unwrap();
        let config = dir.join("broken.yaml");
        std::fs::write(&config, "blocks: [not: {valid").unwrap();

        let args = GenerateArgs { project: String::new(), step: String::new(), config };
        assert!(run(&args).is_err());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
