//! Core library entry for the `mintid` CLI.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod context;
pub mod generator;
pub mod ports;
pub mod record;
pub mod step;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli.command)
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn run_executes_generate() {
        let result = run(["mintid", "generate", "--config", "/nonexistent/mintid.yaml"]);
        assert!(result.is_ok());
    }

    #[test]
    fn run_errors_on_unknown_subcommand() {
        let result = run(["mintid", "unknown"]);
        assert!(result.is_err());
    }
}
