//! Lehua - Main entrypoint.
//!
//! Loads a word list into a prefix trie and answers a single query against
//! it: prefix completion or longest matching prefix.

use std::process::ExitCode;

use lehua_lib::cli::{self, Args};
use lehua_lib::config::{ConfigLoader, LogConfig, ENV_PREFIX};
use lehua_lib::error::{ErrorContext, ErrorReporter, LehuaError, LehuaResult, TracingErrorReporter};
use tracing_subscriber::EnvFilter;

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(log: &LogConfig) -> LehuaResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let installed = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };
    installed
        .map_err(|e| LehuaError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Main entry point for the application.
fn main() -> ExitCode {
    let args = <Args as clap::Parser>::parse();

    let loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let config = loader.load();

    // A broken config still gets reported, through default logging.
    let log = config
        .as_ref()
        .map(|c| c.log.clone())
        .unwrap_or_default();
    if let Err(e) = init_logging(&log) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    let result = config.map_err(LehuaError::from).and_then(|mut config| {
        cli::apply_overrides(&args, &mut config);
        cli::execute(&args.command, &config)
    });

    match result {
        Ok(Some(out)) => {
            println!("{out}");
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            let context = ErrorContext::new(e, "lehua")
                .with_details(format!("subcommand: {}", args.command.name()));
            TracingErrorReporter.report(context);
            ExitCode::FAILURE
        }
    }
}
