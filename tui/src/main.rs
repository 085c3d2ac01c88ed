//! oneclick - prints the deployment environment resolved from configuration.

use anyhow::{Context as _, Result};
use clap::Parser;
use crossterm::style::Stylize;
use std::path::PathBuf;
use std::process::ExitCode;

mod logging;
mod output;
mod pause;

use oneclick_core::{AppSettings, EnvSource, Environment, FileSource, LayeredSource};

/// Show the configured deployment environment.
///
/// The environment is read from `ONECLICK_ENVIRONMENT`, falling back to the
/// `[app_settings]` table of the settings file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Settings file (default: `$XDG_CONFIG_HOME/oneclick/config.toml`).
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Exit immediately instead of waiting for a key press.
    #[arg(long = "no-wait")]
    no_wait: bool,

    /// Also write logs to a daily-rotated file in this directory.
    #[arg(long = "log-dir")]
    log_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    let _log_guard = match logging::init_logging(args.log_dir.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            output::eprintln(format_args!("Failed to initialize logging: {e:#}"));
            return ExitCode::FAILURE;
        },
    };

    if let Err(e) = run(&args) {
        tracing::error!("Application error: {e:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Run the main application logic.
fn run(args: &CliArgs) -> Result<()> {
    let settings = AppSettings::new(build_source(args.config.clone()));
    let environment = settings.environment()?;
    tracing::info!(%environment, "Resolved environment");

    greet(environment, !args.no_wait);

    if !args.no_wait {
        pause::wait_for_keypress().context("Failed to wait for key press")?;
    }
    Ok(())
}

/// Environment variables layered over the settings file.
fn build_source(config: Option<PathBuf>) -> LayeredSource {
    let mut source = LayeredSource::new().with_layer(EnvSource::new());
    match config.or_else(FileSource::default_path) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Using settings file");
            source.push(FileSource::new(path));
        },
        None => tracing::debug!("No settings file location available"),
    }
    source
}

/// Print the greeting and, if requested, the close prompt.
fn greet(environment: Environment, prompt: bool) {
    output::println(format_args!("{}", "Hello! Yippee! It worked!! ".bold()));
    output::println(format_args!(
        "environment is {}!",
        environment.as_str().green().bold()
    ));

    if prompt {
        output::print(format_args!("{}", output::separator()));
        output::print(format_args!("{}", "Press any key to close ...".dim()));
    }
}
