//! Tandem CLI
//!
//! Replays headless scroll scenarios and validates `tandem.toml` files.

mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tandem_headless::{run_loaded_scenario, HeadlessRunConfig, HeadlessScenario, ReportStatus};

use crate::config::TandemConfig;

/// Scroll offset synchronisation tooling
#[derive(Parser, Debug)]
#[command(name = "tandem")]
#[command(about = "Replay scroll scenarios against the Tandem scroll offset manager")]
#[command(version)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a JSON scenario
    Run {
        /// Scenario file
        scenario: PathBuf,

        /// Configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write the JSON report to this relative path
        #[arg(short, long)]
        report: Option<PathBuf>,
    },

    /// Validate a configuration file
    CheckConfig {
        /// Configuration file
        path: PathBuf,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Run {
            scenario,
            config,
            report,
        } => run(&scenario, config.as_deref(), report.as_deref()),
        Command::CheckConfig { path } => check_config(&path),
    }
}

fn run(scenario_path: &Path, config: Option<&Path>, report_path: Option<&Path>) -> Result<ExitCode> {
    let runtime_cfg = match config {
        Some(path) => TandemConfig::load(path)?.run_config(),
        None => HeadlessRunConfig::default(),
    };
    let scenario = HeadlessScenario::from_path(scenario_path)?;

    tracing::info!(
        "running {} ({} steps)",
        scenario_path.display(),
        scenario.steps.len()
    );
    let outcome = run_loaded_scenario(&scenario, runtime_cfg)
        .with_context(|| format!("scenario {} aborted", scenario_path.display()))?;

    let report = outcome.report();
    let status = match report_path {
        Some(path) => {
            let status = report
                .write_to_path(path)
                .with_context(|| format!("Failed to write report {}", path.display()))?;
            tracing::info!("report written to {}", path.display());
            status
        }
        None => report.write_to_writer(&mut std::io::stdout().lock())?,
    };

    match status {
        ReportStatus::Passed => Ok(ExitCode::SUCCESS),
        ReportStatus::Failed => Ok(ExitCode::FAILURE),
    }
}

fn check_config(path: &Path) -> Result<ExitCode> {
    let config = TandemConfig::load(path)?;
    tracing::info!(
        "{} is valid (page_overlap={}, reveal_margin_divisor={}, settle_mode={:?})",
        path.display(),
        config.scroll.page_overlap,
        config.scroll.reveal_margin_divisor,
        config.headless.settle_mode
    );
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_command() {
        let cli = Cli::try_parse_from([
            "tandem",
            "-v",
            "run",
            "demos/fling.json",
            "--config",
            "demos/tandem.toml",
            "--report",
            "out/report.json",
        ])
        .unwrap();

        assert!(cli.verbose);
        let Command::Run {
            scenario,
            config,
            report,
        } = cli.command
        else {
            panic!("expected run command");
        };
        assert_eq!(scenario, PathBuf::from("demos/fling.json"));
        assert_eq!(config, Some(PathBuf::from("demos/tandem.toml")));
        assert_eq!(report, Some(PathBuf::from("out/report.json")));
    }

    #[test]
    fn test_parse_check_config() {
        let cli = Cli::try_parse_from(["tandem", "check-config", "tandem.toml"]).unwrap();

        assert!(!cli.verbose);
        assert!(matches!(cli.command, Command::CheckConfig { .. }));
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
