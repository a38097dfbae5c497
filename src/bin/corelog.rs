//! Hosts the process logger from the command line.
//!
//! Usage:
//!   corelog [--config-dir DIR] log <level> <scope> <message...>
//!   corelog [--config-dir DIR] check

use clap::{Parser, Subcommand};
use corelog::config::{ConfigProvider, DEFAULT_PROFILE, FileProvider, Settings};
use corelog::{Assembler, Level, Outcome, global, internal};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "corelog",
    version,
    about = "Log through the transports declared in the default profile"
)]
struct Cli {
    /// Directory holding `<profile>.toml` (defaults to the platform config dir)
    #[arg(long, value_name = "DIR", global = true)]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Log one message.
    Log {
        level: Level,
        scope: String,
        message: Vec<String>,
    },
    /// Assemble the profile and report each declaration's outcome.
    Check,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let provider = match cli.config_dir {
        Some(dir) => FileProvider::new(dir),
        None => match FileProvider::default_location() {
            Ok(provider) => provider,
            Err(e) => {
                eprintln!("corelog: {e}");
                return ExitCode::FAILURE;
            }
        },
    };

    // Read once: the same settings drive diagnostics and assembly.
    let settings = match provider.get(DEFAULT_PROFILE) {
        Ok(settings) => {
            internal::init_with_settings(&settings);
            settings
        }
        Err(e) => {
            internal::init();
            internal::warn(
                "CLI",
                &format!("Failed to read profile '{DEFAULT_PROFILE}', using defaults: {e}"),
            );
            Settings::default()
        }
    };
    let assembler = Assembler::new(provider);

    match cli.command {
        Command::Log {
            level,
            scope,
            message,
        } => {
            let logger = global::init_with_settings(&assembler, &settings);
            logger.log(level, &scope, &message.join(" "));
            if let Err(e) = logger.flush() {
                internal::error("CLI", &format!("Flush failed: {e}"));
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Command::Check => cmd_check(&assembler, &settings),
    }
}

fn cmd_check(assembler: &Assembler, settings: &Settings) -> ExitCode {
    let (logger, report) = assembler.assemble_settings(settings);

    for entry in report.entries() {
        let source = entry
            .module
            .as_deref()
            .map_or_else(String::new, |m| format!(" [{m}]"));
        let status = match &entry.outcome {
            Outcome::Disabled => "disabled".to_string(),
            Outcome::Attached(resolution) => format!("attached ({resolution})"),
            Outcome::Failed(failure) => failure.to_string(),
        };
        println!("{}{source}: {status}", entry.name);
    }
    println!(
        "{} transport(s) attached: [{}]",
        logger.transport_count(),
        logger.transport_names().join(", ")
    );

    if report.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
