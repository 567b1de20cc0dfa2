// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! On the CI runner the action is invoked without any flags; everything here
//! is optional and exists for running and debugging the shim locally.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `dart-action`.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "dart-action",
    version,
    about = "Fetch a Dart project's dependencies and run its entry point.",
    long_about = None
)]
pub struct CliArgs {
    /// Directory containing the Dart project (pubspec and bin/main.dart).
    ///
    /// Default: the directory this executable is installed in.
    #[arg(long, value_name = "PATH")]
    pub app_dir: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `DART_ACTION_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Print the resolved directory and commands, but don't execute anything.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
