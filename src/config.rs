// src/config.rs

//! Resolved settings for a single action run.
//!
//! The shim has no config file: its two commands are fixed, and the only
//! variable is the directory they run in. That directory can come from the
//! CLI (local debugging), from a `working-directory` action input, or
//! default to wherever the wrapper binary is installed.

use std::path::{Path, PathBuf};

use crate::cli::CliArgs;
use crate::errors::{ActionError, Result};
use crate::exec::CommandSpec;
use crate::github;

/// Name of the optional action input overriding the working directory.
const WORKING_DIRECTORY_INPUT: &str = "working-directory";

const FETCH_PROGRAM: &str = "pub";
const FETCH_ARGS: &[&str] = &["get"];
const ENTRY_PROGRAM: &str = "dart";
const ENTRY_ARGS: &[&str] = &["bin/main.dart"];

/// Everything the run needs, resolved and validated.
#[derive(Debug, Clone)]
pub struct ActionConfig {
    /// Directory both commands run in.
    pub app_dir: PathBuf,
}

impl ActionConfig {
    /// Resolve the configuration for this run.
    ///
    /// Precedence for the working directory:
    /// 1. `--app-dir` CLI flag
    /// 2. `working-directory` action input
    /// 3. the directory containing the wrapper executable
    pub fn resolve(args: &CliArgs) -> Result<Self> {
        Self::resolve_with_input(args, github::get_input(WORKING_DIRECTORY_INPUT))
    }

    fn resolve_with_input(args: &CliArgs, input_dir: Option<String>) -> Result<Self> {
        let app_dir = match &args.app_dir {
            Some(dir) => dir.clone(),
            None => match input_dir {
                Some(dir) => PathBuf::from(dir),
                None => install_dir()?,
            },
        };

        let cfg = Self { app_dir };
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<()> {
        if !self.app_dir.is_dir() {
            return Err(ActionError::Config(format!(
                "working directory '{}' does not exist",
                self.app_dir.display()
            )));
        }
        Ok(())
    }

    /// The dependency-fetch step: `pub get`.
    pub fn fetch_command(&self) -> CommandSpec {
        CommandSpec::new(FETCH_PROGRAM, FETCH_ARGS, &self.app_dir)
    }

    /// The entry-point step: `dart bin/main.dart`.
    pub fn entry_command(&self) -> CommandSpec {
        CommandSpec::new(ENTRY_PROGRAM, ENTRY_ARGS, &self.app_dir)
    }
}

/// Directory containing the wrapper executable itself.
fn install_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()
        .map_err(|e| ActionError::Config(format!("cannot locate own executable: {e}")))?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| ActionError::Config("executable has no parent directory".to_string()))
}
