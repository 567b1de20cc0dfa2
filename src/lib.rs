// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod github;
pub mod logging;

use tracing::info;

use crate::cli::CliArgs;
use crate::config::ActionConfig;
use crate::errors::{ActionError, Result};
use crate::exec::{CommandExecutor, RealExecutor};

/// High-level entry point used by `main.rs`.
///
/// Returns the exit code the wrapper process should terminate with. Setup
/// failures (configuration, dependency fetch, spawn errors) come back as
/// `Err`; a non-zero exit of the entry point does not.
pub async fn run(args: CliArgs) -> Result<i32> {
    let cfg = ActionConfig::resolve(&args)?;

    if args.dry_run {
        print_dry_run(&cfg);
        return Ok(0);
    }

    let mut executor = RealExecutor::new();
    run_with_executor(&cfg, &mut executor).await
}

/// Run the two action steps against an arbitrary executor.
///
/// This is the seam integration tests use with a fake executor; production
/// code goes through [`run`] and the real one.
pub async fn run_with_executor(
    cfg: &ActionConfig,
    executor: &mut dyn CommandExecutor,
) -> Result<i32> {
    // Step one: dependency fetch, folded into a log group. A non-zero exit
    // aborts the run before the group is closed.
    github::start_group("Getting dependencies");

    let fetch = cfg.fetch_command();
    info!(cmd = %fetch.command_line(), dir = %cfg.app_dir.display(), "fetching dependencies");

    let fetch_code = executor.run(fetch.clone()).await?;
    if fetch_code != 0 {
        return Err(ActionError::ProcessFailed {
            program: fetch.program,
            code: fetch_code,
        });
    }

    github::end_group();

    // Step two: the entry point. Its exit code is the result, not an error.
    let entry = cfg.entry_command();
    info!(cmd = %entry.command_line(), "running entry point");

    let exit_code = executor.run(entry).await?;
    info!(exit_code, "entry point finished");

    Ok(exit_code)
}

/// Simple dry-run output: print the resolved directory and both commands.
fn print_dry_run(cfg: &ActionConfig) {
    println!("dart-action dry-run");
    println!("  working directory: {}", cfg.app_dir.display());
    println!("  1. {}", cfg.fetch_command().command_line());
    println!("  2. {}", cfg.entry_command().command_line());
}
