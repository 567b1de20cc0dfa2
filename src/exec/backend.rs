// src/exec/backend.rs

//! Pluggable executor abstraction.
//!
//! The action steps talk to a `CommandExecutor` instead of spawning
//! processes directly. This makes it easy to swap in a fake executor in
//! tests while keeping the production implementation in [`runner`].
//!
//! [`runner`]: crate::exec::runner

use std::future::Future;
use std::pin::Pin;

use crate::errors::Result;
use crate::exec::CommandSpec;

/// Trait abstracting how commands are executed.
///
/// Production code uses [`RealExecutor`]; tests can provide their own
/// implementation that doesn't spawn real processes.
pub trait CommandExecutor: Send {
    /// Run the command to completion and return its exit code.
    ///
    /// A non-zero exit code is a normal return, not an error; only failing
    /// to start or wait on the process is.
    fn run(
        &mut self,
        spec: CommandSpec,
    ) -> Pin<Box<dyn Future<Output = Result<i32>> + Send + '_>>;
}

/// Real executor used in production.
#[derive(Debug, Default)]
pub struct RealExecutor;

impl RealExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl CommandExecutor for RealExecutor {
    fn run(
        &mut self,
        spec: CommandSpec,
    ) -> Pin<Box<dyn Future<Output = Result<i32>> + Send + '_>> {
        Box::pin(async move { super::runner::run_streaming(&spec).await })
    }
}
