use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use dart_action::errors::{ActionError, Result};
use dart_action::exec::{CommandExecutor, CommandSpec};

/// Scripted result for one `run` call of the [`FakeExecutor`].
pub enum Outcome {
    /// The process "ran" and exited with this code.
    Exit(i32),
    /// Spawning the process failed with this OS error message.
    SpawnError(String),
}

/// A fake executor that:
/// - records every command it is asked to run
/// - replays one scripted [`Outcome`] per call, in order.
pub struct FakeExecutor {
    outcomes: VecDeque<Outcome>,
    calls: Arc<Mutex<Vec<CommandSpec>>>,
}

impl FakeExecutor {
    pub fn new(outcomes: Vec<Outcome>) -> Self {
        Self {
            outcomes: outcomes.into(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Handle to the recorded calls; clones share the same list.
    pub fn calls(&self) -> Arc<Mutex<Vec<CommandSpec>>> {
        Arc::clone(&self.calls)
    }
}

impl CommandExecutor for FakeExecutor {
    fn run(
        &mut self,
        spec: CommandSpec,
    ) -> Pin<Box<dyn Future<Output = Result<i32>> + Send + '_>> {
        self.calls.lock().unwrap().push(spec.clone());
        let outcome = self.outcomes.pop_front();

        Box::pin(async move {
            match outcome {
                Some(Outcome::Exit(code)) => Ok(code),
                Some(Outcome::SpawnError(msg)) => Err(ActionError::Spawn {
                    program: spec.program,
                    source: std::io::Error::other(msg),
                }),
                None => Err(anyhow::anyhow!(
                    "fake executor ran out of scripted outcomes (unexpected call to '{}')",
                    spec.command_line()
                )
                .into()),
            }
        })
    }
}
