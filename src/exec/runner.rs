// src/exec/runner.rs

//! Single process runner with live output forwarding.

use std::process::Stdio;

use anyhow::Context;
use tokio::io::{AsyncRead, AsyncWriteExt};
use tokio::process::Command;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::errors::{ActionError, Result};
use crate::exec::CommandSpec;

/// Run one process to completion, forwarding its stdout and stderr to the
/// wrapper's own streams chunk by chunk as they arrive.
///
/// Returns the child's exit code (`-1` if it was killed by a signal).
/// Callers decide whether a non-zero code is an error.
pub async fn run_streaming(spec: &CommandSpec) -> Result<i32> {
    info!(
        program = %spec.program,
        args = ?spec.args,
        cwd = %spec.cwd.display(),
        "starting process"
    );

    let mut cmd = Command::new(&spec.program);
    cmd.args(&spec.args)
        .current_dir(&spec.cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let mut child = cmd.spawn().map_err(|source| ActionError::Spawn {
        program: spec.program.clone(),
        source,
    })?;

    let stdout_pump = child.stdout.take().map(|s| pump(s, Stream::Stdout));
    let stderr_pump = child.stderr.take().map(|s| pump(s, Stream::Stderr));

    let status = child
        .wait()
        .await
        .with_context(|| format!("waiting for '{}'", spec.command_line()))?;

    // Drain whatever is still in flight before reporting the exit code.
    if let Some(handle) = stdout_pump {
        let _ = handle.await;
    }
    if let Some(handle) = stderr_pump {
        let _ = handle.await;
    }

    let code = status.code().unwrap_or(-1);
    info!(
        program = %spec.program,
        exit_code = code,
        success = status.success(),
        "process exited"
    );

    Ok(code)
}

enum Stream {
    Stdout,
    Stderr,
}

/// Copy a child stream to our own matching stream as data arrives.
fn pump<R>(mut reader: R, target: Stream) -> JoinHandle<()>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let res = match target {
            Stream::Stdout => {
                let mut out = tokio::io::stdout();
                let res = tokio::io::copy(&mut reader, &mut out).await;
                let _ = out.flush().await;
                res
            }
            Stream::Stderr => {
                let mut err = tokio::io::stderr();
                let res = tokio::io::copy(&mut reader, &mut err).await;
                let _ = err.flush().await;
                res
            }
        };

        if let Err(e) = res {
            debug!(error = %e, "output forwarding stopped early");
        }
    })
}
