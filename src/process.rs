//! Bounded invocation of external validator tools.

use std::io::{Read, Seek, SeekFrom};
use std::process::{Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use crate::error::CheckError;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Exit status and captured stderr of a finished tool run.
#[derive(Debug)]
pub struct ToolOutput {
    pub status: ExitStatus,
    pub stderr: String,
}

impl ToolOutput {
    #[must_use]
    pub fn success(&self) -> bool {
        self.status.success()
    }
}

/// Run `program args..` and wait at most `timeout` for it to exit.
///
/// Stdout is discarded and stderr is captured into an anonymous temp file,
/// so the polling loop never stalls on a full pipe. On timeout the child is
/// killed and reaped.
///
/// # Errors
/// `ToolUnavailable` when the program cannot be found, `Timeout` when it
/// outlives `timeout`, `UnexpectedIo` for any other spawn or wait failure.
pub fn run_with_timeout(
    program: &str,
    args: &[String],
    timeout: Duration,
) -> Result<ToolOutput, CheckError> {
    let mut capture =
        tempfile::tempfile().map_err(|e| CheckError::io("create stderr capture", e))?;
    let stderr_handle = capture
        .try_clone()
        .map_err(|e| CheckError::io("clone stderr capture", e))?;

    let mut child = match Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::from(stderr_handle))
        .spawn()
    {
        Ok(child) => child,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(CheckError::ToolUnavailable {
                program: program.to_string(),
            });
        }
        Err(e) => return Err(CheckError::io(format!("spawn `{program}` failed"), e)),
    };

    // `None` when the bound is beyond what `Instant` can represent.
    let deadline = Instant::now().checked_add(timeout);
    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) => {
                if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
                    let _ = child.kill();
                    let _ = child.wait();
                    tracing::debug!(program, ?timeout, "external tool killed after timeout");
                    return Err(CheckError::Timeout {
                        program: program.to_string(),
                        timeout,
                    });
                }
                thread::sleep(POLL_INTERVAL);
            }
            Err(e) => return Err(CheckError::io(format!("wait for `{program}` failed"), e)),
        }
    };

    let mut raw = Vec::new();
    capture
        .seek(SeekFrom::Start(0))
        .and_then(|_| capture.read_to_end(&mut raw))
        .map_err(|e| CheckError::io("read stderr capture", e))?;

    Ok(ToolOutput {
        status,
        stderr: String::from_utf8_lossy(&raw).into_owned(),
    })
}

/// First `max_chars` characters of `text`, cut on a char boundary.
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    text.char_indices()
        .nth(max_chars)
        .map_or(text, |(idx, _)| &text[..idx])
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
