use std::{
    io,
    process::{Child, Command, Stdio},
    thread,
    time::{Duration, Instant},
};

use tracing::{info, warn};

use crate::{error::WizardError, ui};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

// ── Internal helpers ──────────────────────────────────────────────────────────

fn not_found_or_io(program: &str, err: io::Error) -> WizardError {
    if err.kind() == io::ErrorKind::NotFound {
        WizardError::CommandNotFound(program.to_string())
    } else {
        WizardError::Io(err)
    }
}

/// Waits for `child` until it exits or `timeout` elapses; kills it in the latter case.
fn wait_with_timeout(
    program: &str,
    child: &mut Child,
    timeout: Duration,
) -> Result<(), WizardError> {
    let started = Instant::now();
    loop {
        if let Some(status) = child.try_wait()? {
            if status.success() {
                return Ok(());
            }
            return Err(WizardError::CommandFailed(
                program.to_string(),
                status.code().unwrap_or(-1),
            ));
        }

        if started.elapsed() >= timeout {
            let _ = child.kill();
            let _ = child.wait();
            return Err(WizardError::TimedOut(program.to_string(), timeout.as_secs()));
        }

        thread::sleep(POLL_INTERVAL);
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Run a command **silently** while displaying a spinner.
///
/// All output is discarded. The child is killed if it outlives `timeout`.
/// The spinner is cleared before returning; reporting the outcome is left to
/// the caller.
pub fn run_with_spinner(
    program: &str,
    args: &[&str],
    timeout: Duration,
    spin_msg: &str,
) -> Result<(), WizardError> {
    info!(program, ?args, "spawning");

    let pb = ui::spinner(spin_msg);
    let result = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| not_found_or_io(program, e))
        .and_then(|mut child| wait_with_timeout(program, &mut child, timeout));
    pb.finish_and_clear();

    match &result {
        Ok(()) => info!(program, "finished"),
        Err(e) => warn!(program, error = %e, "did not succeed"),
    }
    result
}
