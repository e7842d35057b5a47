//! Tokio-backed process runner.
//!
//! One child process per call. stdout and stderr are captured as
//! independent byte buffers; when the planned command carries stdin text
//! it is written in full and the handle dropped so the child observes
//! EOF. There is no timeout and no kill path: a hung script hangs its
//! own call task and nothing else.

use async_trait::async_trait;
use bridge_application::ports::process_runner::ProcessRunnerPort;
use bridge_domain::exec::entities::{CommandSpec, ExecutionOutcome};
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, trace};

/// Exit code reported when the child could not be spawned at all.
///
/// Spawn failures classify identically to a script that ran and failed;
/// the OS error text takes the place of stderr.
const SPAWN_FAILURE_EXIT_CODE: i32 = 1;

/// Runner spawning one `tokio::process::Command` per call.
#[derive(Debug, Clone, Default)]
pub struct TokioProcessRunner;

impl TokioProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProcessRunnerPort for TokioProcessRunner {
    async fn run(&self, spec: &CommandSpec) -> ExecutionOutcome {
        debug!("Spawning {:?}", spec.argv);

        let mut command = Command::new(spec.program());
        command
            .args(spec.args())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .stdin(if spec.stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            });

        let mut child = match command.spawn() {
            Ok(child) => child,
            Err(e) => {
                return ExecutionOutcome::new(
                    SPAWN_FAILURE_EXIT_CODE,
                    Vec::new(),
                    format!("Failed to execute {}: {}", spec.program(), e).into_bytes(),
                );
            }
        };

        if let Some(input) = &spec.stdin
            && let Some(mut stdin) = child.stdin.take()
        {
            // Write errors surface through the child's own exit status
            let _ = stdin.write_all(input.as_bytes()).await;
        }

        match child.wait_with_output().await {
            Ok(output) => {
                let exit_code = output.status.code().unwrap_or(-1);
                trace!("Child exited with status {}", exit_code);
                ExecutionOutcome::new(exit_code, output.stdout, output.stderr)
            }
            Err(e) => ExecutionOutcome::new(
                SPAWN_FAILURE_EXIT_CODE,
                Vec::new(),
                format!("Failed to collect output: {}", e).into_bytes(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sh(script: &str) -> CommandSpec {
        CommandSpec::new("/bin/sh").arg("-c").arg(script)
    }

    #[tokio::test]
    async fn test_captures_stdout_and_exit_zero() {
        let runner = TokioProcessRunner::new();
        let outcome = runner.run(&sh("echo hello")).await;

        assert!(outcome.is_success());
        assert_eq!(outcome.stdout_text(), "hello\n");
        assert!(outcome.stderr.is_empty());
    }

    #[tokio::test]
    async fn test_captures_stderr_and_nonzero_exit() {
        let runner = TokioProcessRunner::new();
        let outcome = runner.run(&sh("echo oops >&2; exit 3")).await;

        assert_eq!(outcome.exit_code, 3);
        assert_eq!(outcome.stderr_text(), "oops\n");
    }

    #[tokio::test]
    async fn test_stdin_is_written_then_closed() {
        // cat only terminates when stdin reaches EOF, so this also
        // verifies the handle is dropped after the write.
        let runner = TokioProcessRunner::new();
        let spec = CommandSpec::new("/bin/cat").with_stdin("y\n");
        let outcome = runner.run(&spec).await;

        assert!(outcome.is_success());
        assert_eq!(outcome.stdout_text(), "y\n");
    }

    #[tokio::test]
    async fn test_spawn_failure_folds_into_outcome() {
        let runner = TokioProcessRunner::new();
        let spec = CommandSpec::new("/nonexistent/git-undo");
        let outcome = runner.run(&spec).await;

        assert_eq!(outcome.exit_code, 1);
        assert!(
            outcome
                .stderr_text()
                .starts_with("Failed to execute /nonexistent/git-undo:")
        );
    }

    #[tokio::test]
    async fn test_invalid_utf8_output_is_decoded_lossily() {
        let runner = TokioProcessRunner::new();
        let outcome = runner.run(&sh(r"printf '\377ok'")).await;

        assert!(outcome.is_success());
        assert_eq!(outcome.stdout_text(), "\u{fffd}ok");
    }
}
