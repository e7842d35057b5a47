//! Execution value objects — planned commands and captured outcomes

use serde::{Deserialize, Serialize};

/// A fully planned child-process invocation.
///
/// Derived deterministically from a validated tool call; owning the argv
/// and optional stdin payload, nothing else. The first argv element is
/// the executable to run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    /// Ordered argument vector; never empty
    pub argv: Vec<String>,
    /// Text written to the child's stdin before closing it, if any
    pub stdin: Option<String>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            argv: vec![program.into()],
            stdin: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.argv.push(arg.into());
        self
    }

    pub fn with_stdin(mut self, stdin: impl Into<String>) -> Self {
        self.stdin = Some(stdin.into());
        self
    }

    pub fn program(&self) -> &str {
        &self.argv[0]
    }

    pub fn args(&self) -> &[String] {
        &self.argv[1..]
    }
}

/// Raw result captured from a finished child process.
///
/// stdout and stderr are kept as independent byte buffers; decoding to
/// text is always lossy so garbled script output can never poison the
/// envelope with a decoding failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionOutcome {
    pub exit_code: i32,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl ExecutionOutcome {
    pub fn new(exit_code: i32, stdout: Vec<u8>, stderr: Vec<u8>) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
        }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }

    /// Decoded stdout; invalid bytes are replaced, never rejected
    pub fn stdout_text(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }

    /// Decoded stderr; invalid bytes are replaced, never rejected
    pub fn stderr_text(&self) -> String {
        String::from_utf8_lossy(&self.stderr).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_spec_builder() {
        let spec = CommandSpec::new("/opt/git-scripts/git-redo")
            .arg("--message-only")
            .with_stdin("y\n");

        assert_eq!(spec.program(), "/opt/git-scripts/git-redo");
        assert_eq!(spec.args(), ["--message-only"]);
        assert_eq!(spec.stdin.as_deref(), Some("y\n"));
    }

    #[test]
    fn test_outcome_success() {
        let outcome = ExecutionOutcome::new(0, b"done\n".to_vec(), Vec::new());
        assert!(outcome.is_success());
        assert_eq!(outcome.stdout_text(), "done\n");
    }

    #[test]
    fn test_outcome_lossy_decoding_never_fails() {
        // 0xff is not valid UTF-8; decoding must substitute, not error
        let outcome = ExecutionOutcome::new(1, vec![0xff, 0xfe], vec![b'o', 0xff, b'k']);
        assert_eq!(outcome.stdout_text(), "\u{fffd}\u{fffd}");
        assert_eq!(outcome.stderr_text(), "o\u{fffd}k");
    }
}
