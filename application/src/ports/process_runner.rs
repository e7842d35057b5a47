//! Port for child-process execution.
//!
//! One child per call, no pooling, no timeout. The runner never fails at
//! the type level: a spawn or OS error is folded into an
//! [`ExecutionOutcome`] with a non-zero sentinel exit code and the error
//! text as stderr, so callers treat it uniformly with a script-reported
//! failure.

use async_trait::async_trait;
use bridge_domain::exec::entities::{CommandSpec, ExecutionOutcome};

/// Port for executing a planned command and capturing its outcome
#[async_trait]
pub trait ProcessRunnerPort: Send + Sync {
    /// Run the command to completion, feeding optional stdin and capturing
    /// stdout and stderr as independent byte streams.
    ///
    /// Suspends only the invoking task; concurrent calls progress
    /// independently.
    async fn run(&self, spec: &CommandSpec) -> ExecutionOutcome;
}
