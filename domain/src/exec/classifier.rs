//! Outcome classification — exit status and streams folded into envelopes
//!
//! `classify_outcome` implements the uniform rule shared by almost every
//! tool: exit 0 means a success envelope built from decoded stdout under
//! a tool-specific banner, anything else means an error envelope built
//! from decoded stderr under a failure label. A spawn failure folded into
//! an outcome by the runner classifies identically to a script-reported
//! failure.
//!
//! `parse_conflict_paths` is the one structured post-processor: it splits
//! the extract tool's single output line into its four colon-separated
//! path fields.

use super::entities::ExecutionOutcome;
use crate::tool::value_objects::ResultEnvelope;

/// Classify an outcome under a success banner and a failure label.
///
/// On success the envelope text is `"{banner}\n\n{stdout}"`. On failure
/// it is `"{failure_label}:\n{stderr}"`, substituting a generic status
/// message when the child wrote nothing to stderr.
pub fn classify_outcome(
    outcome: &ExecutionOutcome,
    banner: &str,
    failure_label: &str,
) -> ResultEnvelope {
    if outcome.is_success() {
        ResultEnvelope::success(format!("{}\n\n{}", banner, outcome.stdout_text()))
    } else {
        ResultEnvelope::error(format!(
            "{}:\n{}",
            failure_label,
            failure_detail(outcome)
        ))
    }
}

/// stderr text, or a generic message when the child left stderr empty
pub fn failure_detail(outcome: &ExecutionOutcome) -> String {
    let stderr = outcome.stderr_text();
    if stderr.trim().is_empty() {
        format!("process exited with status {}", outcome.exit_code)
    } else {
        stderr
    }
}

/// The four paths produced by conflict-file extraction.
///
/// Callers edit the ours/theirs files, then feed all three content paths
/// back into the remerge tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictFileSet {
    pub temp_dir: String,
    pub ours: String,
    pub base: String,
    pub theirs: String,
}

/// Parse the extract tool's stdout line `tmpdir:ours:base:theirs`.
///
/// Fewer than four colon-separated fields is an output-shape error; the
/// raw output is returned so the caller can surface it.
pub fn parse_conflict_paths(stdout: &str) -> Result<ConflictFileSet, String> {
    let trimmed = stdout.trim();
    let parts: Vec<&str> = trimmed.split(':').collect();
    if parts.len() < 4 {
        return Err(trimmed.to_string());
    }
    Ok(ConflictFileSet {
        temp_dir: parts[0].to_string(),
        ours: parts[1].to_string(),
        base: parts[2].to_string(),
        theirs: parts[3].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_success_uses_stdout_under_banner() {
        let outcome = ExecutionOutcome::new(0, b"HEAD is now at abc123\n".to_vec(), Vec::new());
        let envelope = classify_outcome(&outcome, "✅ Git undo completed successfully:", "❌ Git undo failed");

        assert!(!envelope.is_error());
        assert!(envelope.text().starts_with("✅ Git undo completed successfully:\n\n"));
        assert!(envelope.text().contains("HEAD is now at abc123"));
    }

    #[test]
    fn test_classify_failure_uses_stderr() {
        let outcome = ExecutionOutcome::new(128, Vec::new(), b"fatal: not a git repository\n".to_vec());
        let envelope = classify_outcome(&outcome, "✅ ok", "❌ Git undo failed");

        assert!(envelope.is_error());
        assert_eq!(
            envelope.text(),
            "❌ Git undo failed:\nfatal: not a git repository\n"
        );
    }

    #[test]
    fn test_classify_failure_with_empty_stderr() {
        let outcome = ExecutionOutcome::new(3, Vec::new(), Vec::new());
        let envelope = classify_outcome(&outcome, "✅ ok", "❌ Git redo failed");

        assert!(envelope.is_error());
        assert_eq!(
            envelope.text(),
            "❌ Git redo failed:\nprocess exited with status 3"
        );
    }

    #[test]
    fn test_classify_failure_ignores_stdout() {
        let outcome =
            ExecutionOutcome::new(1, b"partial progress\n".to_vec(), b"went wrong\n".to_vec());
        let envelope = classify_outcome(&outcome, "✅ ok", "❌ failed");

        assert!(envelope.is_error());
        assert!(!envelope.text().contains("partial progress"));
    }

    #[test]
    fn test_parse_conflict_paths_four_fields() {
        let set =
            parse_conflict_paths("/tmp/x:/tmp/x/ours:/tmp/x/base:/tmp/x/theirs\n").unwrap();
        assert_eq!(set.temp_dir, "/tmp/x");
        assert_eq!(set.ours, "/tmp/x/ours");
        assert_eq!(set.base, "/tmp/x/base");
        assert_eq!(set.theirs, "/tmp/x/theirs");
    }

    #[test]
    fn test_parse_conflict_paths_too_few_fields() {
        let err = parse_conflict_paths("/tmp/x:/tmp/x/ours\n").unwrap_err();
        assert_eq!(err, "/tmp/x:/tmp/x/ours");
    }

    #[test]
    fn test_parse_conflict_paths_extra_fields_keeps_first_four() {
        let set = parse_conflict_paths("a:b:c:d:e").unwrap();
        assert_eq!(set.theirs, "d");
    }
}
