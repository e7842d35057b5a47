//! Pure per-tool command planning.
//!
//! Each function maps validated arguments to a [`CommandSpec`] following
//! the fixed per-tool rules:
//!
//! - `confirm=true` becomes a pre-supplied stdin line `"y\n"` (the scripts
//!   prompt interactively); absent/false means no stdin at all.
//! - Boolean flags append their token only when true. False and absent
//!   produce identical argv.
//! - String parameters with a documented default are appended only when
//!   they differ from that default. The external script is trusted to
//!   apply the same default; passing the value unconditionally would
//!   change behavior for scripts whose default ever drifts, so the
//!   omission is preserved as-is.
//!
//! These functions perform no I/O and never fail; argument presence is
//! the dispatcher's responsibility.

use crate::catalog::{DEFAULT_ONTO_BRANCH, DEFAULT_REMOTE_BRANCH};
use bridge_domain::exec::entities::CommandSpec;
use std::path::Path;

/// stdin payload answering the script's interactive prompt
const CONFIRM_INPUT: &str = "y\n";

fn script_spec(script: &Path) -> CommandSpec {
    CommandSpec::new(script.to_string_lossy().into_owned())
}

fn with_confirm(spec: CommandSpec, confirm: bool) -> CommandSpec {
    if confirm {
        spec.with_stdin(CONFIRM_INPUT)
    } else {
        spec
    }
}

/// `git-undo`
pub fn undo_plan(script: &Path, confirm: bool) -> CommandSpec {
    with_confirm(script_spec(script), confirm)
}

/// `git-redo [--message-only]`
pub fn redo_plan(script: &Path, message_only: bool, confirm: bool) -> CommandSpec {
    let mut spec = script_spec(script);
    if message_only {
        spec = spec.arg("--message-only");
    }
    with_confirm(spec, confirm)
}

/// `git-recommit`
pub fn recommit_plan(script: &Path, confirm: bool) -> CommandSpec {
    with_confirm(script_spec(script), confirm)
}

/// `git-check-dup [--quiet] [<remote_branch>]`
pub fn check_dup_plan(script: &Path, quiet: bool, remote_branch: &str) -> CommandSpec {
    let mut spec = script_spec(script);
    if quiet {
        spec = spec.arg("--quiet");
    }
    if remote_branch != DEFAULT_REMOTE_BRANCH {
        spec = spec.arg(remote_branch);
    }
    spec
}

/// `git-remove-redundant-commits [--onto <branch>] [--apply]`
pub fn remove_redundant_plan(script: &Path, onto_branch: &str, apply: bool) -> CommandSpec {
    let mut spec = script_spec(script);
    if onto_branch != DEFAULT_ONTO_BRANCH {
        spec = spec.arg("--onto").arg(onto_branch);
    }
    if apply {
        spec = spec.arg("--apply");
    }
    spec
}

/// `git log --oneline --max-count=20 <branch>` — branch-diff's read-only
/// listing; the one plan that runs plain git instead of a script.
pub fn branch_log_plan(branch: &str) -> CommandSpec {
    CommandSpec::new("git")
        .arg("log")
        .arg("--oneline")
        .arg("--max-count=20")
        .arg(branch)
}

/// `git-find_file <pattern> [--local]`
pub fn find_file_plan(script: &Path, pattern: &str, local: bool) -> CommandSpec {
    let mut spec = script_spec(script).arg(pattern);
    if local {
        spec = spec.arg("--local");
    }
    spec
}

/// `git-diff-patch <commit1> <commit2>`
pub fn diff_patch_plan(script: &Path, commit1: &str, commit2: &str) -> CommandSpec {
    script_spec(script).arg(commit1).arg(commit2)
}

/// `git-diff-123 --extract <file>`
pub fn extract_conflict_plan(script: &Path, file: &str) -> CommandSpec {
    script_spec(script).arg("--extract").arg(file)
}

/// `git-diff-123 --remerge <file> <ours> <base> <theirs>`
pub fn remerge_plan(
    script: &Path,
    file: &str,
    ours_path: &str,
    base_path: &str,
    theirs_path: &str,
) -> CommandSpec {
    script_spec(script)
        .arg("--remerge")
        .arg(file)
        .arg(ours_path)
        .arg(base_path)
        .arg(theirs_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn script() -> PathBuf {
        PathBuf::from("/opt/git-scripts/git-undo")
    }

    #[test]
    fn test_undo_confirm_supplies_stdin() {
        let spec = undo_plan(&script(), true);
        assert_eq!(spec.argv, ["/opt/git-scripts/git-undo"]);
        assert_eq!(spec.stdin.as_deref(), Some("y\n"));
    }

    #[test]
    fn test_undo_without_confirm_has_no_stdin() {
        let spec = undo_plan(&script(), false);
        assert_eq!(spec.argv, ["/opt/git-scripts/git-undo"]);
        assert!(spec.stdin.is_none());
    }

    #[test]
    fn test_redo_message_only_flag() {
        let spec = redo_plan(&script(), true, false);
        assert_eq!(spec.args(), ["--message-only"]);
        assert!(spec.stdin.is_none());

        let plain = redo_plan(&script(), false, true);
        assert!(plain.args().is_empty());
        assert_eq!(plain.stdin.as_deref(), Some("y\n"));
    }

    #[test]
    fn test_check_dup_default_branch_omitted() {
        let spec = check_dup_plan(&script(), false, "origin/main");
        assert!(spec.args().is_empty());
    }

    #[test]
    fn test_check_dup_non_default_branch_appended() {
        let spec = check_dup_plan(&script(), false, "origin/develop");
        assert_eq!(spec.args(), ["origin/develop"]);
    }

    #[test]
    fn test_check_dup_quiet_flag_order() {
        let spec = check_dup_plan(&script(), true, "upstream/main");
        assert_eq!(spec.args(), ["--quiet", "upstream/main"]);
    }

    #[test]
    fn test_remove_redundant_defaults_to_dry_run() {
        let spec = remove_redundant_plan(&script(), "origin/main", false);
        assert!(spec.args().is_empty());
    }

    #[test]
    fn test_remove_redundant_onto_and_apply() {
        let spec = remove_redundant_plan(&script(), "origin/release", true);
        assert_eq!(spec.args(), ["--onto", "origin/release", "--apply"]);
    }

    #[test]
    fn test_branch_log_plan() {
        let spec = branch_log_plan("HEAD");
        assert_eq!(spec.argv, ["git", "log", "--oneline", "--max-count=20", "HEAD"]);
        assert!(spec.stdin.is_none());
    }

    #[test]
    fn test_find_file_local_flag() {
        let spec = find_file_plan(&script(), "*.toml", true);
        assert_eq!(spec.args(), ["*.toml", "--local"]);

        let remote = find_file_plan(&script(), "*.toml", false);
        assert_eq!(remote.args(), ["*.toml"]);
    }

    #[test]
    fn test_diff_patch_positional_order() {
        let spec = diff_patch_plan(&script(), "abc123", "def456");
        assert_eq!(spec.args(), ["abc123", "def456"]);
    }

    #[test]
    fn test_extract_and_remerge_submodes() {
        let extract = extract_conflict_plan(&script(), "src/main.rs");
        assert_eq!(extract.args(), ["--extract", "src/main.rs"]);

        let remerge = remerge_plan(
            &script(),
            "src/main.rs",
            "/tmp/x/ours",
            "/tmp/x/base",
            "/tmp/x/theirs",
        );
        assert_eq!(
            remerge.args(),
            ["--remerge", "src/main.rs", "/tmp/x/ours", "/tmp/x/base", "/tmp/x/theirs"]
        );
    }

    #[test]
    fn test_false_and_absent_flags_are_identical() {
        // Booleans default to false at the call layer; planning with
        // false must match planning with the argument never supplied.
        assert_eq!(undo_plan(&script(), false), undo_plan(&script(), false));
        assert_eq!(
            check_dup_plan(&script(), false, "origin/main").argv,
            vec!["/opt/git-scripts/git-undo".to_string()]
        );
    }
}
