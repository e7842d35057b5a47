//! The static bridge catalog: ten git-safety tools.
//!
//! Names, descriptions, and schemas are the externally visible contract
//! used by the calling agent to decide when to invoke each tool. The
//! catalog is built once at process start and never mutated.

use bridge_domain::tool::entities::{ToolCatalog, ToolDefinition, ToolParameter};

// Tool name constants
pub const GIT_UNDO: &str = "git_undo";
pub const GIT_REDO: &str = "git_redo";
pub const GIT_RECOMMIT: &str = "git_recommit";
pub const GIT_CHECK_DUP: &str = "git_check_dup";
pub const GIT_REMOVE_REDUNDANT_COMMITS: &str = "git_remove_redundant_commits";
pub const GIT_BRANCH_DIFF: &str = "git_branch_diff";
pub const GIT_FIND_FILE: &str = "git_find_file";
pub const GIT_DIFF_PATCH: &str = "git_diff_patch";
pub const GIT_EXTRACT_CONFLICT_FILES: &str = "git_extract_conflict_files";
pub const GIT_REMERGE_FROM_FILES: &str = "git_remerge_from_files";

// Documented defaults. A value equal to its default is omitted from the
// planned argv, relying on the external script sharing the same default.
pub const DEFAULT_REMOTE_BRANCH: &str = "origin/main";
pub const DEFAULT_ONTO_BRANCH: &str = "origin/main";
pub const DEFAULT_BRANCH1: &str = "HEAD";
pub const DEFAULT_BRANCH2: &str = "origin/main";

fn confirm_param() -> ToolParameter {
    ToolParameter::new(
        "confirm",
        "Skip confirmation prompt (default: false - will prompt user)",
        false,
    )
    .with_type("boolean")
    .with_default(false)
}

fn git_undo_definition() -> ToolDefinition {
    ToolDefinition::new(
        GIT_UNDO,
        "🔄 Safely undo the last commit while preserving changes in staging area. \
         Perfect for when you need to modify, split, or enhance your last commit. \
         Uses 'git reset --soft HEAD^' with safety checks and confirmations.\n\n\
         📋 USE WHEN: Need to modify last commit, split commit into multiple parts, \
         or add more changes to last commit. Safer than 'git reset --hard'.",
    )
    .with_parameter(confirm_param())
}

fn git_redo_definition() -> ToolDefinition {
    ToolDefinition::new(
        GIT_REDO,
        "↩️ Redo the most recently undone commit. Works by finding reset operations \
         in reflog and restoring the undone commit. Two modes available:\n\
         • Full restore: Cherry-picks original commit completely\n\
         • Message-only: Commits staged changes with original message\n\n\
         📋 USE WHEN: Want to restore an undone commit or reuse its commit message. \
         Perfect partner to git_undo for safe commit modifications.",
    )
    .with_parameter(
        ToolParameter::new(
            "message_only",
            "Only use original commit message, don't restore content",
            false,
        )
        .with_type("boolean")
        .with_default(false),
    )
    .with_parameter(confirm_param())
}

fn git_recommit_definition() -> ToolDefinition {
    ToolDefinition::new(
        GIT_RECOMMIT,
        "📝 Convenience alias for 'git_redo --message-only'. Commits currently \
         staged changes using the commit message from the most recently undone commit.\n\n\
         📋 USE WHEN: You've undone a commit, made additional changes, and want to \
         commit with the original message. Common workflow after git_undo.",
    )
    .with_parameter(confirm_param())
}

fn git_check_dup_definition() -> ToolDefinition {
    ToolDefinition::new(
        GIT_CHECK_DUP,
        "🔍 Find duplicate commits between branches based on content (patch-id), \
         not commit hash. Identifies commits that make identical code changes \
         but have different hashes due to cherry-picking, rebasing, etc.\n\n\
         📋 USE WHEN: Before rebasing, after cherry-picking, cleaning up branches, \
         or preparing pull requests to identify redundant commits that can be safely removed.",
    )
    .with_parameter(
        ToolParameter::new(
            "remote_branch",
            "Branch to compare against (default: origin/main)",
            false,
        )
        .with_default(DEFAULT_REMOTE_BRANCH),
    )
    .with_parameter(
        ToolParameter::new("quiet", "Output only essential data for parsing", false)
            .with_type("boolean")
            .with_default(false),
    )
}

fn git_remove_redundant_commits_definition() -> ToolDefinition {
    ToolDefinition::new(
        GIT_REMOVE_REDUNDANT_COMMITS,
        "🧹 Automatically remove redundant/duplicate commits and cleanly rebase \
         branch. Uses two-phase approach:\n\
         1. Removes content duplicates via rebase onto remote\n\
         2. Rebases cleaned commits onto target branch\n\n\
         ⚠️ Always creates timestamped backup branch for safety.\n\
         🔒 Dry-run by default - use --apply to execute.\n\n\
         📋 USE WHEN: Branch has redundant commits from cherry-picking/rebasing \
         and needs clean history before merging.",
    )
    .with_parameter(
        ToolParameter::new(
            "onto_branch",
            "Branch to rebase onto (default: origin/main)",
            false,
        )
        .with_default(DEFAULT_ONTO_BRANCH),
    )
    .with_parameter(
        ToolParameter::new(
            "apply",
            "Actually perform the cleanup (default: dry-run only)",
            false,
        )
        .with_type("boolean")
        .with_default(false),
    )
}

fn git_branch_diff_definition() -> ToolDefinition {
    ToolDefinition::new(
        GIT_BRANCH_DIFF,
        "📊 Visual comparison of commit logs between two branches. \
         Shows commits unique to each branch in side-by-side format. \
         Great for understanding branch divergence and planning merges.\n\n\
         📋 USE WHEN: Need to see what commits differ between branches, \
         understand branch history, or prepare for merges/rebases.",
    )
    .with_parameter(
        ToolParameter::new("branch1", "First branch to compare (default: HEAD)", false)
            .with_default(DEFAULT_BRANCH1),
    )
    .with_parameter(
        ToolParameter::new(
            "branch2",
            "Second branch to compare (default: origin/main)",
            false,
        )
        .with_default(DEFAULT_BRANCH2),
    )
}

fn git_find_file_definition() -> ToolDefinition {
    ToolDefinition::new(
        GIT_FIND_FILE,
        "🔎 Search for files matching a pattern across Git branches. \
         Useful for finding where specific files exist in different branches, \
         tracking file renames, or locating configuration files. \
         Pattern is treated as grep regex.\n\n\
         📋 USE WHEN: Need to find files across branches, track file history, \
         or locate configuration/build files in different branch contexts.",
    )
    .with_parameter(ToolParameter::new(
        "pattern",
        "File pattern or regex to search for (required)",
        true,
    ))
    .with_parameter(
        ToolParameter::new(
            "local",
            "Search local branches only (default: remote branches)",
            false,
        )
        .with_type("boolean")
        .with_default(false),
    )
}

fn git_diff_patch_definition() -> ToolDefinition {
    ToolDefinition::new(
        GIT_DIFF_PATCH,
        "↔️ Compare two commits for functional equivalence using patch-id. \
         Useful for checking if two commits are the same after a rebase or cherry-pick.\n\n\
         📋 USE WHEN: You need to verify if two different commits introduce the exact same code changes.",
    )
    .with_parameter(ToolParameter::new(
        "commit1",
        "The first commit to compare.",
        true,
    ))
    .with_parameter(ToolParameter::new(
        "commit2",
        "The second commit to compare.",
        true,
    ))
}

fn git_extract_conflict_files_definition() -> ToolDefinition {
    ToolDefinition::new(
        GIT_EXTRACT_CONFLICT_FILES,
        "🔄 Extract conflict files for manual editing during merge conflicts. \
         Creates temporary files containing 'ours', 'theirs', and 'base' versions \
         of a conflicted file. Returns file paths for manual editing.\n\n\
         📋 USE WHEN: Need to manually resolve complex merge conflicts by editing \
         individual versions before re-merging.",
    )
    .with_parameter(ToolParameter::new(
        "file",
        "Path to the conflicted file",
        true,
    ))
}

fn git_remerge_from_files_definition() -> ToolDefinition {
    ToolDefinition::new(
        GIT_REMERGE_FROM_FILES,
        "🔧 Re-merge using edited conflict files. Performs a fresh 3-way merge \
         using previously extracted and edited 'ours', 'theirs', and 'base' files. \
         Automatically shows diff and stages the result if merge is clean.\n\n\
         📋 USE WHEN: After editing extracted conflict files, need to apply the \
         changes back to the original conflicted file.",
    )
    .with_parameter(ToolParameter::new(
        "file",
        "Path to the original conflicted file",
        true,
    ))
    .with_parameter(ToolParameter::new(
        "ours_path",
        "Path to the edited 'ours' file",
        true,
    ))
    .with_parameter(ToolParameter::new(
        "base_path",
        "Path to the 'base' file",
        true,
    ))
    .with_parameter(ToolParameter::new(
        "theirs_path",
        "Path to the edited 'theirs' file",
        true,
    ))
}

/// Build the full bridge catalog
pub fn bridge_catalog() -> ToolCatalog {
    ToolCatalog::new()
        .register(git_undo_definition())
        .register(git_redo_definition())
        .register(git_recommit_definition())
        .register(git_check_dup_definition())
        .register(git_remove_redundant_commits_definition())
        .register(git_branch_diff_definition())
        .register(git_find_file_definition())
        .register(git_diff_patch_definition())
        .register(git_extract_conflict_files_definition())
        .register(git_remerge_from_files_definition())
}
