//! The dispatch use case — one named call in, exactly one envelope out.
//!
//! [`ToolBridge`] owns the static catalog and the two execution ports.
//! For each call it looks up the definition, validates the arguments,
//! resolves the external script, plans the command, runs it, and
//! classifies the outcome. Every failure mode (unknown tool, validation
//! error, missing script, spawn failure, non-zero exit, malformed
//! structured output) is folded into an error envelope; nothing is ever
//! raised past this boundary and no process is spawned for a call that
//! fails before planning.
//!
//! Handlers share no mutable state, so independent calls may run
//! concurrently on separate tasks.

use crate::catalog::{self, DEFAULT_BRANCH1, DEFAULT_BRANCH2, bridge_catalog};
use crate::ports::call_logger::{CallEvent, CallLogger, NoCallLogger};
use crate::ports::process_runner::ProcessRunnerPort;
use crate::ports::script_locator::ScriptLocatorPort;
use crate::use_cases::plan;
use bridge_domain::core::error::BridgeError;
use bridge_domain::exec::classifier::{classify_outcome, failure_detail, parse_conflict_paths};
use bridge_domain::tool::entities::{ToolCall, ToolCatalog, ToolDefinition};
use bridge_domain::tool::traits::{DefaultToolValidator, ToolValidator};
use bridge_domain::tool::value_objects::ResultEnvelope;
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn};

// External script filenames, resolved against the install root per call
const UNDO_SCRIPT: &str = "git-undo";
const REDO_SCRIPT: &str = "git-redo";
const RECOMMIT_SCRIPT: &str = "git-recommit";
const CHECK_DUP_SCRIPT: &str = "git-check-dup";
const REMOVE_REDUNDANT_SCRIPT: &str = "git-remove-redundant-commits";
const FIND_FILE_SCRIPT: &str = "git-find_file";
const DIFF_PATCH_SCRIPT: &str = "git-diff-patch";
const DIFF_123_SCRIPT: &str = "git-diff-123";

/// The bridge dispatcher: static catalog + per-call handler composition
pub struct ToolBridge {
    catalog: ToolCatalog,
    locator: Arc<dyn ScriptLocatorPort>,
    runner: Arc<dyn ProcessRunnerPort>,
    logger: Arc<dyn CallLogger>,
    validator: DefaultToolValidator,
}

impl ToolBridge {
    pub fn new(locator: Arc<dyn ScriptLocatorPort>, runner: Arc<dyn ProcessRunnerPort>) -> Self {
        Self {
            catalog: bridge_catalog(),
            locator,
            runner,
            logger: Arc::new(NoCallLogger),
            validator: DefaultToolValidator,
        }
    }

    /// Attach a call-audit logger
    pub fn with_logger(mut self, logger: Arc<dyn CallLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn catalog(&self) -> &ToolCatalog {
        &self.catalog
    }

    /// The full static catalog, in declaration order
    pub fn list_tools(&self) -> Vec<ToolDefinition> {
        self.catalog.all().cloned().collect()
    }

    /// Dispatch one tool call and produce its envelope.
    pub async fn call(&self, call: &ToolCall) -> ResultEnvelope {
        let name = call.tool_name.as_str();
        info!("Dispatching tool: {}", name);
        self.logger.log(CallEvent::new(
            "tool_call",
            json!({ "tool": name, "arguments": call.arguments }),
        ));

        let envelope = self.dispatch(call).await;

        if envelope.is_error() {
            debug!("Tool {} returned an error envelope", name);
        }
        self.logger.log(CallEvent::new(
            "tool_result",
            json!({
                "tool": name,
                "is_error": envelope.is_error,
                "bytes": envelope.text.len(),
            }),
        ));
        envelope
    }

    async fn dispatch(&self, call: &ToolCall) -> ResultEnvelope {
        let Some(definition) = self.catalog.get(&call.tool_name) else {
            warn!("Unknown tool requested: {}", call.tool_name);
            return ResultEnvelope::error(
                BridgeError::UnknownTool(call.tool_name.clone()).to_string(),
            );
        };

        if let Err(message) = self.validator.validate(call, definition) {
            return ResultEnvelope::error(BridgeError::Validation(message).to_string());
        }

        match call.tool_name.as_str() {
            catalog::GIT_UNDO => self.handle_undo(call).await,
            catalog::GIT_REDO => self.handle_redo(call).await,
            catalog::GIT_RECOMMIT => self.handle_recommit(call).await,
            catalog::GIT_CHECK_DUP => self.handle_check_dup(call).await,
            catalog::GIT_REMOVE_REDUNDANT_COMMITS => self.handle_remove_redundant(call).await,
            catalog::GIT_BRANCH_DIFF => self.handle_branch_diff(call).await,
            catalog::GIT_FIND_FILE => self.handle_find_file(call).await,
            catalog::GIT_DIFF_PATCH => self.handle_diff_patch(call).await,
            catalog::GIT_EXTRACT_CONFLICT_FILES => self.handle_extract_conflict(call).await,
            catalog::GIT_REMERGE_FROM_FILES => self.handle_remerge(call).await,
            // Catalog membership was checked above; a registered tool
            // without a handler arm is a wiring bug.
            other => ResultEnvelope::error(format!("Tool '{}' is not implemented", other)),
        }
    }

    /// Resolve a script or short-circuit with an error envelope naming
    /// the expected path.
    fn resolve(&self, script_name: &str) -> Result<PathBuf, ResultEnvelope> {
        self.locator
            .resolve(script_name)
            .map_err(|err| ResultEnvelope::error(err.to_string()))
    }

    async fn handle_undo(&self, call: &ToolCall) -> ResultEnvelope {
        let script = match self.resolve(UNDO_SCRIPT) {
            Ok(path) => path,
            Err(envelope) => return envelope,
        };
        let spec = plan::undo_plan(&script, call.get_bool("confirm"));
        let outcome = self.runner.run(&spec).await;
        classify_outcome(
            &outcome,
            "✅ Git undo completed successfully:",
            "❌ Git undo failed",
        )
    }

    async fn handle_redo(&self, call: &ToolCall) -> ResultEnvelope {
        let script = match self.resolve(REDO_SCRIPT) {
            Ok(path) => path,
            Err(envelope) => return envelope,
        };
        let spec = plan::redo_plan(
            &script,
            call.get_bool("message_only"),
            call.get_bool("confirm"),
        );
        let outcome = self.runner.run(&spec).await;
        classify_outcome(
            &outcome,
            "✅ Git redo completed successfully:",
            "❌ Git redo failed",
        )
    }

    async fn handle_recommit(&self, call: &ToolCall) -> ResultEnvelope {
        let script = match self.resolve(RECOMMIT_SCRIPT) {
            Ok(path) => path,
            Err(envelope) => return envelope,
        };
        let spec = plan::recommit_plan(&script, call.get_bool("confirm"));
        let outcome = self.runner.run(&spec).await;
        classify_outcome(
            &outcome,
            "✅ Git recommit completed successfully:",
            "❌ Git recommit failed",
        )
    }

    async fn handle_check_dup(&self, call: &ToolCall) -> ResultEnvelope {
        let script = match self.resolve(CHECK_DUP_SCRIPT) {
            Ok(path) => path,
            Err(envelope) => return envelope,
        };
        let remote_branch = call.get_string_or("remote_branch", catalog::DEFAULT_REMOTE_BRANCH);
        let spec = plan::check_dup_plan(&script, call.get_bool("quiet"), remote_branch);
        let outcome = self.runner.run(&spec).await;

        if outcome.is_success() {
            let output = outcome.stdout_text();
            if output.trim().is_empty() {
                ResultEnvelope::success("✅ No duplicate commits detected.")
            } else {
                ResultEnvelope::success(format!("🔍 Duplicate commits found:\n\n{}", output))
            }
        } else {
            ResultEnvelope::error(format!(
                "❌ Git check-dup failed:\n{}",
                failure_detail(&outcome)
            ))
        }
    }

    async fn handle_remove_redundant(&self, call: &ToolCall) -> ResultEnvelope {
        let script = match self.resolve(REMOVE_REDUNDANT_SCRIPT) {
            Ok(path) => path,
            Err(envelope) => return envelope,
        };
        let apply = call.get_bool("apply");
        let onto_branch = call.get_string_or("onto_branch", catalog::DEFAULT_ONTO_BRANCH);
        let spec = plan::remove_redundant_plan(&script, onto_branch, apply);
        let outcome = self.runner.run(&spec).await;

        let mode = if apply {
            "🔧 Applied changes"
        } else {
            "🔍 Dry-run analysis"
        };
        classify_outcome(
            &outcome,
            &format!("✅ Git remove redundant commits - {}:", mode),
            "❌ Git remove redundant commits failed",
        )
    }

    async fn handle_branch_diff(&self, call: &ToolCall) -> ResultEnvelope {
        let branch1 = call.get_string_or("branch1", DEFAULT_BRANCH1);
        let branch2 = call.get_string_or("branch2", DEFAULT_BRANCH2);

        let outcome1 = self.runner.run(&plan::branch_log_plan(branch1)).await;
        let outcome2 = self.runner.run(&plan::branch_log_plan(branch2)).await;

        if outcome1.is_success() && outcome2.is_success() {
            ResultEnvelope::success(format!(
                "📊 Branch comparison ({branch1} vs {branch2}):\n\n\
                 === {branch1} commits ===\n{}\n\
                 === {branch2} commits ===\n{}\n\
                 💡 Tip: Use 'git log --oneline --graph {branch1} {branch2}' for visual graph",
                outcome1.stdout_text(),
                outcome2.stdout_text(),
            ))
        } else {
            // Whichever listing produced stderr wins, first branch first
            let stderr1 = outcome1.stderr_text();
            let detail = if stderr1.is_empty() {
                outcome2.stderr_text()
            } else {
                stderr1
            };
            ResultEnvelope::error(format!("❌ Git branch diff failed:\n{}", detail))
        }
    }

    async fn handle_find_file(&self, call: &ToolCall) -> ResultEnvelope {
        // Required args were validated by the dispatcher
        let pattern = call.get_string("pattern").unwrap_or_default();
        let script = match self.resolve(FIND_FILE_SCRIPT) {
            Ok(path) => path,
            Err(envelope) => return envelope,
        };
        let spec = plan::find_file_plan(&script, pattern, call.get_bool("local"));
        let outcome = self.runner.run(&spec).await;
        classify_outcome(
            &outcome,
            "🔎 Git find file results:",
            "❌ Git find file failed",
        )
    }

    async fn handle_diff_patch(&self, call: &ToolCall) -> ResultEnvelope {
        let commit1 = call.get_string("commit1").unwrap_or_default();
        let commit2 = call.get_string("commit2").unwrap_or_default();
        let script = match self.resolve(DIFF_PATCH_SCRIPT) {
            Ok(path) => path,
            Err(envelope) => return envelope,
        };
        let spec = plan::diff_patch_plan(&script, commit1, commit2);
        let outcome = self.runner.run(&spec).await;
        classify_outcome(
            &outcome,
            "✅ Patch comparison results:",
            "❌ Git diff-patch failed",
        )
    }

    async fn handle_extract_conflict(&self, call: &ToolCall) -> ResultEnvelope {
        let file = call.get_string("file").unwrap_or_default();
        let script = match self.resolve(DIFF_123_SCRIPT) {
            Ok(path) => path,
            Err(envelope) => return envelope,
        };
        let spec = plan::extract_conflict_plan(&script, file);
        let outcome = self.runner.run(&spec).await;

        if !outcome.is_success() {
            return ResultEnvelope::error(format!(
                "❌ Git extract conflict files failed:\n{}",
                failure_detail(&outcome)
            ));
        }

        match parse_conflict_paths(&outcome.stdout_text()) {
            Ok(set) => ResultEnvelope::success(format!(
                "🔄 Conflict files extracted successfully:\n\n\
                 📁 Temp directory: {}\n\
                 📄 Ours file: {}\n\
                 📄 Base file: {}\n\
                 📄 Theirs file: {}\n\n\
                 💡 Edit the 'ours' and/or 'theirs' files as needed, \
                 then use git_remerge_from_files to apply changes.",
                set.temp_dir, set.ours, set.base, set.theirs,
            )),
            Err(raw) => ResultEnvelope::error(BridgeError::UnexpectedOutput(raw).to_string()),
        }
    }

    async fn handle_remerge(&self, call: &ToolCall) -> ResultEnvelope {
        let file = call.get_string("file").unwrap_or_default();
        let ours_path = call.get_string("ours_path").unwrap_or_default();
        let base_path = call.get_string("base_path").unwrap_or_default();
        let theirs_path = call.get_string("theirs_path").unwrap_or_default();
        let script = match self.resolve(DIFF_123_SCRIPT) {
            Ok(path) => path,
            Err(envelope) => return envelope,
        };
        let spec = plan::remerge_plan(&script, file, ours_path, base_path, theirs_path);
        let outcome = self.runner.run(&spec).await;
        classify_outcome(
            &outcome,
            "🔧 Re-merge completed successfully:",
            "❌ Git remerge from files failed",
        )
    }
}
