//! Tool domain traits
//!
//! Pure validation of tool calls against their catalog definitions.
//! Validation runs before any command is planned, so a failing call
//! never spawns a process.

use super::entities::{ToolCall, ToolDefinition};

/// Validator for tool calls
pub trait ToolValidator {
    /// Validate a tool call against its definition
    fn validate(&self, call: &ToolCall, definition: &ToolDefinition) -> Result<(), String>;
}

/// Default implementation of ToolValidator
///
/// Required string parameters must be present and non-empty; an empty
/// string is treated the same as a missing argument. When any required
/// parameter fails, the error names the tool's full required list, so a
/// multi-parameter tool reports one combined message no matter which
/// argument was dropped.
#[derive(Debug, Clone, Default)]
pub struct DefaultToolValidator;

impl ToolValidator for DefaultToolValidator {
    fn validate(&self, call: &ToolCall, definition: &ToolDefinition) -> Result<(), String> {
        let mut required = Vec::new();
        let mut any_missing = false;

        for param in &definition.parameters {
            if !param.required {
                continue;
            }
            required.push(param.name.as_str());

            let missing = match call.arguments.get(&param.name) {
                None => true,
                Some(value) => {
                    param.param_type == "string" && value.as_str().is_none_or(|s| s.is_empty())
                }
            };
            if missing {
                any_missing = true;
            }
        }

        if any_missing {
            Err(requirement_message(&required))
        } else {
            Ok(())
        }
    }
}

/// Build the missing-argument message for a tool's required list.
fn requirement_message(names: &[&str]) -> String {
    match names {
        [] => String::new(),
        [only] => format!("{} parameter is required", only),
        [first, second] => format!("{} and {} are required.", first, second),
        [rest @ .., last] => format!("{}, and {} are all required", rest.join(", "), last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::entities::ToolParameter;

    fn pattern_tool() -> ToolDefinition {
        ToolDefinition::new("git_find_file", "Search for files")
            .with_parameter(ToolParameter::new("pattern", "Search pattern", true))
            .with_parameter(
                ToolParameter::new("local", "Local branches only", false).with_type("boolean"),
            )
    }

    fn commits_tool() -> ToolDefinition {
        ToolDefinition::new("git_diff_patch", "Compare commits")
            .with_parameter(ToolParameter::new("commit1", "First commit", true))
            .with_parameter(ToolParameter::new("commit2", "Second commit", true))
    }

    fn remerge_tool() -> ToolDefinition {
        ToolDefinition::new("git_remerge_from_files", "Re-merge")
            .with_parameter(ToolParameter::new("file", "Conflicted file", true))
            .with_parameter(ToolParameter::new("ours_path", "Ours file", true))
            .with_parameter(ToolParameter::new("base_path", "Base file", true))
            .with_parameter(ToolParameter::new("theirs_path", "Theirs file", true))
    }

    #[test]
    fn test_validator_missing_required() {
        let validator = DefaultToolValidator;
        let call = ToolCall::new("git_find_file");

        let result = validator.validate(&call, &pattern_tool());
        assert_eq!(result.unwrap_err(), "pattern parameter is required");
    }

    #[test]
    fn test_validator_empty_required_string() {
        let validator = DefaultToolValidator;
        let call = ToolCall::new("git_find_file").with_arg("pattern", "");

        assert!(validator.validate(&call, &pattern_tool()).is_err());
    }

    #[test]
    fn test_validator_pair_reports_both_names() {
        // One present and one missing still yields the combined message.
        let validator = DefaultToolValidator;
        let call = ToolCall::new("git_diff_patch").with_arg("commit1", "abc123");

        let err = validator.validate(&call, &commits_tool()).unwrap_err();
        assert_eq!(err, "commit1 and commit2 are required.");
    }

    #[test]
    fn test_validator_four_way_list_message() {
        let validator = DefaultToolValidator;
        let call = ToolCall::new("git_remerge_from_files").with_arg("file", "src/lib.rs");

        let err = validator.validate(&call, &remerge_tool()).unwrap_err();
        assert_eq!(
            err,
            "file, ours_path, base_path, and theirs_path are all required"
        );
    }

    #[test]
    fn test_validator_valid_call() {
        let validator = DefaultToolValidator;
        let call = ToolCall::new("git_find_file")
            .with_arg("pattern", "Cargo.toml")
            .with_arg("local", true);

        assert!(validator.validate(&call, &pattern_tool()).is_ok());
    }

    #[test]
    fn test_validator_idempotent_on_same_call() {
        // Validation has no side effects: the same bad call fails the
        // same way every time.
        let validator = DefaultToolValidator;
        let call = ToolCall::new("git_find_file");

        let first = validator.validate(&call, &pattern_tool()).unwrap_err();
        let second = validator.validate(&call, &pattern_tool()).unwrap_err();
        assert_eq!(first, second);
    }
}
