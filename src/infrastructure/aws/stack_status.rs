//! CloudFormation stack status classification

/// Where a stack is in its lifecycle, as far as a deploy is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackState {
    /// Still transitioning; keep polling.
    InProgress,
    /// Settled in a successful state.
    Complete,
    /// Settled in any other state (rollbacks, failures, deletes).
    Failed,
}

impl StackState {
    pub fn classify(status: &str) -> Self {
        match status {
            "CREATE_COMPLETE" | "UPDATE_COMPLETE" | "IMPORT_COMPLETE" => Self::Complete,
            s if s.ends_with("_IN_PROGRESS") => Self::InProgress,
            _ => Self::Failed,
        }
    }
}

/// Stacks in this status cannot be updated and must be deleted first.
pub fn is_rollback_complete(status: &str) -> bool {
    status == "ROLLBACK_COMPLETE"
}

/// `DescribeStacks` reports a missing stack as a validation error.
pub fn is_missing_stack(code: Option<&str>, message: Option<&str>) -> bool {
    code == Some("ValidationError") && message.is_some_and(|m| m.contains("does not exist"))
}

/// `UpdateStack` with an unchanged template is an error on the wire but a no-op for us.
pub fn is_no_op_update(code: Option<&str>, message: Option<&str>) -> bool {
    code == Some("ValidationError")
        && message.is_some_and(|m| m.contains("No updates are to be performed"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completes_are_complete() {
        for status in ["CREATE_COMPLETE", "UPDATE_COMPLETE", "IMPORT_COMPLETE"] {
            assert_eq!(StackState::classify(status), StackState::Complete, "{status}");
        }
    }

    #[test]
    fn in_progress_statuses_keep_polling() {
        for status in [
            "CREATE_IN_PROGRESS",
            "UPDATE_IN_PROGRESS",
            "UPDATE_COMPLETE_CLEANUP_IN_PROGRESS",
            "ROLLBACK_IN_PROGRESS",
            "UPDATE_ROLLBACK_COMPLETE_CLEANUP_IN_PROGRESS",
        ] {
            assert_eq!(StackState::classify(status), StackState::InProgress, "{status}");
        }
    }

    #[test]
    fn rollbacks_and_failures_are_failed() {
        for status in [
            "CREATE_FAILED",
            "ROLLBACK_COMPLETE",
            "ROLLBACK_FAILED",
            "UPDATE_ROLLBACK_COMPLETE",
            "UPDATE_ROLLBACK_FAILED",
            "DELETE_COMPLETE",
        ] {
            assert_eq!(StackState::classify(status), StackState::Failed, "{status}");
        }
    }

    #[test]
    fn missing_stack_detection() {
        assert!(is_missing_stack(
            Some("ValidationError"),
            Some("Stack with id oam-ecs-environment does not exist")
        ));
        assert!(!is_missing_stack(Some("AccessDenied"), Some("does not exist")));
        assert!(!is_missing_stack(Some("ValidationError"), None));
    }

    #[test]
    fn no_op_update_detection() {
        assert!(is_no_op_update(
            Some("ValidationError"),
            Some("No updates are to be performed.")
        ));
        assert!(!is_no_op_update(Some("ValidationError"), Some("Template format error")));
        assert!(!is_no_op_update(None, Some("No updates are to be performed.")));
    }
}
