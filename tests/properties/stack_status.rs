//! Property tests for stack status classification.

use proptest::prelude::*;

use oam_ecs::infrastructure::aws::stack_status::StackState;

fn status_word() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Z]{1,10}(_[A-Z]{1,10}){0,3}").unwrap()
}

proptest! {
    /// PROPERTY: anything still `*_IN_PROGRESS` keeps the poller waiting.
    #[test]
    fn property_in_progress_keeps_polling(prefix in status_word()) {
        let status = format!("{prefix}_IN_PROGRESS");
        prop_assert_eq!(StackState::classify(&status), StackState::InProgress);
    }

    /// PROPERTY: classification is total; unknown statuses settle as failures.
    #[test]
    fn property_unknown_statuses_are_failures(status in status_word()) {
        prop_assume!(!status.ends_with("_IN_PROGRESS"));
        prop_assume!(!matches!(
            status.as_str(),
            "CREATE_COMPLETE" | "UPDATE_COMPLETE" | "IMPORT_COMPLETE"
        ));
        prop_assert_eq!(StackState::classify(&status), StackState::Failed);
    }
}
