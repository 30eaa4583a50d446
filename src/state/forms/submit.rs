//! Submission flow state
//!
//! One long-lived machine per visible form: `Editing` accepts field
//! mutations, `Submitting` covers exactly one outstanding remote call.
//! Success and failure are transient and fold straight back into
//! `Editing`, leaving their outcome in the message list.

/// Message shown when a submit is rejected by local validation
pub const INVALID_DATA_MSG: &str = "Please enter valid data!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Editing,
    Submitting,
}

/// Submission state for the currently open form
#[derive(Debug, Default)]
pub struct Submission {
    phase: SubmitPhase,
    /// Messages surfaced to the user, local or remote, in arrival order
    pub messages: Vec<String>,
}

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    /// Try to enter `Submitting`. Returns false while a call is already
    /// outstanding; the caller must not issue a second request then.
    pub fn begin(&mut self) -> bool {
        if self.phase == SubmitPhase::Submitting {
            return false;
        }
        self.messages.clear();
        self.phase = SubmitPhase::Submitting;
        true
    }

    /// Local validation failed: stay in `Editing` with the generic message.
    pub fn reject_local(&mut self) {
        self.messages = vec![INVALID_DATA_MSG.to_string()];
    }

    /// The remote call succeeded; back to `Editing` with no messages.
    pub fn finish_success(&mut self) {
        self.phase = SubmitPhase::Editing;
        self.messages.clear();
    }

    /// The remote call failed; back to `Editing` showing its messages.
    pub fn finish_failure(&mut self, messages: Vec<String>) {
        self.phase = SubmitPhase::Editing;
        self.messages = messages;
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_begin_enters_submitting_once() {
        let mut submission = Submission::new();
        assert!(submission.begin());
        assert!(submission.is_submitting());
        // Re-entrant submit is refused while the call is outstanding
        assert!(!submission.begin());
    }

    #[test]
    fn test_begin_clears_stale_messages() {
        let mut submission = Submission::new();
        submission.reject_local();
        assert_eq!(submission.messages, vec![INVALID_DATA_MSG.to_string()]);
        assert!(submission.begin());
        assert!(submission.messages.is_empty());
    }

    #[test]
    fn test_local_rejection_stays_editing() {
        let mut submission = Submission::new();
        submission.reject_local();
        assert!(!submission.is_submitting());
        assert_eq!(submission.messages, vec![INVALID_DATA_MSG.to_string()]);
    }

    #[test]
    fn test_success_folds_back_into_editing() {
        let mut submission = Submission::new();
        submission.begin();
        submission.finish_success();
        assert!(!submission.is_submitting());
        assert!(submission.messages.is_empty());
        // The machine is reusable for the next submit
        assert!(submission.begin());
    }

    #[test]
    fn test_failure_reports_messages_in_order() {
        let mut submission = Submission::new();
        submission.begin();
        submission.finish_failure(vec!["already taken".into(), "too short".into()]);
        assert!(!submission.is_submitting());
        assert_eq!(
            submission.messages,
            vec!["already taken".to_string(), "too short".to_string()]
        );
    }
}
