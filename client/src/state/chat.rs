//! Chat log and the single-flight submission state machine.
//!
//! DESIGN
//! ======
//! A chat surface issues at most one backend request at a time. The phase
//! moves `Idle -> Pending` on submit and back to `Idle` (or to `Error`) when
//! the request completes. Clearing the log bumps an epoch; a completion that
//! carries an older epoch belongs to a conversation that no longer exists and
//! is dropped.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use transcript::{Message, RagResult};

/// Where the chat surface is in its request cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ChatPhase {
    #[default]
    Idle,
    /// A request is in flight; new submissions are refused.
    Pending,
    /// The last request failed. Cleared by [`ChatState::acknowledge_error`].
    Error(String),
}

/// Ticket for an in-flight request, handed back to [`ChatState::complete`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    /// Text sent to the backend; may differ from what the log shows.
    pub prompt: String,
    epoch: u64,
}

#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<Message>,
    pub phase: ChatPhase,
    epoch: u64,
}

impl ChatState {
    pub fn is_pending(&self) -> bool {
        self.phase == ChatPhase::Pending
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            ChatPhase::Error(reason) => Some(reason.as_str()),
            _ => None,
        }
    }

    /// Append `display` as a user message and enter `Pending`.
    ///
    /// Returns `None` without touching the log unless the phase is `Idle` and
    /// `display` has visible text.
    pub fn begin_submit(&mut self, display: impl Into<String>, prompt: impl Into<String>) -> Option<Submission> {
        let display = display.into();
        if self.phase != ChatPhase::Idle || display.trim().is_empty() {
            return None;
        }
        self.messages.push(Message::user(display));
        self.phase = ChatPhase::Pending;
        Some(Submission {
            prompt: prompt.into(),
            epoch: self.epoch,
        })
    }

    /// Record the outcome of `submission`.
    ///
    /// Returns `false` when the log was cleared after the submission began; the
    /// outcome is discarded in that case.
    pub fn complete(&mut self, submission: &Submission, outcome: Result<RagResult, String>) -> bool {
        if submission.epoch != self.epoch {
            return false;
        }
        match outcome {
            Ok(result) => {
                self.messages.push(Message::assistant(result));
                self.phase = ChatPhase::Idle;
            }
            Err(reason) => {
                self.messages.push(Message::failure(&reason));
                self.phase = ChatPhase::Error(reason);
            }
        }
        true
    }

    pub fn acknowledge_error(&mut self) {
        if matches!(self.phase, ChatPhase::Error(_)) {
            self.phase = ChatPhase::Idle;
        }
    }

    /// Start a new conversation. Any in-flight request is orphaned.
    pub fn clear(&mut self) {
        self.messages = Vec::new();
        self.phase = ChatPhase::Idle;
        self.epoch += 1;
    }
}
