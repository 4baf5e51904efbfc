use tracing::info;

use quiz_core::Clock;
use quiz_core::model::{Question, SessionOutcome};

use super::service::SessionService;
use crate::error::SessionError;
use crate::shuffle;

/// Starts quiz attempts and replays over failed questions.
///
/// Every entry point reshuffles before starting, so each attempt presents
/// a different order. Restarting is calling `start_session` again with the
/// same list; abandoning an attempt is dropping its `SessionService`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionLoopService {
    clock: Clock,
}

impl SessionLoopService {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self { clock }
    }

    /// Start a fresh attempt over the given questions, in a new order.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if the list is empty.
    pub fn start_session(&self, mut questions: Vec<Question>) -> Result<SessionService, SessionError> {
        shuffle::shuffle(&mut questions);
        info!(questions = questions.len(), "session started");
        SessionService::new(questions, self.clock.now())
    }

    /// Start a fresh, independent attempt over the questions a previous
    /// attempt got wrong. Score and failure list start empty.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if the previous attempt had no
    /// failures.
    pub fn review_failed(&self, outcome: &SessionOutcome) -> Result<SessionService, SessionError> {
        self.start_session(outcome.failed_questions().to_vec())
    }
}
