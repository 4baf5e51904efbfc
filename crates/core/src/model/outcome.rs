use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::question::Question;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionOutcomeError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("session outcome requires at least one question")]
    NoQuestions,

    #[error("too many questions for a single session: {len}")]
    TooManyQuestions { len: usize },

    #[error("score ({score}) exceeds total ({total})")]
    ScoreExceedsTotal { score: u32, total: u32 },
}

/// Terminal report for one quiz attempt.
///
/// Emitted exactly once per attempt, when the session advances past its
/// last question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    score: u32,
    total: u32,
    failed_questions: Vec<Question>,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
}

impl SessionOutcome {
    /// Build an outcome, checking the completion-signal invariants.
    ///
    /// # Errors
    ///
    /// Returns `SessionOutcomeError::ScoreExceedsTotal` if the score is
    /// larger than the question count, `NoQuestions` for an empty attempt,
    /// and `InvalidTimeRange` if `completed_at` is before `started_at`.
    pub fn new(
        score: u32,
        total: u32,
        failed_questions: Vec<Question>,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Result<Self, SessionOutcomeError> {
        if completed_at < started_at {
            return Err(SessionOutcomeError::InvalidTimeRange);
        }
        if total == 0 {
            return Err(SessionOutcomeError::NoQuestions);
        }
        if score > total {
            return Err(SessionOutcomeError::ScoreExceedsTotal { score, total });
        }

        Ok(Self {
            score,
            total,
            failed_questions,
            started_at,
            completed_at,
        })
    }

    /// Build an outcome from a question count that has not been narrowed yet.
    ///
    /// # Errors
    ///
    /// Returns `SessionOutcomeError::TooManyQuestions` if the count cannot
    /// fit in `u32`, plus everything `new` rejects.
    pub fn from_counts(
        score: u32,
        total: usize,
        failed_questions: Vec<Question>,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Result<Self, SessionOutcomeError> {
        let total = u32::try_from(total)
            .map_err(|_| SessionOutcomeError::TooManyQuestions { len: total })?;
        Self::new(score, total, failed_questions, started_at, completed_at)
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Questions answered incorrectly, in the order they were missed.
    #[must_use]
    pub fn failed_questions(&self) -> &[Question] {
        &self.failed_questions
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failed_questions.is_empty()
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }
}
