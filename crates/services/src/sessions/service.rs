use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::fmt;

use quiz_core::model::{OptionId, Question, SessionOutcome};

use super::progress::SessionProgress;
use crate::error::SessionError;

//
// ─── PHASES ────────────────────────────────────────────────────────────────────
//

/// Phase of the active question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionPhase {
    /// Options may be toggled; nothing is scored yet.
    Selecting,
    /// The selection is frozen and scored; `correct` records the verdict.
    Validated { correct: bool },
}

/// What an `advance` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the next question, selection reset.
    Moved,
    /// The attempt completed; the outcome is now available.
    Finished,
    /// The call was not legal in the current phase and changed nothing.
    Ignored,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory quiz attempt over an ordered question list.
///
/// Owns all per-attempt state; created when a session starts and discarded
/// when it finishes or is abandoned. Out-of-order calls from the UI-event
/// caller are no-ops, never errors.
pub struct SessionService {
    questions: Vec<Question>,
    current: usize,
    selection: HashSet<OptionId>,
    phase: QuestionPhase,
    score: u32,
    failed: Vec<Question>,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
    outcome: Option<SessionOutcome>,
}

impl SessionService {
    /// Create a session over the given questions, starting at the first.
    ///
    /// `started_at` should come from the services layer clock to keep time
    /// deterministic.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if no questions are provided.
    pub fn new(questions: Vec<Question>, started_at: DateTime<Utc>) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::Empty);
        }

        Ok(Self {
            questions,
            current: 0,
            selection: HashSet::new(),
            phase: QuestionPhase::Selecting,
            score: 0,
            failed: Vec::new(),
            started_at,
            completed_at: None,
            outcome: None,
        })
    }

    #[must_use]
    pub fn phase(&self) -> QuestionPhase {
        self.phase
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Total number of questions in this attempt.
    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Number of questions validated so far.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.score as usize + self.failed.len()
    }

    /// Option ids currently selected for the active question.
    #[must_use]
    pub fn selection(&self) -> &HashSet<OptionId> {
        &self.selection
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    /// The completion signal, available once per attempt after the final
    /// `advance`.
    #[must_use]
    pub fn outcome(&self) -> Option<&SessionOutcome> {
        self.outcome.as_ref()
    }

    /// Returns a snapshot of the attempt's progress.
    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            total: self.total_questions(),
            answered: self.answered_count(),
            remaining: self.total_questions().saturating_sub(self.answered_count()),
            score: self.score,
            is_complete: self.is_complete(),
        }
    }

    /// Flip membership of `id` in the selection set.
    ///
    /// Legal only while `Selecting`; ignored once the question is validated,
    /// after completion, and for ids the current question does not carry.
    /// Returns whether the selection changed.
    pub fn toggle_option(&mut self, id: OptionId) -> bool {
        if self.phase != QuestionPhase::Selecting || self.is_complete() {
            return false;
        }
        let Some(question) = self.current_question() else {
            return false;
        };
        if !question.options.iter().any(|option| option.id == id) {
            return false;
        }

        if !self.selection.insert(id) {
            self.selection.remove(&id);
        }
        true
    }

    /// Score the current selection and freeze it.
    ///
    /// Correct means exact set equality: the selected ids must be precisely
    /// the ids marked correct, no more and no fewer. On a miss the current
    /// question is appended to the failed accumulator, keeping its shuffled
    /// option order, at most once per attempt of that question.
    ///
    /// Returns `Some(correct)` when a validation happened, `None` for a
    /// no-op (already validated, empty selection, or completed attempt).
    pub fn confirm(&mut self) -> Option<bool> {
        if self.phase != QuestionPhase::Selecting || self.selection.is_empty() {
            return None;
        }
        let question = self.questions.get(self.current)?;

        let correct = self.selection == question.correct_option_ids();
        if correct {
            self.score += 1;
        } else {
            self.failed.push(question.clone());
        }
        self.phase = QuestionPhase::Validated { correct };
        Some(correct)
    }

    /// Move past a validated question.
    ///
    /// On a non-final question: step to the next index and reset to an
    /// empty-selection `Selecting`. On the final question: record
    /// completion and build the outcome, exactly once. Calls outside
    /// `Validated` return `Advance::Ignored`.
    ///
    /// `now` should come from the services layer clock.
    ///
    /// # Errors
    ///
    /// Propagates outcome-invariant violations as `SessionError::Outcome`;
    /// with the counts this machine maintains they do not occur.
    pub fn advance(&mut self, now: DateTime<Utc>) -> Result<Advance, SessionError> {
        if !matches!(self.phase, QuestionPhase::Validated { .. }) || self.is_complete() {
            return Ok(Advance::Ignored);
        }

        if self.current + 1 < self.questions.len() {
            self.current += 1;
            self.selection.clear();
            self.phase = QuestionPhase::Selecting;
            return Ok(Advance::Moved);
        }

        let outcome = SessionOutcome::from_counts(
            self.score,
            self.questions.len(),
            self.failed.clone(),
            self.started_at,
            now,
        )?;
        self.completed_at = Some(now);
        self.outcome = Some(outcome);
        Ok(Advance::Finished)
    }
}

impl fmt::Debug for SessionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionService")
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("phase", &self.phase)
            .field("score", &self.score)
            .field("failed_len", &self.failed.len())
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
