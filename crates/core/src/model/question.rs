use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::model::ids::{IdAllocator, OptionId, QuestionId};

//
// ─── QUESTION TYPES ────────────────────────────────────────────────────────────
//

/// One selectable answer within a question.
///
/// `is_correct` carries no count invariant: a question may have zero, one or
/// many correct options, and scoring tolerates all three.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub id: OptionId,
    pub text: String,
    pub is_correct: bool,
}

/// A quiz question with its ordered option list.
///
/// Questions surviving ingestion always have a non-empty statement and at
/// least one option; the option order is display order and nothing more.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub statement: String,
    pub options: Vec<AnswerOption>,
}

impl Question {
    /// Ids of the options marked correct, the reference set for exact-set
    /// scoring.
    #[must_use]
    pub fn correct_option_ids(&self) -> HashSet<OptionId> {
        self.options
            .iter()
            .filter(|option| option.is_correct)
            .map(|option| option.id)
            .collect()
    }
}

//
// ─── DRAFTS ────────────────────────────────────────────────────────────────────
//

/// Option content before an identifier is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDraft {
    pub text: String,
    pub is_correct: bool,
}

/// A fully accumulated row extraction, ready to be frozen into a `Question`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub statement: String,
    pub options: Vec<OptionDraft>,
}

impl QuestionDraft {
    /// Freezes the draft into an immutable `Question` with fresh ids.
    #[must_use]
    pub fn assign_ids(self, ids: &mut IdAllocator) -> Question {
        let options = self
            .options
            .into_iter()
            .map(|draft| AnswerOption {
                id: ids.option_id(),
                text: draft.text,
                is_correct: draft.is_correct,
            })
            .collect();

        Question {
            id: ids.question_id(),
            statement: self.statement,
            options,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
