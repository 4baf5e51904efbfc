mod ids;
mod outcome;
mod question;

pub use ids::{IdAllocator, OptionId, QuestionId};
pub use outcome::{SessionOutcome, SessionOutcomeError};
pub use question::{AnswerOption, OptionDraft, Question, QuestionDraft};
