//! Keyboard input as a thin adapter over the session state machine.
//!
//! Each key maps onto the same `SessionService` transitions pointer input
//! uses; no transition logic lives here.

use chrono::{DateTime, Utc};

use super::service::{Advance, QuestionPhase, SessionService};
use crate::error::SessionError;

/// Keys the quiz surface reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKey {
    /// `1` through `9`, toggling the option at that 1-based position.
    Digit(u8),
    Enter,
    Space,
    ArrowRight,
}

/// Route one keypress into the session.
///
/// Returns whether the key was consumed, in which case the caller should
/// suppress the default behavior (notably Space scrolling the page). Every
/// key is ignored while focus sits in a text-input-like control.
///
/// # Errors
///
/// Propagates `SessionError` from the underlying `advance`.
pub fn handle_key(
    session: &mut SessionService,
    key: SessionKey,
    in_text_input: bool,
    now: DateTime<Utc>,
) -> Result<bool, SessionError> {
    if in_text_input {
        return Ok(false);
    }

    match key {
        SessionKey::Digit(position) => Ok(toggle_at_position(session, position)),
        SessionKey::Enter | SessionKey::Space => {
            match session.phase() {
                QuestionPhase::Selecting => {
                    session.confirm();
                }
                QuestionPhase::Validated { .. } => {
                    session.advance(now)?;
                }
            }
            // Always swallowed, so Space never scrolls mid-quiz.
            Ok(true)
        }
        SessionKey::ArrowRight => {
            if matches!(session.phase(), QuestionPhase::Validated { .. }) {
                Ok(session.advance(now)? != Advance::Ignored)
            } else {
                Ok(false)
            }
        }
    }
}

/// Toggle the option at a 1-based position, if it exists and selection is
/// still open.
fn toggle_at_position(session: &mut SessionService, position: u8) -> bool {
    if session.phase() != QuestionPhase::Selecting || !(1..=9).contains(&position) {
        return false;
    }
    let Some(id) = session
        .current_question()
        .and_then(|question| question.options.get(usize::from(position) - 1))
        .map(|option| option.id)
    else {
        return false;
    };
    session.toggle_option(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{IdAllocator, OptionDraft, Question, QuestionDraft};
    use quiz_core::time::fixed_now;

    fn build_session() -> SessionService {
        let mut ids = IdAllocator::new();
        let question: Question = QuestionDraft {
            statement: "Q1?".to_string(),
            options: vec![
                OptionDraft {
                    text: "right".to_string(),
                    is_correct: true,
                },
                OptionDraft {
                    text: "wrong".to_string(),
                    is_correct: false,
                },
            ],
        }
        .assign_ids(&mut ids);
        SessionService::new(vec![question], fixed_now()).unwrap()
    }

    #[test]
    fn digits_toggle_by_position() {
        let mut session = build_session();

        assert!(handle_key(&mut session, SessionKey::Digit(1), false, fixed_now()).unwrap());
        assert_eq!(session.selection().len(), 1);

        // Same digit again deselects.
        assert!(handle_key(&mut session, SessionKey::Digit(1), false, fixed_now()).unwrap());
        assert!(session.selection().is_empty());
    }

    #[test]
    fn out_of_range_digits_are_not_consumed() {
        let mut session = build_session();
        assert!(!handle_key(&mut session, SessionKey::Digit(3), false, fixed_now()).unwrap());
        assert!(!handle_key(&mut session, SessionKey::Digit(0), false, fixed_now()).unwrap());
    }

    #[test]
    fn enter_confirms_then_advances() {
        let mut session = build_session();

        handle_key(&mut session, SessionKey::Digit(1), false, fixed_now()).unwrap();
        assert!(handle_key(&mut session, SessionKey::Enter, false, fixed_now()).unwrap());
        assert_eq!(session.phase(), QuestionPhase::Validated { correct: true });

        assert!(handle_key(&mut session, SessionKey::Enter, false, fixed_now()).unwrap());
        assert!(session.is_complete());
    }

    #[test]
    fn space_is_consumed_even_when_confirm_is_not_possible() {
        let mut session = build_session();

        // Nothing selected: no validation happens, but the key is still
        // swallowed to keep the page from scrolling.
        assert!(handle_key(&mut session, SessionKey::Space, false, fixed_now()).unwrap());
        assert_eq!(session.phase(), QuestionPhase::Selecting);
    }

    #[test]
    fn arrow_right_only_advances_after_validation() {
        let mut session = build_session();

        assert!(!handle_key(&mut session, SessionKey::ArrowRight, false, fixed_now()).unwrap());

        handle_key(&mut session, SessionKey::Digit(1), false, fixed_now()).unwrap();
        handle_key(&mut session, SessionKey::Enter, false, fixed_now()).unwrap();
        assert!(handle_key(&mut session, SessionKey::ArrowRight, false, fixed_now()).unwrap());
        assert!(session.is_complete());
    }

    #[test]
    fn keys_are_ignored_inside_text_inputs() {
        let mut session = build_session();

        assert!(!handle_key(&mut session, SessionKey::Digit(1), true, fixed_now()).unwrap());
        assert!(!handle_key(&mut session, SessionKey::Enter, true, fixed_now()).unwrap());
        assert!(session.selection().is_empty());
        assert_eq!(session.phase(), QuestionPhase::Selecting);
    }

    #[test]
    fn digits_are_frozen_after_validation() {
        let mut session = build_session();

        handle_key(&mut session, SessionKey::Digit(1), false, fixed_now()).unwrap();
        handle_key(&mut session, SessionKey::Enter, false, fixed_now()).unwrap();
        assert!(!handle_key(&mut session, SessionKey::Digit(2), false, fixed_now()).unwrap());
    }
}
