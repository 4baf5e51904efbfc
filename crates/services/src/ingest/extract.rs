//! Per-layout extraction of one raw row into a question draft.

use quiz_core::model::{OptionDraft, QuestionDraft};

use super::detect::TableFormat;
use super::normalize::normalize_cell;

/// Tokens accepted as "this option is correct", case-insensitive.
const TRUTHY_TOKENS: &[&str] = &["true", "verdadero", "yes", "si", "sí", "v", "t", "s", "1"];

/// Lax boolean reading of a correctness cell: anything outside the truthy
/// set, including empty or missing, is false.
pub(crate) fn is_truthy(cell: &str) -> bool {
    let token = cell.trim().to_lowercase();
    TRUTHY_TOKENS.contains(&token.as_str())
}

/// Extract one data row under the detected layout.
///
/// Returns `None` for rows the leniency policy drops: fewer than 2 cells,
/// an empty statement, or zero extractable options.
pub(crate) fn extract_row(format: TableFormat, row: &[String]) -> Option<QuestionDraft> {
    if row.len() < 2 {
        return None;
    }

    let statement = normalize_cell(row.first().map(String::as_str));
    if statement.is_empty() {
        return None;
    }

    let options = match format {
        TableFormat::Standard => standard_options(row),
        TableFormat::Legacy => legacy_options(row),
        TableFormat::Simple => simple_options(row),
    };
    if options.is_empty() {
        return None;
    }

    Some(QuestionDraft { statement, options })
}

/// Walk cells 1, 3, 5, … as (text, correctness) pairs. An empty text cell
/// is skipped, not terminal, since real-world exports leave ragged holes.
fn standard_options(row: &[String]) -> Vec<OptionDraft> {
    let mut options = Vec::new();
    for col in (1..row.len()).step_by(2) {
        let text = normalize_cell(row.get(col).map(String::as_str));
        if text.is_empty() {
            continue;
        }
        let flag = normalize_cell(row.get(col + 1).map(String::as_str));
        options.push(OptionDraft {
            text,
            is_correct: is_truthy(&flag),
        });
    }
    options
}

/// Exactly four candidate slots: texts at columns 1..=4, their flags at the
/// paired fixed columns 5..=8.
fn legacy_options(row: &[String]) -> Vec<OptionDraft> {
    (0..4)
        .filter_map(|slot| {
            let text = normalize_cell(row.get(1 + slot).map(String::as_str));
            if text.is_empty() {
                return None;
            }
            let flag = normalize_cell(row.get(5 + slot).map(String::as_str));
            Some(OptionDraft {
                text,
                is_correct: is_truthy(&flag),
            })
        })
        .collect()
}

/// Column 1 is the single correct option; every later non-empty column is
/// an incorrect one. No boolean column exists in this layout.
fn simple_options(row: &[String]) -> Vec<OptionDraft> {
    let mut options = Vec::new();

    let correct = normalize_cell(row.get(1).map(String::as_str));
    if !correct.is_empty() {
        options.push(OptionDraft {
            text: correct,
            is_correct: true,
        });
    }

    for cell in row.iter().skip(2) {
        let text = normalize_cell(Some(cell.as_str()));
        if !text.is_empty() {
            options.push(OptionDraft {
                text,
                is_correct: false,
            });
        }
    }

    options
}
