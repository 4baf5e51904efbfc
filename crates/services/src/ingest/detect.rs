//! Classification of an unlabeled table into one of the three row layouts.

use serde::{Deserialize, Serialize};

use super::extract::is_truthy;

/// The row layout a table was classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableFormat {
    /// statement, option, correctness, option, correctness, …
    Standard,
    /// statement, four option columns, then their four correctness columns.
    Legacy,
    /// statement, the correct option, then incorrect options.
    Simple,
}

/// Caller-requested layout; `Auto` asks the detector to classify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatRequest {
    Standard,
    Legacy,
    Simple,
    #[default]
    Auto,
}

// Header markers, checked against the lower-cased space-joined header row.
// Legacy runs first: its digit-fused markers would otherwise be shadowed by
// the standard family.
const LEGACY_MARKERS: &[&str] = &[
    "correct1",
    "correct 1",
    "correcta1",
    "correcta 1",
    "answer1",
    "answer 1",
    "respuesta1",
    "respuesta 1",
];

const STANDARD_MARKERS: &[&str] = &[
    "correct?",
    "correcta?",
    "option 1",
    "opcion 1",
    "opción 1",
];

const SIMPLE_MARKERS: &[&str] = &[
    "correct_answer",
    "correct answer",
    "respuesta correcta",
    "solution",
    "solucion",
    "solución",
];

const FALSY_TOKENS: &[&str] = &["false", "falso", "no", "f", "n", "0"];

/// A cell that reads as an explicit boolean, truthy or falsy.
fn looks_boolean(cell: &str) -> bool {
    let token = cell.trim().to_lowercase();
    is_truthy(&token) || FALSY_TOKENS.contains(&token.as_str())
}

/// Decide which layout the table uses.
///
/// Explicit requests pass through unchanged. `Auto` is a priority-ordered
/// heuristic (header keywords first: legacy, standard, simple; then the
/// shape of the first data row) and deliberately stays fuzzy: ambiguous
/// headers can misclassify, and the priority order is part of the contract
/// because changing it changes which real-world files are accepted.
#[must_use]
pub fn detect_format(rows: &[Vec<String>], requested: FormatRequest) -> TableFormat {
    match requested {
        FormatRequest::Standard => return TableFormat::Standard,
        FormatRequest::Legacy => return TableFormat::Legacy,
        FormatRequest::Simple => return TableFormat::Simple,
        FormatRequest::Auto => {}
    }

    let header = rows
        .first()
        .map(|cells| cells.join(" ").to_lowercase())
        .unwrap_or_default();

    if LEGACY_MARKERS.iter().any(|marker| header.contains(marker)) {
        return TableFormat::Legacy;
    }
    if STANDARD_MARKERS.iter().any(|marker| header.contains(marker)) {
        return TableFormat::Standard;
    }
    if SIMPLE_MARKERS.iter().any(|marker| header.contains(marker)) {
        return TableFormat::Simple;
    }

    // No marker matched: inspect the first data row's shape.
    let Some(row) = rows.get(1) else {
        return TableFormat::Standard;
    };

    if row.len() > 2 && looks_boolean(&row[2]) {
        TableFormat::Standard
    } else if row.len() > 5 && looks_boolean(&row[5]) {
        TableFormat::Legacy
    } else {
        TableFormat::Simple
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|cell| (*cell).to_string()).collect())
            .collect()
    }

    #[test]
    fn explicit_request_overrides_detection() {
        let rows = table(&[&["Question", "Correct_Answer", "Wrong"]]);
        assert_eq!(
            detect_format(&rows, FormatRequest::Legacy),
            TableFormat::Legacy
        );
    }

    #[test]
    fn legacy_header_wins_over_standard() {
        let rows = table(&[&[
            "Question", "Option1", "Option2", "Option3", "Option4", "Correct1", "Correct2",
            "Correct3", "Correct4",
        ]]);
        assert_eq!(
            detect_format(&rows, FormatRequest::Auto),
            TableFormat::Legacy
        );
    }

    #[test]
    fn spanish_standard_header_is_detected() {
        let rows = table(&[&["Pregunta", "Opción 1", "Correcta?", "Opción 2", "Correcta?"]]);
        assert_eq!(
            detect_format(&rows, FormatRequest::Auto),
            TableFormat::Standard
        );
    }

    #[test]
    fn simple_header_is_detected() {
        let rows = table(&[&["Pregunta", "Respuesta correcta", "Incorrecta"]]);
        assert_eq!(
            detect_format(&rows, FormatRequest::Auto),
            TableFormat::Simple
        );
    }

    #[test]
    fn unmarked_header_falls_back_to_row_shape_standard() {
        let rows = table(&[
            &["a", "b", "c", "d", "e"],
            &["Capital?", "Paris", "TRUE", "London", "FALSE"],
        ]);
        assert_eq!(
            detect_format(&rows, FormatRequest::Auto),
            TableFormat::Standard
        );
    }

    #[test]
    fn unmarked_header_falls_back_to_row_shape_legacy() {
        let rows = table(&[
            &["a", "b", "c", "d", "e", "f", "g", "h", "i"],
            &["Colors?", "Red", "Green", "Blue", "Yellow", "TRUE", "TRUE", "FALSE", "FALSE"],
        ]);
        assert_eq!(
            detect_format(&rows, FormatRequest::Auto),
            TableFormat::Legacy
        );
    }

    #[test]
    fn unmarked_header_without_booleans_is_simple() {
        let rows = table(&[
            &["a", "b", "c", "d"],
            &["Capital?", "Paris", "London", "Berlin"],
        ]);
        assert_eq!(
            detect_format(&rows, FormatRequest::Auto),
            TableFormat::Simple
        );
    }

    #[test]
    fn header_only_table_defaults_to_standard() {
        let rows = table(&[&["a", "b"]]);
        assert_eq!(
            detect_format(&rows, FormatRequest::Auto),
            TableFormat::Standard
        );
        assert_eq!(
            detect_format(&[], FormatRequest::Auto),
            TableFormat::Standard
        );
    }

    #[test]
    fn detection_is_deterministic() {
        let rows = table(&[
            &["quiz", "data"],
            &["Capital?", "Paris", "si", "London", "no"],
        ]);
        let first = detect_format(&rows, FormatRequest::Auto);
        for _ in 0..5 {
            assert_eq!(detect_format(&rows, FormatRequest::Auto), first);
        }
    }
}
