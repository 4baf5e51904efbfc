//! Standard-layout CSV rendering of a question list.

use std::io;

use quiz_core::model::Question;

use crate::error::IngestError;

/// Fixed four-pair header the standard layout ships with; rows may carry
/// fewer or more pairs than the header suggests.
const STANDARD_HEADER: [&str; 9] = [
    "Pregunta",
    "Opción 1",
    "Correcta?",
    "Opción 2",
    "Correcta?",
    "Opción 3",
    "Correcta?",
    "Opción 4",
    "Correcta?",
];

/// Render questions in the standard layout: statement, then one
/// `(text, TRUE|FALSE)` pair per option.
///
/// Re-ingesting the output with the standard format preserves the multiset
/// of (statement, option text, correctness) tuples; ids and order do not
/// survive the trip.
///
/// # Errors
///
/// Returns `IngestError` if the CSV writer fails, which for an in-memory
/// buffer means a formatting-level bug rather than an I/O condition.
pub fn generate_standard_csv(questions: &[Question]) -> Result<String, IngestError> {
    let mut buf = Vec::new();
    {
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(&mut buf);

        writer.write_record(STANDARD_HEADER)?;
        for question in questions {
            let mut record = Vec::with_capacity(1 + question.options.len() * 2);
            record.push(question.statement.clone());
            for option in &question.options {
                record.push(option.text.clone());
                record.push(if option.is_correct { "TRUE" } else { "FALSE" }.to_string());
            }
            writer.write_record(&record)?;
        }
        writer.flush()?;
    }

    let text = String::from_utf8(buf).map_err(io::Error::other)?;
    Ok(text)
}
