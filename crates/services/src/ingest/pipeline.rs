//! Orchestration: raw text → rows → format decision → question list.

use std::io::Read;

use tracing::{debug, info};

use quiz_core::model::{IdAllocator, Question};

use super::detect::{FormatRequest, detect_format};
use super::extract::extract_row;
use crate::error::IngestError;
use crate::shuffle;

/// Turns loosely-structured tabular text into a canonical question list.
///
/// Owns the id allocator, so every question and option produced by one
/// pipeline carries a unique id.
#[derive(Debug, Default)]
pub struct IngestPipeline {
    ids: IdAllocator,
}

impl IngestPipeline {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingest pasted or pre-read text.
    ///
    /// The format decision is made once for the whole table. Rows the
    /// leniency policy rejects are dropped silently and ingestion
    /// continues; an input yielding zero questions is a valid empty
    /// result, not an error.
    ///
    /// # Errors
    ///
    /// Returns `IngestError::Tokenize` when the tabular tokenizer cannot
    /// parse the source. No partial result is produced.
    pub fn ingest_text(
        &mut self,
        text: &str,
        requested: FormatRequest,
    ) -> Result<Vec<Question>, IngestError> {
        let repaired = repair_loose_quotes(text);
        let rows = tokenize(&repaired)?;
        let format = detect_format(&rows, requested);
        debug!(?format, rows = rows.len(), "table classified");

        let mut questions = Vec::new();
        for (index, row) in rows.iter().enumerate().skip(1) {
            let Some(draft) = extract_row(format, row) else {
                debug!(row = index, "row dropped");
                continue;
            };
            let mut question = draft.assign_ids(&mut self.ids);
            shuffle::shuffle(&mut question.options);
            questions.push(question);
        }
        shuffle::shuffle(&mut questions);

        info!(questions = questions.len(), "ingestion complete");
        Ok(questions)
    }

    /// Ingest from a byte source, e.g. an opened file.
    ///
    /// # Errors
    ///
    /// Returns `IngestError::Read` when the source cannot be read as text,
    /// and `IngestError::Tokenize` when it cannot be parsed as a table.
    pub fn ingest_reader<R: Read>(
        &mut self,
        mut reader: R,
        requested: FormatRequest,
    ) -> Result<Vec<Question>, IngestError> {
        let mut raw = String::new();
        reader.read_to_string(&mut raw)?;
        self.ingest_text(&raw, requested)
    }
}

fn tokenize(text: &str) -> Result<Vec<Vec<String>>, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

/// Rewrite `,  "` to `,"` so a quoted cell survives loose exports that pad
/// a space before the opening quote. Only spaces and tabs are consumed;
/// a newline is a record boundary, never part of the artifact.
fn repair_loose_quotes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        out.push(ch);
        if ch != ',' {
            continue;
        }

        let mut pending = String::new();
        while let Some(&next) = chars.peek() {
            if next == ' ' || next == '\t' {
                pending.push(next);
                chars.next();
            } else {
                break;
            }
        }
        if chars.peek() != Some(&'"') {
            out.push_str(&pending);
        }
    }

    out
}
