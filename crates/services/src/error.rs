//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::SessionOutcomeError;

/// Errors emitted by the ingestion pipeline.
///
/// Both variants mean the byte source itself was unusable; the attempt is
/// fatal and yields no partial result. Malformed individual rows are not
/// errors: they are dropped and ingestion continues.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IngestError {
    #[error("could not read quiz source")]
    Read(#[from] std::io::Error),
    #[error("could not tokenize quiz source")]
    Tokenize(#[from] csv::Error),
}

/// Errors emitted by session services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no questions available for session")]
    Empty,
    #[error(transparent)]
    Outcome(#[from] SessionOutcomeError),
}
