#![forbid(unsafe_code)]

pub mod error;
pub mod ingest;
pub mod sessions;
pub mod shuffle;

pub use quiz_core::Clock;

pub use error::{IngestError, SessionError};
pub use ingest::{FormatRequest, IngestPipeline, TableFormat};
pub use sessions::{
    Advance, QuestionPhase, SessionKey, SessionLoopService, SessionProgress, SessionService,
};
