//! Upload batch pipeline: extract → classify → reconcile → report.

pub mod classify;
pub mod extraction;
pub mod processor;

pub use classify::{Classifier, ClassifyError, KeywordClassifier};
pub use extraction::ExtractionError;
pub use processor::{process_batch, render_report, UploadedFile, ValidationReport};

use thiserror::Error;

use crate::checklist::ChecklistError;
use crate::recon::ReconError;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Checklist(#[from] ChecklistError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    Classify(#[from] ClassifyError),

    #[error(transparent)]
    Recon(#[from] ReconError),

    /// The classifier broke its positional contract. Pairing labels back to
    /// filenames would be guesswork, so the whole batch fails.
    #[error("classifier returned {got} labels for {expected} documents")]
    ClassifierMismatch { expected: usize, got: usize },

    #[error("extraction task failed: {0}")]
    TaskJoin(String),
}
