//! Checklist reconciliation engine.
//!
//! Pure engine module: receives a checklist and the classified files of one
//! upload batch, returns per-file verdicts and an aggregate status. No IO,
//! no shared state — running it twice on the same input yields the same
//! result, which is what makes the verdicts auditable.

pub mod engine;
pub mod types;

pub use engine::reconcile;
pub use types::{BatchResult, BatchStatus, ClassifiedFile, FileVerdict, Verdict};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReconError {
    /// The classifier emitted a label with no entry in the category table.
    /// A corrupt classification must fail the whole batch rather than
    /// produce a misleading pass.
    #[error("classifier produced an unmapped category: {0}")]
    UnmappedCategory(String),
}
