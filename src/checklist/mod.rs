//! Checklist definitions and their file-backed store.
//!
//! A checklist names the set of document categories a complete submission
//! ("kit") must contain. Definitions are immutable once created and persist
//! across restarts in a JSON map on disk.

pub mod store;
pub mod types;

pub use store::ChecklistStore;
pub use types::Checklist;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChecklistError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("checklist store is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("checklist not found: {0}")]
    NotFound(String),

    // Display strings for the soft validation errors match what the
    // selection form shows to the user verbatim.
    #[error("Name {0} already exists!")]
    DuplicateName(String),

    #[error("No categories have been chosen!")]
    EmptyChecklist,

    #[error("'no_class' cannot be a required category")]
    SentinelRequired,

    #[error("store lock poisoned")]
    LockPoisoned,
}

impl ChecklistError {
    /// Soft validation errors are expected user-correctable conditions.
    /// They are reported in a 200-level response with an error payload
    /// rather than as transport failures.
    pub fn is_soft(&self) -> bool {
        matches!(
            self,
            Self::DuplicateName(_) | Self::EmptyChecklist | Self::SentinelRequired
        )
    }
}
