use serde::Serialize;

use crate::category::Category;

/// One uploaded file after classification. Lives for one batch request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedFile {
    pub filename: String,
    pub category: Category,
}

impl ClassifiedFile {
    pub fn new(filename: impl Into<String>, category: Category) -> Self {
        Self {
            filename: filename.into(),
            category,
        }
    }
}

/// Per-file reconciliation outcome. The three kinds are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    /// Category is required and this file is the first to provide it.
    Satisfied,
    /// Category is not in the checklist at all.
    Unexpected,
    /// Category is required but an earlier file already satisfied it.
    Surplus,
}

/// Aggregate batch status, serialized as the wire's `"ok"`/`"bad"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BatchStatus {
    #[serde(rename = "ok")]
    Pass,
    #[serde(rename = "bad")]
    Fail,
}

/// Verdict for a single file, in upload order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileVerdict {
    pub filename: String,
    pub category: Category,
    pub verdict: Verdict,
}

/// Result of reconciling one batch against one checklist.
///
/// `per_file` preserves upload order. `missing` lists required categories no
/// file satisfied, in checklist order. `status` is `Pass` iff every verdict
/// is `Satisfied` and `missing` is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchResult {
    pub per_file: Vec<FileVerdict>,
    pub missing: Vec<Category>,
    pub status: BatchStatus,
}
