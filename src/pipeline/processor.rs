//! Batch processing orchestrator.
//!
//! One upload batch flows through here: checklist lookup, per-file text
//! extraction, one batched classification call, reconciliation, response
//! rendering. The pipeline either fully reconciles or fully fails — no
//! partial results leave this module.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::category::Category;
use crate::checklist::{Checklist, ChecklistStore};
use crate::recon::{reconcile, BatchResult, BatchStatus, ClassifiedFile, ReconError, Verdict};

use super::classify::Classifier;
use super::extraction::extract_text;
use super::PipelineError;

/// One file as received from the upload form.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Per-file entry of the upload response.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FileReport {
    /// Display label of the classified category.
    pub category: String,
    /// Localized verdict message shown next to the file.
    pub valid_type: String,
}

/// Wire shape of the batch validation response:
/// `{"files": {<filename>: {...}}, "status": "ok"|"bad"}`.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub files: BTreeMap<String, FileReport>,
    pub status: BatchStatus,
}

/// Run one upload batch against the checklist stored under `doctype`.
pub async fn process_batch(
    store: &ChecklistStore,
    classifier: &dyn Classifier,
    doctype: &str,
    files: Vec<UploadedFile>,
) -> Result<ValidationReport, PipelineError> {
    let checklist = store.lookup(doctype)?;
    tracing::info!(
        doctype,
        checklist = %checklist.name,
        files = files.len(),
        "processing upload batch"
    );

    // Extraction is independent per file, so it runs on parallel blocking
    // tasks. Results are reassembled in upload order: classification output
    // pairs back to filenames strictly by position.
    let mut filenames = Vec::with_capacity(files.len());
    let mut handles = Vec::with_capacity(files.len());
    for file in files {
        filenames.push(file.filename.clone());
        handles.push(tokio::task::spawn_blocking(move || {
            extract_text(&file.filename, &file.bytes)
        }));
    }

    let mut texts = Vec::with_capacity(handles.len());
    for handle in handles {
        let text = handle
            .await
            .map_err(|e| PipelineError::TaskJoin(e.to_string()))??;
        texts.push(text);
    }

    // One batched call for the whole upload.
    let labels = classifier.classify(&texts)?;
    if labels.len() != texts.len() {
        return Err(PipelineError::ClassifierMismatch {
            expected: texts.len(),
            got: labels.len(),
        });
    }

    let mut classified = Vec::with_capacity(labels.len());
    for (filename, label) in filenames.into_iter().zip(&labels) {
        let category: Category = label
            .parse()
            .map_err(|_| ReconError::UnmappedCategory(label.clone()))?;
        classified.push(ClassifiedFile::new(filename, category));
    }

    let result = reconcile(&checklist, &classified);
    tracing::info!(
        status = ?result.status,
        missing = result.missing.len(),
        "batch reconciled"
    );

    Ok(render_report(&checklist, &result))
}

/// Render a reconciliation result into the wire response shape.
pub fn render_report(checklist: &Checklist, result: &BatchResult) -> ValidationReport {
    let files = result
        .per_file
        .iter()
        .map(|fv| {
            let report = FileReport {
                category: fv.category.label().to_string(),
                valid_type: verdict_message(fv.verdict, checklist),
            };
            (fv.filename.clone(), report)
        })
        .collect();

    ValidationReport {
        files,
        status: result.status,
    }
}

fn verdict_message(verdict: Verdict, checklist: &Checklist) -> String {
    match verdict {
        Verdict::Satisfied => "Правильный документ".to_string(),
        Verdict::Surplus => "Лишний документ".to_string(),
        Verdict::Unexpected => {
            let expected: Vec<&str> = checklist.categories.iter().map(|c| c.label()).collect();
            format!(
                "Неожиданная категория, ожидалась категория из списка: [{}]",
                expected.join(", ")
            )
        }
    }
}
