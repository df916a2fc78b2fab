//! Document-kit checklist validation service.
//!
//! Accepts a batch of uploaded documents, extracts their text, classifies
//! each into a document-type category, and reconciles the observed
//! categories against a named checklist. The result is a per-file verdict
//! plus an aggregate pass/fail status for the whole kit.
//!
//! Module map:
//! - [`category`] — the fixed document-type vocabulary
//! - [`checklist`] — named checklists and their persistent store
//! - [`pipeline`] — extraction, classification, and batch processing
//! - [`recon`] — the pure reconciliation engine
//! - [`api`] — the axum HTTP surface
//! - [`config`] — paths, bind address, logging defaults

pub mod api;
pub mod category;
pub mod checklist;
pub mod config;
pub mod pipeline;
pub mod recon;
