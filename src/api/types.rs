//! Shared state for the API layer.

use std::sync::Arc;

use crate::checklist::ChecklistStore;
use crate::pipeline::{Classifier, KeywordClassifier};

/// Shared context for all API routes: the checklist store and the
/// classifier adapter. Both are request-independent; the store guards its
/// own mutation internally.
#[derive(Clone)]
pub struct ApiContext {
    pub store: Arc<ChecklistStore>,
    pub classifier: Arc<dyn Classifier>,
}

impl ApiContext {
    /// Context with the built-in keyword classifier.
    pub fn new(store: Arc<ChecklistStore>) -> Self {
        Self::with_classifier(store, Arc::new(KeywordClassifier))
    }

    /// Context with an injected classifier (real model, or a scripted one
    /// in tests).
    pub fn with_classifier(store: Arc<ChecklistStore>, classifier: Arc<dyn Classifier>) -> Self {
        Self { store, classifier }
    }
}
