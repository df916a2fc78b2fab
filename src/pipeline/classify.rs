//! Classifier adapter.
//!
//! The classification model is an external collaborator; this module owns
//! only the seam. `Classifier` takes the whole batch in one call (a model
//! scores a batch more efficiently than one-by-one) and must return exactly
//! one label per input, in input order — the processor pairs labels back to
//! filenames by position.
//!
//! `KeywordClassifier` is the built-in stand-in: it scores occurrences of
//! characteristic Russian document phrases and falls back to `no_class`
//! when nothing matches. Good enough to run the service end to end and to
//! exercise the pipeline in tests; a real model plugs in behind the trait.

use thiserror::Error;

use crate::category::Category;

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("classifier backend error: {0}")]
    Backend(String),
}

/// Batched document-type classifier.
///
/// Contract: the returned labels correspond to `texts` by position and the
/// lengths are equal. Labels are raw strings as a model emits them; the
/// processor parses them against the category table.
pub trait Classifier: Send + Sync {
    fn classify(&self, texts: &[String]) -> Result<Vec<String>, ClassifyError>;
}

/// Keyword table, most specific first: ties in score go to the earlier
/// entry, so "договор оферты" resolves to the offer before the plain
/// contract.
const KEYWORDS: &[(Category, &[&str])] = &[
    (Category::ContractOffer, &["оферт", "публичная оферта"]),
    (Category::Proxy, &["доверенность", "доверяет", "уполномочивает"]),
    (Category::Application, &["заявление", "прошу"]),
    (Category::Arrangement, &["соглашение", "стороны договорились"]),
    (Category::Order, &["приказ", "приказываю"]),
    (Category::Invoice, &["счет на оплату", "счёт", "счет №", "к оплате"]),
    (Category::Bill, &["приложение №", "приложение к"]),
    (Category::Statute, &["устав", "уставом"]),
    (Category::Determination, &["решение", "решил", "постановил"]),
    (Category::Act, &["акт приема", "акт выполненных", "акт №", "акт сдачи"]),
    (Category::Contract, &["договор", "контракт"]),
];

/// Keyword-scoring classifier over the fixed category table.
pub struct KeywordClassifier;

impl KeywordClassifier {
    fn classify_one(text: &str) -> Category {
        let haystack = text.to_lowercase();

        let mut best = Category::NoClass;
        let mut best_score = 0usize;
        for (category, keywords) in KEYWORDS {
            let score: usize = keywords
                .iter()
                .map(|kw| haystack.matches(kw).count())
                .sum();
            if score > best_score {
                best = *category;
                best_score = score;
            }
        }

        best
    }
}

impl Classifier for KeywordClassifier {
    fn classify(&self, texts: &[String]) -> Result<Vec<String>, ClassifyError> {
        Ok(texts
            .iter()
            .map(|text| Self::classify_one(text).as_str().to_string())
            .collect())
    }
}
