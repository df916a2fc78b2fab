//! Document-type categories and their display labels.
//!
//! A `Category` is the label the classifier assigns to one uploaded file.
//! The enumeration is fixed: every label the classifier can emit has a
//! variant here, including the `no_class` sentinel for documents the
//! classifier could not match with confidence. `label()` is total over the
//! enum; unknown classifier output surfaces as an [`UnknownCategory`] error
//! at parse time instead.

use serde::{Deserialize, Serialize};

/// A classifier label that has no entry in the category table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

/// Document-type category assigned by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "proxy")]
    Proxy,
    #[serde(rename = "contract")]
    Contract,
    #[serde(rename = "act")]
    Act,
    #[serde(rename = "application")]
    Application,
    #[serde(rename = "order")]
    Order,
    #[serde(rename = "invoice")]
    Invoice,
    #[serde(rename = "bill")]
    Bill,
    #[serde(rename = "arrangement")]
    Arrangement,
    #[serde(rename = "contract offer")]
    ContractOffer,
    #[serde(rename = "statute")]
    Statute,
    #[serde(rename = "determination")]
    Determination,
    /// Classifier produced no confident match. Never satisfies a checklist
    /// requirement and cannot be required (rejected at define time).
    #[serde(rename = "no_class")]
    NoClass,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Proxy => "proxy",
            Self::Contract => "contract",
            Self::Act => "act",
            Self::Application => "application",
            Self::Order => "order",
            Self::Invoice => "invoice",
            Self::Bill => "bill",
            Self::Arrangement => "arrangement",
            Self::ContractOffer => "contract offer",
            Self::Statute => "statute",
            Self::Determination => "determination",
            Self::NoClass => "no_class",
        }
    }

    /// Human-readable display label, shown in upload reports and the
    /// selection form.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Proxy => "Доверенность",
            Self::Contract => "Договор",
            Self::Act => "Акт",
            Self::Application => "Заявление",
            Self::Order => "Приказ",
            Self::Invoice => "Счет",
            Self::Bill => "Приложение",
            Self::Arrangement => "Соглашение",
            Self::ContractOffer => "Договор оферты",
            Self::Statute => "Устав",
            Self::Determination => "Решение",
            Self::NoClass => "Невалидный файл",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "proxy" => Ok(Self::Proxy),
            "contract" => Ok(Self::Contract),
            "act" => Ok(Self::Act),
            "application" => Ok(Self::Application),
            "order" => Ok(Self::Order),
            "invoice" => Ok(Self::Invoice),
            "bill" => Ok(Self::Bill),
            "arrangement" => Ok(Self::Arrangement),
            "contract offer" => Ok(Self::ContractOffer),
            "statute" => Ok(Self::Statute),
            "determination" => Ok(Self::Determination),
            "no_class" => Ok(Self::NoClass),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
