use serde::{Deserialize, Serialize};

use crate::category::Category;

/// A named checklist: the set of categories a complete kit must contain.
///
/// `categories` has set semantics — construction deduplicates while keeping
/// first-occurrence order, so the stored list doubles as the display order.
/// `docs_number` is derived and kept on the wire because the selection form
/// consumes it directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checklist {
    pub name: String,
    pub categories: Vec<Category>,
    pub docs_number: usize,
}

impl Checklist {
    pub fn new(name: impl Into<String>, categories: Vec<Category>) -> Self {
        let mut deduped: Vec<Category> = Vec::with_capacity(categories.len());
        for cat in categories {
            if !deduped.contains(&cat) {
                deduped.push(cat);
            }
        }
        let docs_number = deduped.len();
        Self {
            name: name.into(),
            categories: deduped,
            docs_number,
        }
    }

    pub fn requires(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_deduplicates_preserving_order() {
        let checklist = Checklist::new(
            "kit",
            vec![
                Category::Bill,
                Category::Arrangement,
                Category::Bill,
                Category::Order,
            ],
        );
        assert_eq!(
            checklist.categories,
            vec![Category::Bill, Category::Arrangement, Category::Order]
        );
        assert_eq!(checklist.docs_number, 3);
    }

    #[test]
    fn requires_checks_membership() {
        let checklist = Checklist::new("kit", vec![Category::Act]);
        assert!(checklist.requires(Category::Act));
        assert!(!checklist.requires(Category::Proxy));
    }

    #[test]
    fn wire_shape_matches_store_format() {
        let checklist = Checklist::new("Комплект 1", vec![Category::Contract]);
        let json = serde_json::to_value(&checklist).unwrap();
        assert_eq!(json["name"], "Комплект 1");
        assert_eq!(json["categories"][0], "contract");
        assert_eq!(json["docs_number"], 1);
    }
}
