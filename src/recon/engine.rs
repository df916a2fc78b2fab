//! The single-pass reconciliation algorithm.

use std::collections::HashSet;

use crate::category::Category;
use crate::checklist::Checklist;

use super::types::{BatchResult, BatchStatus, ClassifiedFile, FileVerdict, Verdict};

/// Reconcile one batch of classified files against a checklist.
///
/// Single pass in upload order over a remaining-requirement set:
/// - category never required            → `Unexpected`
/// - category required, still remaining → `Satisfied`, requirement consumed
/// - category required, already used    → `Surplus`
///
/// Order matters: the *first* file of a given category is the one credited
/// with satisfying the requirement, so verdicts are reproducible for audit.
/// At most one file per batch can satisfy a given required category.
pub fn reconcile(checklist: &Checklist, files: &[ClassifiedFile]) -> BatchResult {
    let required: HashSet<Category> = checklist.categories.iter().copied().collect();
    let mut remaining = required.clone();

    let mut per_file = Vec::with_capacity(files.len());
    let mut all_satisfied = true;

    for file in files {
        let verdict = if !required.contains(&file.category) {
            Verdict::Unexpected
        } else if remaining.remove(&file.category) {
            Verdict::Satisfied
        } else {
            Verdict::Surplus
        };

        if verdict != Verdict::Satisfied {
            all_satisfied = false;
        }

        per_file.push(FileVerdict {
            filename: file.filename.clone(),
            category: file.category,
            verdict,
        });
    }

    // Report missing requirements in checklist order, not hash order.
    let missing: Vec<Category> = checklist
        .categories
        .iter()
        .copied()
        .filter(|c| remaining.contains(c))
        .collect();

    let status = if all_satisfied && missing.is_empty() {
        BatchStatus::Pass
    } else {
        BatchStatus::Fail
    };

    BatchResult {
        per_file,
        missing,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kit() -> Checklist {
        Checklist::new(
            "kit",
            vec![Category::Arrangement, Category::Bill, Category::Order],
        )
    }

    fn file(name: &str, category: Category) -> ClassifiedFile {
        ClassifiedFile::new(name, category)
    }

    #[test]
    fn exact_match_passes_with_all_satisfied() {
        let files = vec![
            file("a.rtf", Category::Arrangement),
            file("b.rtf", Category::Bill),
            file("c.rtf", Category::Order),
        ];

        let result = reconcile(&kit(), &files);

        assert_eq!(result.status, BatchStatus::Pass);
        assert!(result.missing.is_empty());
        assert!(result
            .per_file
            .iter()
            .all(|fv| fv.verdict == Verdict::Satisfied));
    }

    #[test]
    fn duplicate_category_first_satisfies_second_is_surplus() {
        let files = vec![
            file("a.rtf", Category::Arrangement),
            file("b.rtf", Category::Bill),
            file("c.rtf", Category::Bill),
        ];

        let result = reconcile(&kit(), &files);

        assert_eq!(result.per_file[0].verdict, Verdict::Satisfied);
        assert_eq!(result.per_file[1].verdict, Verdict::Satisfied);
        assert_eq!(result.per_file[2].verdict, Verdict::Surplus);
        // The order requirement was never met.
        assert_eq!(result.missing, vec![Category::Order]);
        assert_eq!(result.status, BatchStatus::Fail);
    }

    #[test]
    fn category_outside_checklist_is_unexpected() {
        let files = vec![
            file("a.rtf", Category::Arrangement),
            file("x.rtf", Category::Statute),
            file("b.rtf", Category::Bill),
            file("c.rtf", Category::Order),
        ];

        let result = reconcile(&kit(), &files);

        assert_eq!(result.per_file[1].verdict, Verdict::Unexpected);
        assert_eq!(result.status, BatchStatus::Fail);
        // Everything required was still present.
        assert!(result.missing.is_empty());
    }

    #[test]
    fn missing_requirement_fails_even_if_all_files_satisfy() {
        let files = vec![
            file("a.rtf", Category::Arrangement),
            file("b.rtf", Category::Bill),
        ];

        let result = reconcile(&kit(), &files);

        assert!(result
            .per_file
            .iter()
            .all(|fv| fv.verdict == Verdict::Satisfied));
        assert_eq!(result.missing, vec![Category::Order]);
        assert_eq!(result.status, BatchStatus::Fail);
    }

    #[test]
    fn empty_batch_fails_with_everything_missing() {
        let result = reconcile(&kit(), &[]);

        assert!(result.per_file.is_empty());
        assert_eq!(
            result.missing,
            vec![Category::Arrangement, Category::Bill, Category::Order]
        );
        assert_eq!(result.status, BatchStatus::Fail);
    }

    #[test]
    fn no_class_never_satisfies_a_requirement() {
        let files = vec![
            file("a.rtf", Category::Arrangement),
            file("junk.rtf", Category::NoClass),
            file("b.rtf", Category::Bill),
            file("c.rtf", Category::Order),
        ];

        let result = reconcile(&kit(), &files);

        assert_eq!(result.per_file[1].verdict, Verdict::Unexpected);
        assert_eq!(result.status, BatchStatus::Fail);
    }

    #[test]
    fn upload_order_is_preserved_in_verdicts() {
        let files = vec![
            file("third.rtf", Category::Order),
            file("first.rtf", Category::Arrangement),
            file("second.rtf", Category::Bill),
        ];

        let result = reconcile(&kit(), &files);

        let names: Vec<&str> = result
            .per_file
            .iter()
            .map(|fv| fv.filename.as_str())
            .collect();
        assert_eq!(names, vec!["third.rtf", "first.rtf", "second.rtf"]);
    }

    #[test]
    fn reconcile_is_deterministic() {
        let files = vec![
            file("a.rtf", Category::Arrangement),
            file("x.rtf", Category::Statute),
            file("b.rtf", Category::Bill),
            file("b2.rtf", Category::Bill),
        ];

        let first = reconcile(&kit(), &files);
        let second = reconcile(&kit(), &files);
        assert_eq!(first, second);
    }

    #[test]
    fn surplus_beyond_two_stays_surplus() {
        let checklist = Checklist::new("single", vec![Category::Contract]);
        let files = vec![
            file("1.txt", Category::Contract),
            file("2.txt", Category::Contract),
            file("3.txt", Category::Contract),
        ];

        let result = reconcile(&checklist, &files);

        assert_eq!(result.per_file[0].verdict, Verdict::Satisfied);
        assert_eq!(result.per_file[1].verdict, Verdict::Surplus);
        assert_eq!(result.per_file[2].verdict, Verdict::Surplus);
        assert_eq!(result.status, BatchStatus::Fail);
    }
}
