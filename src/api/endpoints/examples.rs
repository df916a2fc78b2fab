//! Demo batches for the landing page.
//!
//! `POST /handle_example` replays one of two canned classification outcomes
//! through the real reconciliation engine, so the demo responses always
//! match what a live upload would produce.

use axum::Json;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::category::Category;
use crate::checklist::Checklist;
use crate::pipeline::{render_report, ValidationReport};
use crate::recon::{reconcile, ClassifiedFile};

#[derive(Debug, Deserialize)]
pub struct ExampleRequest {
    pub name: String,
}

/// `POST /handle_example` — run a canned demo batch.
///
/// `"first"` shows a duplicate (surplus + missing → bad), `"second"` a
/// complete kit (→ ok).
pub async fn handle(
    Json(request): Json<ExampleRequest>,
) -> Result<Json<ValidationReport>, ApiError> {
    let checklist = Checklist::new(
        "Пример комплекта",
        vec![Category::Arrangement, Category::Bill, Category::Order],
    );

    let classified = match request.name.as_str() {
        "first" => vec![
            ClassifiedFile::new("soglasie.rtf", Category::Arrangement),
            ClassifiedFile::new("bill.rtf", Category::Bill),
            ClassifiedFile::new("bill_another.rtf", Category::Bill),
        ],
        "second" => vec![
            ClassifiedFile::new("soglasie.rtf", Category::Arrangement),
            ClassifiedFile::new("bill.rtf", Category::Bill),
            ClassifiedFile::new("order.rtf", Category::Order),
        ],
        other => {
            return Err(ApiError::BadRequest(format!("Unknown example: {other}")));
        }
    };

    let result = reconcile(&checklist, &classified);
    Ok(Json(render_report(&checklist, &result)))
}
