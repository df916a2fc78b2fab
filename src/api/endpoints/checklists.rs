//! Checklist administration endpoints.
//!
//! `GET /form_params` returns the full store for populating the selection
//! form; `POST /update_template` defines a new checklist. Validation
//! failures on define (empty list, duplicate name, `no_class` requirement)
//! are expected user-correctable conditions and come back as a 200 with an
//! `error` payload, not as transport failures.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::category::Category;
use crate::checklist::Checklist;

#[derive(Debug, Deserialize)]
pub struct DefineRequest {
    pub name: String,
    pub categories: Vec<String>,
}

/// Soft-error payload: `{"error": "<message>"}` with a 200 status.
#[derive(Debug, Serialize)]
pub struct SoftError {
    pub error: String,
}

/// `GET /form_params` — full checklist collection, keyed by storage key.
pub async fn list(
    State(ctx): State<ApiContext>,
) -> Result<Json<BTreeMap<String, Checklist>>, ApiError> {
    Ok(Json(ctx.store.all()?))
}

/// `POST /update_template` — define a new checklist.
///
/// Success returns the updated collection. Unknown category strings are
/// hard input errors (the form only offers valid ones); store-level
/// validation failures are soft errors.
pub async fn define(
    State(ctx): State<ApiContext>,
    Json(request): Json<DefineRequest>,
) -> Result<Response, ApiError> {
    let mut categories = Vec::with_capacity(request.categories.len());
    for raw in &request.categories {
        let category: Category = raw
            .parse()
            .map_err(|e: crate::category::UnknownCategory| ApiError::BadRequest(e.to_string()))?;
        categories.push(category);
    }

    match ctx.store.define(&request.name, &categories) {
        Ok(_) => Ok(Json(ctx.store.all()?).into_response()),
        Err(e) if e.is_soft() => {
            tracing::debug!(name = %request.name, error = %e, "checklist definition rejected");
            Ok(Json(SoftError {
                error: e.to_string(),
            })
            .into_response())
        }
        Err(e) => Err(e.into()),
    }
}
