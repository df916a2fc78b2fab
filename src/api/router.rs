//! API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! The selection form is served from a separate origin during development,
//! so CORS is wide open — there is no credentialed state to protect.

use axum::extract::DefaultBodyLimit;
use axum::http::Method;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::api::endpoints;
use crate::api::types::ApiContext;

/// Upper bound on a whole upload request body (50 MB); per-file limits are
/// enforced in the upload handler.
const MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

/// Build the API router.
pub fn api_router(ctx: ApiContext) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/form_params", get(endpoints::checklists::list))
        .route("/upload", post(endpoints::upload::upload))
        .route("/update_template", post(endpoints::checklists::define))
        .route("/handle_example", post(endpoints::examples::handle))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(ctx)
        .layer(cors)
}
