//! HTTP API.
//!
//! Thin transport layer over the pipeline: multipart upload in, JSON
//! validation report out, plus the checklist administration endpoints the
//! selection form uses. The router is composable — `api_router()` returns a
//! `Router` that can be mounted on any axum server instance.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use error::ApiError;
pub use router::api_router;
pub use server::{start_server, ApiServer, ApiSession};
pub use types::ApiContext;
