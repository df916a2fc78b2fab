//! API endpoint handlers.

pub mod checklists;
pub mod examples;
pub mod health;
pub mod upload;
