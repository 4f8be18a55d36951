//! Web layer for the transit router.
//!
//! Read-only HTTP endpoints for line statistics, stop lookups and
//! fastest-route queries over a fully built network.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
