//! HTTP middleware.

mod cors;
mod stage;

pub use cors::cors_middleware;
pub use stage::strip_stage;
