//! API Module
//!
//! HTTP surface: router, handlers, content negotiation and artifact emission.

mod emitter;
mod handlers;
mod negotiation;
mod routes;

pub use emitter::emit_artifact;
pub use handlers::AppState;
pub use negotiation::should_compress;
pub use routes::create_router;
