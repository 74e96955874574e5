//! Request and Response DTOs
//!
//! Defines the structure of incoming query parameters and outgoing JSON
//! bodies. Artifact responses themselves are raw bytes, not DTOs.

mod requests;
mod responses;

pub use requests::CombineQuery;
pub use responses::{ErrorResponse, HealthResponse, StatsResponse};
