//! BuildBear API domain.
//!
//! A single generic request helper shared by every tool:
//!
//! - `request.rs` - [`ApiRequest`] and URL building
//! - `response.rs` - JSON-vs-text content negotiation
//! - `client.rs` - the [`SandboxApi`] seam and its reqwest implementation
//! - `models.rs` - the few response fields the tools actually read
//! - `error.rs` - API error types

mod client;
mod error;
pub mod models;
mod request;
mod response;

#[cfg(test)]
pub mod mock;

pub use client::{BuildBearClient, CLIENT_USER_AGENT, SandboxApi};
pub use error::{ApiError, ApiResult};
pub use request::{ApiRequest, build_url};
pub use response::{ApiResponse, pretty_json};
