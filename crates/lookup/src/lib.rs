//! Client for the remote dictionary service.
//!
//! [`LookupClient`] is the seam the search orchestrator depends on; the
//! reqwest-backed [`HttpLookupClient`] is the production implementation.
//! Each call is exactly one round trip. Nothing here retries.

mod client;
mod error;
mod wire;

pub use client::{DEFAULT_ENDPOINT, HttpLookupClient, LookupClient};
pub use error::{ClientError, FailureReason, NOT_FOUND_MESSAGE};
pub use wire::parse_entries;

// Only the HTTP integration tests drive a runtime.
#[cfg(test)]
use tokio as _;
