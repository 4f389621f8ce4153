//! Client error taxonomy
//!
//! Two failure classes exist on this side of the service boundary:
//! invalid input (caught before any network traffic) and connectivity
//! (transport failure, non-2xx status, or an undecodable body). The
//! backend's internal failures are opaque and only ever visible through
//! the fields of a successful response.

use thiserror::Error;

/// Errors surfaced by the verification client
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    /// A required input field was missing or blank
    #[error("missing required input: {0}")]
    Validation(String),

    /// The verification service could not be reached or answered badly
    #[error("cannot reach verification service: {0}")]
    Connectivity(String),
}
