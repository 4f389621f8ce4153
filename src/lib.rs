//! truthforge - A CLI client for the TruthForge multi-agent verification
//! service
//!
//! This library provides the client side of TruthForge: typed request and
//! result models, a blocking HTTP client for the remote verification
//! service, a session state machine that holds the displayed result, and
//! a report exporter. The verification engine itself (agent pipeline,
//! retrieval, scoring) is an opaque external service.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod paths;
pub mod report;
pub mod session;
