//! GitCadence Backend Connector
//!
//! This crate talks to the remote analysis backend:
//! - `analyze`: the typed request/response boundary with explicit
//!   success/failure semantics
//! - `health` and `info`: best-effort probes that degrade to safe defaults

pub mod analysis;
pub mod client;

pub use analysis::{AnalysisClient, ClientConfig};
pub use client::HttpClientConfig;

use thiserror::Error;

/// Errors surfaced by the analysis connector.
///
/// Only `analyze_repository` propagates these; the probe calls swallow every
/// failure and report a safe default instead.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The transport call failed (unreachable, timeout, non-success status,
    /// unparseable body)
    #[error("Transport error: {0}")]
    Transport(String),

    /// The transport succeeded but the envelope reported failure
    #[error("{0}")]
    Application(String),

    /// Invalid connector configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;
