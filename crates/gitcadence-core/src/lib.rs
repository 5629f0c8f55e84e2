//! GitCadence Core Types
//!
//! This crate provides the fundamental types shared across GitCadence:
//! - Analysis request/result wire types and the `ApiResponse` envelope
//! - Supported locale tags
//! - Core error types

pub mod error;
pub mod locale;
pub mod types;

pub use error::{Error, Result};
pub use locale::Locale;
pub use types::{AnalysisRequest, AnalysisResult, ApiResponse};
