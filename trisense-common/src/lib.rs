//! # TriSense Common Library
//!
//! Shared code for the TriSense admin tooling:
//! - Domain models (competitions, upload batches, mapping status)
//! - Canonical upload-result normalization
//! - Error types
//! - Configuration resolution

pub mod config;
pub mod error;
pub mod models;
pub mod upload;

pub use error::{Error, Result};
pub use models::SensorKind;
