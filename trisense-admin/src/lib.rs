//! trisense-admin library - REST client and command implementations
//!
//! The binary in `main.rs` is a thin clap dispatcher over this crate;
//! integration tests drive [`client::ApiClient`] and the command entry
//! points directly against a mocked backend.

pub mod client;
pub mod commands;
pub mod render;

pub use client::ApiClient;
