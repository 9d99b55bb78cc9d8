//! Data models for the TriSense platform
//!
//! All identifiers arrive from the backend as opaque strings; the admin
//! tooling never mints its own.

pub mod batch;
pub mod competition;
pub mod mapping;
pub mod sensor;

pub use batch::{BatchStatus, UploadBatch};
pub use competition::Competition;
pub use mapping::{MappingStatus, SensorTypeMappings, UnmappedGroup, UnmappedSummary};
pub use sensor::SensorKind;
