//! Upload batch records
//!
//! A batch is one upload transaction's worth of ingested records, trackable
//! and deletable as a unit. Deleting a batch cascades to its derived sensor
//! records server-side.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::sensor::SensorKind;

/// Processing status of an upload batch
///
/// Lifecycle: `pending → processing → {completed | completed_with_errors |
/// failed}`. The admin tooling only ever displays the status the backend
/// reports; it never transitions it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchStatus {
    Pending,
    Processing,
    Completed,
    CompletedWithErrors,
    Failed,
}

impl BatchStatus {
    /// Whether the backend will not change this status further
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            BatchStatus::Completed | BatchStatus::CompletedWithErrors | BatchStatus::Failed
        )
    }

    /// Human-readable label for tables
    pub fn label(&self) -> &'static str {
        match self {
            BatchStatus::Pending => "pending",
            BatchStatus::Processing => "processing",
            BatchStatus::Completed => "completed",
            BatchStatus::CompletedWithErrors => "completed with errors",
            BatchStatus::Failed => "failed",
        }
    }
}

/// One upload batch as listed by the batch history endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadBatch {
    /// Backend identifier
    pub id: String,
    /// Modality the batch was uploaded under
    pub sensor_type: SensorKind,
    /// Source file name as submitted
    pub file_name: String,
    /// Total records in the source file
    pub total_records: u64,
    /// Records ingested successfully
    pub success_records: u64,
    /// Records rejected during ingestion
    pub failed_records: u64,
    /// Processing status reported by the backend
    pub status: BatchStatus,
    /// When the upload was received
    pub uploaded_at: DateTime<Utc>,
    /// Operator account that performed the upload
    pub uploaded_by: Option<String>,
}
