//! Canonical upload results
//!
//! The backend's upload endpoints do not agree on a response shape: some
//! return `{success, failed, total}`, some `{processed_records,
//! failed_records}`, some `{processed, skipped}`, and the multi-sensor CSV
//! endpoints return a per-file `results` array with nested `sensor_details`.
//! Rather than scatter fallback chains across every call site, this module
//! deserializes all of them into one permissive [`RawUploadResponse`] and
//! folds it into the canonical [`UploadReport`] that the rest of the tooling
//! consumes.

use serde::{Deserialize, Serialize};

use crate::models::SensorKind;

// ========================================
// Raw wire shapes
// ========================================

/// Counts for one physical sensor detected inside a multiplexed CSV
///
/// Core-temperature files interleave up to three sensors in column groups
/// of five; the backend reports ingestion counts per detected sensor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorDetail {
    /// Position of the sensor within the file (1-based)
    pub sensor_number: u32,
    /// Physical sensor id read from the column group header
    pub sensor_id: String,
    pub success_count: u64,
    pub failed_count: u64,
}

/// Per-file entry inside a `results` array
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFileResult {
    pub file_name: Option<String>,
    pub success: Option<u64>,
    pub failed: Option<u64>,
    pub processed_records: Option<u64>,
    pub failed_records: Option<u64>,
    #[serde(default)]
    pub sensor_details: Vec<SensorDetail>,
    #[serde(default)]
    pub errors: Vec<String>,
}

/// Permissive mirror of every shape an upload endpoint may return
///
/// Every field is optional; [`normalize`] decides which ones win.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawUploadResponse {
    pub success: Option<u64>,
    pub failed: Option<u64>,
    pub total: Option<u64>,
    pub processed_records: Option<u64>,
    pub failed_records: Option<u64>,
    pub processed: Option<u64>,
    pub skipped: Option<u64>,
    /// Race records only: distinct participants after the server-side
    /// merge by bib number
    pub participants: Option<u64>,
    /// Race records only: old records superseded by this upload
    pub superseded_records: Option<u64>,
    pub results: Option<Vec<RawFileResult>>,
    #[serde(default)]
    pub errors: Vec<String>,
}

// ========================================
// Canonical shapes
// ========================================

/// Canonical per-file counts
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub file_name: String,
    pub success: u64,
    pub failed: u64,
    /// Per-sensor breakdown for multiplexed CSVs; empty otherwise
    pub sensors: Vec<SensorDetail>,
    pub errors: Vec<String>,
}

/// Canonical result of one upload action, regardless of endpoint shape
#[derive(Debug, Clone, Serialize)]
pub struct UploadReport {
    pub sensor_type: SensorKind,
    /// Per-file rows when the backend reported them; empty for endpoints
    /// that only return aggregate counts
    pub files: Vec<FileReport>,
    pub success: u64,
    pub failed: u64,
    pub skipped: u64,
    pub participants: Option<u64>,
    pub superseded_records: Option<u64>,
    pub errors: Vec<String>,
}

impl FileReport {
    fn from_raw(raw: RawFileResult) -> Self {
        let (success, failed) = if raw.sensor_details.is_empty() {
            scalar_counts(
                raw.success,
                raw.failed,
                raw.processed_records,
                raw.failed_records,
                None,
            )
        } else {
            // Sensor details are authoritative: file totals are the sum
            // across detected sensors.
            (
                raw.sensor_details.iter().map(|s| s.success_count).sum(),
                raw.sensor_details.iter().map(|s| s.failed_count).sum(),
            )
        };

        Self {
            file_name: raw.file_name.unwrap_or_else(|| "(unnamed)".to_string()),
            success,
            failed,
            sensors: raw.sensor_details,
            errors: raw.errors,
        }
    }
}

impl UploadReport {
    /// Total records the backend saw, successful or not
    pub fn total(&self) -> u64 {
        self.success + self.failed + self.skipped
    }

    /// Whether any record failed to ingest
    pub fn has_failures(&self) -> bool {
        self.failed > 0 || !self.errors.is_empty()
    }
}

/// First present scalar pair, in documented precedence order
fn scalar_counts(
    success: Option<u64>,
    failed: Option<u64>,
    processed_records: Option<u64>,
    failed_records: Option<u64>,
    processed: Option<u64>,
) -> (u64, u64) {
    if success.is_some() || failed.is_some() {
        (success.unwrap_or(0), failed.unwrap_or(0))
    } else if processed_records.is_some() || failed_records.is_some() {
        (processed_records.unwrap_or(0), failed_records.unwrap_or(0))
    } else {
        (processed.unwrap_or(0), 0)
    }
}

/// Fold a raw backend response into the canonical report
///
/// Precedence: a per-file `results` array wins outright; otherwise the
/// scalar pairs are tried in the order `success`/`failed`,
/// `processed_records`/`failed_records`, `processed`/`skipped`.
pub fn normalize(kind: SensorKind, raw: RawUploadResponse) -> UploadReport {
    if let Some(results) = raw.results {
        let files: Vec<FileReport> = results.into_iter().map(FileReport::from_raw).collect();
        let success = files.iter().map(|f| f.success).sum();
        let failed = files.iter().map(|f| f.failed).sum();
        return UploadReport {
            sensor_type: kind,
            files,
            success,
            failed,
            skipped: raw.skipped.unwrap_or(0),
            participants: raw.participants,
            superseded_records: raw.superseded_records,
            errors: raw.errors,
        };
    }

    let (success, failed) = scalar_counts(
        raw.success,
        raw.failed,
        raw.processed_records,
        raw.failed_records,
        raw.processed,
    );

    UploadReport {
        sensor_type: kind,
        files: Vec::new(),
        success,
        failed,
        skipped: raw.skipped.unwrap_or(0),
        participants: raw.participants,
        superseded_records: raw.superseded_records,
        errors: raw.errors,
    }
}

// ========================================
// Tests
// ========================================
