//! Mapping status aggregates
//!
//! A mapping binds a physical sensor id to a user id (and optionally a bib
//! number). The backend computes these aggregates on demand; the admin
//! tooling only reads them and triggers the apply action.

use serde::{Deserialize, Serialize};

use super::sensor::SensorKind;

/// Mapping counts for one sensor type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorTypeMappings {
    pub sensor_type: SensorKind,
    pub mapping_count: u64,
}

/// Aggregate mapping counts for a competition (or all competitions)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MappingStatus {
    /// All mappings known to the backend in this scope
    pub total_mappings: u64,
    /// Mappings currently bound to sensor data
    pub active_mappings: u64,
    /// Users with at least one mapping
    pub users_with_mappings: u64,
    /// Users mapped for every sensor type they have data for
    pub fully_mapped_users: u64,
    /// Per-sensor-type breakdown
    #[serde(default)]
    pub by_sensor_type: Vec<SensorTypeMappings>,
}

impl MappingStatus {
    /// Whether the apply-mapping action is meaningful
    ///
    /// Applying with zero mappings is a no-op server-side; the admin
    /// tooling refuses to issue it at all.
    pub fn can_apply(&self) -> bool {
        self.total_mappings > 0
    }
}

/// Unmapped records for one sensor type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnmappedGroup {
    pub sensor_type: SensorKind,
    /// Records lacking a user association
    pub record_count: u64,
    /// Distinct sensor ids among those records
    #[serde(default)]
    pub sensor_ids: Vec<String>,
}

/// Per-sensor-type summary of records with no user mapping
///
/// Unmapped records are invisible to the participant-facing dashboard until
/// a mapping is applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnmappedSummary {
    #[serde(default)]
    pub by_sensor_type: Vec<UnmappedGroup>,
}

impl UnmappedSummary {
    /// Total unmapped records across all sensor types
    pub fn total_records(&self) -> u64 {
        self.by_sensor_type.iter().map(|g| g.record_count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_records() == 0
    }
}
