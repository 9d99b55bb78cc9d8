//! Sensor upload modalities
//!
//! Each modality maps to one backend upload endpoint with its own multipart
//! field name and file rules. The kebab-case names double as the wire names
//! used in endpoint paths and batch records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The six upload modalities accepted by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SensorKind {
    /// Skin temperature patch CSVs (one or more files)
    SkinTemperature,
    /// Ingestible core temperature CSVs; each file multiplexes 1-3
    /// physical sensors in column groups of five
    CoreTemperature,
    /// Garmin heart-rate TCX exports; the device id is not embedded in
    /// the file and must be supplied alongside the upload
    HeartRate,
    /// Wet Bulb Globe Temperature log, one file per competition
    Wbgt,
    /// Sensor-id to athlete mapping sheet
    Mapping,
    /// Race timing records, merged server-side by bib number
    RaceRecords,
}

impl SensorKind {
    /// All modalities, in display order
    pub const ALL: [SensorKind; 6] = [
        SensorKind::SkinTemperature,
        SensorKind::CoreTemperature,
        SensorKind::HeartRate,
        SensorKind::Wbgt,
        SensorKind::Mapping,
        SensorKind::RaceRecords,
    ];

    /// Kebab-case wire name (endpoint path segment and batch tag)
    pub fn as_str(&self) -> &'static str {
        match self {
            SensorKind::SkinTemperature => "skin-temperature",
            SensorKind::CoreTemperature => "core-temperature",
            SensorKind::HeartRate => "heart-rate",
            SensorKind::Wbgt => "wbgt",
            SensorKind::Mapping => "mapping",
            SensorKind::RaceRecords => "race-records",
        }
    }

    /// Backend upload endpoint for this modality
    pub fn endpoint_path(&self) -> String {
        format!("/admin/upload/{}", self.as_str())
    }

    /// Multipart field name the backend expects the file(s) under
    pub fn field_name(&self) -> &'static str {
        match self {
            SensorKind::SkinTemperature => "files",
            SensorKind::CoreTemperature => "files",
            SensorKind::HeartRate => "data_file",
            SensorKind::Wbgt => "wbgt_file",
            SensorKind::Mapping => "mapping_file",
            SensorKind::RaceRecords => "files",
        }
    }

    /// Whether more than one file may be submitted in a single upload
    pub fn accepts_multiple_files(&self) -> bool {
        match self {
            SensorKind::SkinTemperature
            | SensorKind::CoreTemperature
            | SensorKind::HeartRate
            | SensorKind::RaceRecords => true,
            SensorKind::Wbgt | SensorKind::Mapping => false,
        }
    }

    /// Whether the upload must carry an operator-entered sensor id
    ///
    /// Only heart rate: Garmin TCX files do not self-identify their device.
    pub fn requires_sensor_id(&self) -> bool {
        matches!(self, SensorKind::HeartRate)
    }

    /// Human-readable label for tables and logs
    pub fn label(&self) -> &'static str {
        match self {
            SensorKind::SkinTemperature => "Skin temperature",
            SensorKind::CoreTemperature => "Core temperature",
            SensorKind::HeartRate => "Heart rate",
            SensorKind::Wbgt => "WBGT",
            SensorKind::Mapping => "Mapping",
            SensorKind::RaceRecords => "Race records",
        }
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SensorKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "skin-temperature" => Ok(SensorKind::SkinTemperature),
            "core-temperature" => Ok(SensorKind::CoreTemperature),
            "heart-rate" => Ok(SensorKind::HeartRate),
            "wbgt" => Ok(SensorKind::Wbgt),
            "mapping" => Ok(SensorKind::Mapping),
            "race-records" => Ok(SensorKind::RaceRecords),
            other => Err(Error::InvalidInput(format!(
                "unknown sensor type '{}' (expected one of: skin-temperature, \
                 core-temperature, heart-rate, wbgt, mapping, race-records)",
                other
            ))),
        }
    }
}
