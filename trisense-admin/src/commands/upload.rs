//! `upload` - post sensor data files and render the canonical report
//!
//! After a successful upload the mapping status is re-fetched: fresh sensor
//! records can change the unmapped counts.

use std::path::PathBuf;

use trisense_common::{Result, SensorKind};

use crate::client::ApiClient;
use crate::render;

pub async fn run(
    client: &ApiClient,
    kind: SensorKind,
    competition_id: &str,
    files: &[PathBuf],
    sensor_id: Option<&str>,
) -> Result<()> {
    let report = client.upload(kind, competition_id, files, sensor_id).await?;
    render::print_upload_report(&report);

    refresh_mapping_status(client, competition_id).await;
    Ok(())
}

/// Best-effort mapping status refresh after a mutating action
///
/// A refresh failure does not fail the action that triggered it; the
/// mutation already happened.
pub(crate) async fn refresh_mapping_status(client: &ApiClient, competition_id: &str) {
    match client.mapping_status(Some(competition_id)).await {
        Ok(status) => {
            println!();
            render::print_mapping_status(&status, None);
        }
        Err(e) => {
            tracing::warn!(error = %e, "Could not refresh mapping status");
        }
    }
}
