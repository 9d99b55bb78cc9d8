//! `mapping status` / `mapping apply`
//!
//! The apply action is irreversible and runs server-side; this command only
//! guards it (no mappings means nothing to apply), asks for confirmation,
//! and shows before/after counts.

use trisense_common::models::MappingStatus;
use trisense_common::{Error, Result};

use crate::client::ApiClient;
use crate::render;

pub async fn status(client: &ApiClient, competition_id: Option<&str>) -> Result<()> {
    let status = client.mapping_status(competition_id).await?;
    let unmapped = client.unmapped_summary(competition_id).await?;
    render::print_mapping_status(&status, Some(&unmapped));
    Ok(())
}

/// Apply pending mappings for a competition
///
/// `confirm` receives the pre-apply status and decides whether to proceed;
/// the binary wires it to the interactive prompt (or `--yes`). Declining
/// issues no request.
pub async fn apply<F>(client: &ApiClient, competition_id: &str, confirm: F) -> Result<()>
where
    F: FnOnce(&MappingStatus) -> bool,
{
    let before = client.mapping_status(Some(competition_id)).await?;
    if !before.can_apply() {
        return Err(Error::InvalidInput(
            "no mappings exist for this competition; upload a mapping file first".to_string(),
        ));
    }

    if !confirm(&before) {
        println!("Apply cancelled.");
        return Ok(());
    }

    client.apply_mapping(competition_id).await?;
    println!("Mappings applied.");

    let after = client.mapping_status(Some(competition_id)).await?;
    println!(
        "Active mappings: {} -> {}; fully mapped users: {} -> {}",
        before.active_mappings,
        after.active_mappings,
        before.fully_mapped_users,
        after.fully_mapped_users,
    );
    render::print_mapping_status(&after, None);
    Ok(())
}
