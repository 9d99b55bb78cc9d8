//! `batches list` / `batches delete`
//!
//! Deleting a batch cascades server-side to its derived sensor records, so
//! the mapping status is re-fetched afterwards: unmapped counts may change.

use trisense_common::Result;

use crate::client::ApiClient;
use crate::commands::upload::refresh_mapping_status;
use crate::render;

pub async fn list(client: &ApiClient, competition_id: &str) -> Result<()> {
    let batches = client.list_batches(competition_id).await?;
    render::print_batches(&batches);
    Ok(())
}

/// Delete one batch by id
///
/// `confirmed` is the operator's already-resolved confirmation; when false
/// no request is issued at all.
pub async fn delete(
    client: &ApiClient,
    batch_id: &str,
    competition_id: Option<&str>,
    confirmed: bool,
) -> Result<()> {
    if !confirmed {
        println!("Delete cancelled.");
        return Ok(());
    }

    client.delete_batch(batch_id).await?;
    println!("Batch {} deleted.", batch_id);

    if let Some(id) = competition_id {
        refresh_mapping_status(client, id).await;
    }
    Ok(())
}
