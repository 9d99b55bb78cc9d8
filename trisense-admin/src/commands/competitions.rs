//! `competitions` - list competitions available for scoping uploads

use trisense_common::Result;

use crate::client::ApiClient;
use crate::render;

pub async fn run(client: &ApiClient) -> Result<()> {
    let competitions = client.list_competitions().await?;
    render::print_competitions(&competitions);
    Ok(())
}
