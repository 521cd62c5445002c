use crate::prelude::*;
use minefort::{Client, ManagedServer};
use minefort_core::options::find_by_id_or_name;

pub mod account;
pub mod catalog;
pub mod files;
pub mod server;
pub mod servers;

/// Find one of the user's servers by id, falling back to its name.
pub async fn resolve_server(client: &Client, key: &str) -> Result<ManagedServer> {
    let servers = client.servers().my_servers().await?;

    find_by_id_or_name(servers, key).ok_or_else(|| eyre!("No server with id or name {key:?}"))
}
