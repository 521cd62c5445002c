use minefort_core::options::{Page, PluginBrowseBody, PluginSearch};
use minefort_core::plugin::{Plugin, PluginReply};
use reqwest::Method;

use crate::client::{Access, Client};
use crate::error::Result;

/// Plugin catalogue. Installing goes through
/// [`ManagedServer::install_plugin`](crate::ManagedServer::install_plugin).
#[derive(Debug, Clone)]
pub struct PluginManager {
    client: Client,
}

impl PluginManager {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Plugins matching `search.search`, most downloaded first by default.
    pub async fn browse(&self, search: PluginSearch) -> Result<Vec<Plugin>> {
        Ok(self.browse_page(search).await?.items)
    }

    pub async fn browse_page(&self, search: PluginSearch) -> Result<Page<Plugin>> {
        let builder = self
            .client
            .request(Method::POST, "/plugins/browse", Access::Session)?
            .json(&PluginBrowseBody::from(search));
        let success = self.client.send::<Vec<PluginReply>>(builder).await?;

        let plugins = success.result.into_iter().map(Plugin::from).collect();
        Ok(Page::new(plugins, success.pagination))
    }
}
