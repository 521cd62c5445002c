use minefort_core::icon::{Icon, IconReply};
use minefort_core::options::{find_by, Lookup};
use reqwest::Method;

use crate::client::Client;
use crate::error::Result;

/// Catalogue of server icons.
#[derive(Debug, Clone)]
pub struct IconManager {
    client: Client,
}

impl IconManager {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Icon>> {
        let replies: Vec<IconReply> = self.client.fetch(Method::GET, "/server/icons").await?;
        Ok(replies.into_iter().map(Icon::from).collect())
    }

    pub async fn get(&self, key: &str, lookup: Lookup) -> Result<Option<Icon>> {
        Ok(find_by(self.list().await?, key, lookup))
    }
}
