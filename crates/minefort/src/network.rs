use minefort_core::article::{Article, ArticleReply};
use reqwest::Method;

use crate::client::{Access, Client};
use crate::error::Result;

/// Network blog. These endpoints are public and send no session cookie.
#[derive(Debug, Clone)]
pub struct NetworkManager {
    client: Client,
}

impl NetworkManager {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn articles(&self) -> Result<Vec<Article>> {
        let builder = self
            .client
            .request(Method::GET, "/blog/articles", Access::Public)?;
        let replies = self.client.send::<Vec<ArticleReply>>(builder).await?.result;

        Ok(replies.into_iter().map(Article::from).collect())
    }

    pub async fn article(&self, slug: &str) -> Result<Article> {
        let path = format!("/blog/articles/{}", urlencoding::encode(slug));
        let builder = self.client.request(Method::GET, &path, Access::Public)?;
        let reply = self.client.send::<ArticleReply>(builder).await?.result;

        Ok(reply.into())
    }
}
