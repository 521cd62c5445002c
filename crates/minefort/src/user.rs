use minefort_core::user::{AffiliateStats, AffiliateStatsReply, CurrentUser, UserMeReply};
use reqwest::Method;

use crate::client::Client;
use crate::error::Result;

/// The authenticated account and its affiliate program numbers.
#[derive(Debug, Clone)]
pub struct UserManager {
    client: Client,
}

impl UserManager {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn me(&self) -> Result<CurrentUser> {
        let reply: UserMeReply = self.client.fetch(Method::GET, "/user/me").await?;
        Ok(reply.into())
    }

    pub async fn affiliate_stats(&self) -> Result<AffiliateStats> {
        let reply: AffiliateStatsReply = self.client.fetch(Method::GET, "/affiliate/stats").await?;
        Ok(reply.into())
    }

    /// Affiliate revenue not yet paid out.
    pub async fn affiliate_unpaid(&self) -> Result<f64> {
        self.client.fetch(Method::GET, "/affiliate/unpaid").await
    }
}
