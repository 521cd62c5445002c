use log::debug;
use minefort_core::reply::{check_response, Reply};
use minefort_core::session::find_session;
use reqwest::header::SET_COOKIE;
use reqwest::Method;
use serde::de::IgnoredAny;
use serde::Serialize;

use crate::client::{Access, Client};
use crate::error::{Error, Result};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginBody<'a> {
    email_address: &'a str,
    password: &'a str,
}

/// Login with email and password.
#[derive(Debug, Clone)]
pub struct AuthManager {
    client: Client,
}

impl AuthManager {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Log in and store the session on the client.
    ///
    /// On failure the previous session (if any) is left untouched.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<()> {
        let response = self
            .client
            .request(Method::POST, "/auth/login", Access::Public)?
            .json(&LoginBody {
                email_address: email,
                password,
            })
            .send()
            .await?;

        let session = find_session(
            response
                .headers()
                .get_all(SET_COOKIE)
                .iter()
                .filter_map(|value| value.to_str().ok()),
        );

        let reply: Reply<IgnoredAny> = response.json().await?;
        check_response(reply)?;

        let token = session.ok_or(Error::MissingSessionCookie)?;
        self.client.set_session(token);
        debug!("authenticated as {email}");

        Ok(())
    }
}
