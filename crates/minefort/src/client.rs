use std::sync::{Arc, PoisonError, RwLock};

use log::{debug, trace};
use minefort_core::reply::{check_response, Reply, Success};
use minefort_core::session::cookie_header;
use reqwest::header::{HeaderValue, COOKIE};
use reqwest::{Method, RequestBuilder};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;

use crate::error::Result;
use crate::{
    AuthManager, IconManager, NetworkManager, PluginManager, ServerManager, UserManager,
};

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.minefort.com/v1";

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    /// Uses MINEFORT_BASE_URL with default fallback.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("MINEFORT_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

/// Whether a request carries the session cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Access {
    Session,
    Public,
}

/// Entry point to the API.
///
/// Cloning is cheap: clones share the HTTP connection pool and the session,
/// so a login through one clone is visible to all of them. Managers are
/// built on demand and hold their own clone.
///
/// Concurrent calls to [`AuthManager::authenticate`] race; the last one to
/// finish wins.
#[derive(Debug, Clone)]
pub struct Client {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    http: reqwest::Client,
    base_url: String,
    session: RwLock<Option<String>>,
}

impl Client {
    /// Client for the production API with no session.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("minefort-rs/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self::with_http_client(http, config))
    }

    /// Build on top of an existing `reqwest::Client` (proxies, timeouts, ...).
    pub fn with_http_client(http: reqwest::Client, config: ClientConfig) -> Self {
        Self {
            inner: Arc::new(Inner {
                http,
                base_url: config.base_url.trim_end_matches('/').to_string(),
                session: RwLock::new(None),
            }),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Current session token, if a login succeeded or one was set by hand.
    pub fn session(&self) -> Option<String> {
        self.inner
            .session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Reuse a session token obtained earlier.
    pub fn set_session(&self, token: impl Into<String>) {
        let mut session = self
            .inner
            .session
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *session = Some(token.into());
        debug!("session set");
    }

    pub fn clear_session(&self) {
        let mut session = self
            .inner
            .session
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *session = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.session().is_some()
    }

    /// `Cookie` header value sent on authenticated endpoints.
    pub fn cookie(&self) -> String {
        cookie_header(self.session().as_deref().unwrap_or_default())
    }

    pub fn auth(&self) -> AuthManager {
        AuthManager::new(self.clone())
    }

    pub fn user(&self) -> UserManager {
        UserManager::new(self.clone())
    }

    pub fn servers(&self) -> ServerManager {
        ServerManager::new(self.clone())
    }

    pub fn icons(&self) -> IconManager {
        IconManager::new(self.clone())
    }

    pub fn network(&self) -> NetworkManager {
        NetworkManager::new(self.clone())
    }

    pub fn plugins(&self) -> PluginManager {
        PluginManager::new(self.clone())
    }

    // ========================================================================
    // Request helpers
    // ========================================================================

    pub(crate) fn request(
        &self,
        method: Method,
        path: &str,
        access: Access,
    ) -> Result<RequestBuilder> {
        debug!("{method} {path}");
        let url = format!("{}{path}", self.inner.base_url);
        let builder = self.inner.http.request(method, url);

        Ok(match access {
            Access::Session => builder.header(COOKIE, HeaderValue::from_str(&self.cookie())?),
            Access::Public => builder,
        })
    }

    /// Send, decode the reply, and run it through the response checker.
    ///
    /// The HTTP status code is not inspected: the API reports failures in
    /// the reply's status tag, which is what callers match on.
    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<Success<T>> {
        let response = builder.send().await?;
        let code = response.status();
        let reply: Reply<T> = response.json().await?;
        trace!("reply {} (HTTP {code})", reply.status());

        Ok(check_response(reply)?)
    }

    /// Authenticated request without a body; returns the checked result.
    pub(crate) async fn fetch<T: DeserializeOwned>(&self, method: Method, path: &str) -> Result<T> {
        let builder = self.request(method, path, Access::Session)?;
        Ok(self.send(builder).await?.result)
    }

    /// Authenticated request with a JSON body; returns the checked result.
    pub(crate) async fn submit<T, B>(&self, method: Method, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let builder = self.request(method, path, Access::Session)?.json(body);
        Ok(self.send(builder).await?.result)
    }

    /// Authenticated call whose result carries nothing of interest.
    pub(crate) async fn action(&self, method: Method, path: &str) -> Result<()> {
        self.fetch::<IgnoredAny>(method, path).await.map(|_| ())
    }

    /// [`Client::action`] with a JSON body.
    pub(crate) async fn action_with<B>(&self, method: Method, path: &str, body: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.submit::<IgnoredAny, B>(method, path, body)
            .await
            .map(|_| ())
    }
}
