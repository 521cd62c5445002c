//! Async client for the Minefort server hosting API.
//!
//! This crate is the **Imperative Shell**: it performs the HTTP calls and
//! hands every reply to [`minefort_core`], which decodes it, checks the status
//! tag, and maps it into domain entities.
//!
//! # Example
//!
//! ```rust,no_run
//! use minefort::{Client, Lookup};
//!
//! # async fn run() -> minefort::Result<()> {
//! let client = Client::new()?;
//! client.auth().authenticate("me@example.com", "hunter2").await?;
//!
//! if let Some(server) = client.servers().my_server("lobby", Lookup::ByName).await? {
//!     server.wakeup().await?;
//!     for line in server.console().await? {
//!         println!("{line}");
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod error;
pub mod files;
pub mod icons;
pub mod network;
pub mod plugins;
pub mod servers;
pub mod user;

pub use auth::AuthManager;
pub use client::{Client, ClientConfig, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use files::FileManager;
pub use icons::IconManager;
pub use network::NetworkManager;
pub use plugins::PluginManager;
pub use servers::{ManagedServer, ServerManager};
pub use user::UserManager;

pub use minefort_core::options::{ListOptions, Lookup, Page, PluginSearch, SortOrder};
pub use minefort_core::ApiError;
pub use minefort_core;
