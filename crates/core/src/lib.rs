//! Core library for the Minefort API client
//!
//! This crate is the **Functional Core** of the client: everything that can
//! be expressed without I/O lives here, and the `minefort` crate wraps it with
//! HTTP calls (the Imperative Shell).
//!
//! # What lives here
//!
//! - [`reply`]: the reply envelope as a sum type, and [`check_response`], the
//!   single place where a status tag becomes either a result or an error
//! - [`status`]: status tags, structured validation errors, and [`ApiError`]
//! - Domain modules ([`server`], [`icon`], [`plugin`], [`article`], [`user`],
//!   [`files`]): the wire shape of each payload (`*Reply`) and the entity it
//!   maps to through `From`
//! - [`options`]: request defaults, request bodies, and the client-side
//!   "by id or by name" lookup
//! - [`session`]: the `minefort-session` cookie, both directions
//!
//! All mappings are pure and total. Tests use fixture JSON, no mocking.
//!
//! # Example
//!
//! ```rust
//! use minefort_core::reply::{check_result, Reply};
//! use minefort_core::icon::{Icon, IconReply};
//!
//! let reply: Reply<Vec<IconReply>> = serde_json::from_str(
//!     r#"{"status":"OK","result":[{"iconId":"i1","item":"DIRT","name":"Dirt","image":"dirt.png"}]}"#,
//! )
//! .unwrap();
//!
//! let icons: Vec<Icon> = check_result(reply)
//!     .unwrap()
//!     .into_iter()
//!     .map(Icon::from)
//!     .collect();
//! assert_eq!(icons[0].id, "i1");
//! assert_eq!(icons[0].price, None);
//! ```

pub mod article;
pub mod files;
pub mod icon;
pub mod options;
pub mod plugin;
pub mod reply;
pub mod server;
pub mod session;
pub mod status;
pub mod user;

pub use reply::{check_response, check_result, Reply};
pub use status::{ApiError, ResponseStatus};
