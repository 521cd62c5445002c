//! Request options, their defaults, and the JSON bodies they produce.
//!
//! Also holds the client-side lookup used by the "by id or by name" helpers:
//! the API has no filter for these, so the full collection is fetched and
//! scanned in order.

use serde::{Deserialize, Serialize};

use crate::icon::Icon;
use crate::reply::Pagination;
use crate::server::{MyServer, Server};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(format!("invalid sort order: {other}. Use asc or desc")),
        }
    }
}

/// Options for the public server listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    pub skip: u32,
    pub limit: u32,
    pub order: SortOrder,
}

impl Default for ListOptions {
    fn default() -> Self {
        ListOptions {
            skip: 0,
            limit: 500,
            order: SortOrder::Desc,
        }
    }
}

/// Options for browsing plugins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginSearch {
    pub search: String,
    pub skip: u32,
    pub limit: u32,
    pub order: SortOrder,
}

impl Default for PluginSearch {
    fn default() -> Self {
        PluginSearch {
            search: String::new(),
            skip: 0,
            limit: 25,
            order: SortOrder::Desc,
        }
    }
}

impl ListOptions {
    /// Options for the page after this one. `skip` stops at `u32::MAX`.
    pub fn next_page(&self) -> Self {
        ListOptions {
            skip: self.skip.saturating_add(self.limit),
            ..*self
        }
    }
}

impl PluginSearch {
    pub fn new(search: impl Into<String>) -> Self {
        PluginSearch {
            search: search.into(),
            ..Default::default()
        }
    }

    pub fn next_page(&self) -> Self {
        PluginSearch {
            skip: self.skip.saturating_add(self.limit),
            ..self.clone()
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PaginationBody {
    pub skip: u32,
    pub limit: u32,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct SortBody {
    pub field: &'static str,
    pub order: SortOrder,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct SearchFilter {
    pub search: String,
}

/// Body of `POST /servers/list`.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ServerListBody {
    pub pagination: PaginationBody,
    pub sort: SortBody,
}

impl From<ListOptions> for ServerListBody {
    fn from(options: ListOptions) -> Self {
        ServerListBody {
            pagination: PaginationBody {
                skip: options.skip,
                limit: options.limit,
            },
            sort: SortBody {
                field: "players.online",
                order: options.order,
            },
        }
    }
}

/// Body of `POST /plugins/browse`.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PluginBrowseBody {
    pub filters: SearchFilter,
    pub sort: SortBody,
    pub pagination: PaginationBody,
}

impl From<PluginSearch> for PluginBrowseBody {
    fn from(options: PluginSearch) -> Self {
        PluginBrowseBody {
            filters: SearchFilter {
                search: options.search,
            },
            sort: SortBody {
                field: "downloads",
                order: options.order,
            },
            pagination: PaginationBody {
                skip: options.skip,
                limit: options.limit,
            },
        }
    }
}

/// A page of a paginated listing.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Whether more items exist past this page.
    pub more: bool,
    /// Total number of items across all pages, when the API reports it.
    pub total: Option<u64>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, pagination: Option<Pagination>) -> Self {
        Page {
            items,
            more: pagination.map(|p| p.more).unwrap_or(false),
            total: pagination.map(|p| p.total),
        }
    }
}

// ============================================================================
// Lookup
// ============================================================================

/// Which field a "by id or by name" helper compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lookup {
    #[default]
    ById,
    ByName,
}

/// Entities that can be found by id or by name.
pub trait Identified {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
}

impl Identified for Server {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Identified for MyServer {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Identified for Icon {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Linear scan for the first item whose id (or name) equals `key`.
pub fn find_by<T: Identified>(items: Vec<T>, key: &str, lookup: Lookup) -> Option<T> {
    items.into_iter().find(|item| match lookup {
        Lookup::ById => item.id() == key,
        Lookup::ByName => item.name() == key,
    })
}

/// Id match first, then name match, over a single list.
pub fn find_by_id_or_name<T: Identified>(items: Vec<T>, key: &str) -> Option<T> {
    let index = items
        .iter()
        .position(|item| item.id() == key)
        .or_else(|| items.iter().position(|item| item.name() == key))?;
    items.into_iter().nth(index)
}
