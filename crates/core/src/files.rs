//! Server file system paths and listings.
//!
//! The file endpoints address everything relative to a fixed `root`
//! directory and take a path as two fields: the directory (`filePath`) and
//! the leaf (`fileName`). Callers pass plain paths such as `logs/latest.log`;
//! [`normalize_path`] and [`split_path`] turn them into what the API expects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Root segment every server path lives under.
pub const ROOT_SEGMENT: &str = "root";

/// Prefix `root/` unless the path already starts with it.
///
/// Idempotent: normalizing a normalized path returns it unchanged.
pub fn normalize_path(path: &str) -> String {
    let prefix = format!("{ROOT_SEGMENT}/");
    if path.starts_with(&prefix) {
        path.to_string()
    } else {
        format!("{prefix}{path}")
    }
}

/// Directory and leaf parts of a path, serialized as the API's
/// `filePath` / `fileName` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitPath {
    pub file_path: String,
    pub file_name: String,
}

impl SplitPath {
    /// Rejoin the two parts with `/`.
    pub fn join(&self) -> String {
        if self.file_path.is_empty() {
            self.file_name.clone()
        } else {
            format!("{}/{}", self.file_path, self.file_name)
        }
    }
}

/// Split a path at its last `/`.
///
/// Does not normalize; use [`split_normalized`] for caller-provided paths.
pub fn split_path(path: &str) -> SplitPath {
    match path.rsplit_once('/') {
        Some((dir, name)) => SplitPath {
            file_path: dir.to_string(),
            file_name: name.to_string(),
        },
        None => SplitPath {
            file_path: String::new(),
            file_name: path.to_string(),
        },
    }
}

/// [`normalize_path`] followed by [`split_path`].
pub fn split_normalized(path: &str) -> SplitPath {
    split_path(&normalize_path(path))
}

/// What to create with `/files/create`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CreateKind {
    #[serde(rename = "file")]
    File,
    #[serde(rename = "folder")]
    Directory,
}

impl std::str::FromStr for CreateKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "file" => Ok(CreateKind::File),
            "directory" | "folder" | "dir" => Ok(CreateKind::Directory),
            other => Err(format!("unknown file type: {other}. Use file or directory")),
        }
    }
}

// ============================================================================
// Listing
// ============================================================================

/// Entry of `/files/list`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FileReply {
    pub name: String,
    #[serde(rename = "type", default)]
    pub file_type: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub last_modified: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FileKind {
    File,
    Directory,
    Other(String),
}

impl From<Option<String>> for FileKind {
    fn from(file_type: Option<String>) -> Self {
        match file_type.as_deref() {
            Some("file") | None => FileKind::File,
            Some("folder") | Some("directory") => FileKind::Directory,
            Some(other) => FileKind::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct FileEntry {
    pub name: String,
    pub kind: FileKind,
    /// Size in bytes.
    pub size: Option<u64>,
    pub modified_at: Option<DateTime<Utc>>,
}

impl FileEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == FileKind::Directory
    }
}

impl From<FileReply> for FileEntry {
    fn from(reply: FileReply) -> Self {
        FileEntry {
            name: reply.name,
            kind: reply.file_type.into(),
            size: reply.size,
            modified_at: reply.last_modified,
        }
    }
}
