//! File system of an owned server.
//!
//! Every path goes through [`normalize_path`] first, so `logs/latest.log` and
//! `root/logs/latest.log` address the same file.

use log::debug;
use minefort_core::files::{
    normalize_path, split_normalized, CreateKind, FileEntry, FileReply, SplitPath,
};
use reqwest::Method;
use serde::Serialize;

use crate::client::{Access, Client};
use crate::error::Result;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateBody<'a> {
    #[serde(flatten)]
    location: &'a SplitPath,
    file_type: CreateKind,
}

#[derive(Debug, Serialize)]
struct WriteBody<'a> {
    #[serde(flatten)]
    location: &'a SplitPath,
    content: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RenameBody<'a> {
    #[serde(flatten)]
    location: &'a SplitPath,
    new_file_name: &'a str,
}

#[derive(Debug, Clone)]
pub struct FileManager {
    client: Client,
    server_id: String,
}

impl FileManager {
    pub fn new(client: Client, server_id: impl Into<String>) -> Self {
        Self {
            client,
            server_id: server_id.into(),
        }
    }

    pub fn server_id(&self) -> &str {
        &self.server_id
    }

    fn path(&self, action: &str) -> String {
        format!(
            "/server/{}/files/{action}",
            urlencoding::encode(&self.server_id)
        )
    }

    /// Entries of the directory at `path`. Pass `""` for the server root.
    pub async fn list(&self, path: &str) -> Result<Vec<FileEntry>> {
        let builder = self
            .client
            .request(Method::GET, &self.path("list"), Access::Session)?
            .query(&[("path", normalize_path(path))]);
        let replies = self.client.send::<Vec<FileReply>>(builder).await?.result;

        Ok(replies.into_iter().map(FileEntry::from).collect())
    }

    /// Contents of the file at `path`.
    pub async fn read(&self, path: &str) -> Result<String> {
        let location = split_normalized(path);
        let builder = self
            .client
            .request(Method::GET, &self.path("read"), Access::Session)?
            .query(&location);

        Ok(self.client.send(builder).await?.result)
    }

    /// Replace the contents of the file at `path`.
    pub async fn write(&self, path: &str, content: &str) -> Result<()> {
        let location = split_normalized(path);
        debug!("write {} ({} bytes)", location.join(), content.len());

        self.client
            .action_with(
                Method::POST,
                &self.path("write"),
                &WriteBody {
                    location: &location,
                    content,
                },
            )
            .await
    }

    pub async fn create(&self, path: &str, kind: CreateKind) -> Result<()> {
        let location = split_normalized(path);

        self.client
            .action_with(
                Method::POST,
                &self.path("create"),
                &CreateBody {
                    location: &location,
                    file_type: kind,
                },
            )
            .await
    }

    pub async fn delete(&self, path: &str) -> Result<()> {
        let location = split_normalized(path);
        debug!("remove {}", location.join());

        self.client
            .action_with(Method::POST, &self.path("remove"), &location)
            .await
    }

    /// Rename in place; `new_name` is a leaf name, not a path.
    pub async fn rename(&self, path: &str, new_name: &str) -> Result<()> {
        let location = split_normalized(path);

        self.client
            .action_with(
                Method::POST,
                &self.path("rename"),
                &RenameBody {
                    location: &location,
                    new_file_name: new_name,
                },
            )
            .await
    }
}
