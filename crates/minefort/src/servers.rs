//! Public server listing, owned servers, and the actions available on them.

use std::ops::Deref;

use log::debug;
use minefort_core::options::{find_by, Identified, ListOptions, Lookup, Page, ServerListBody};
use minefort_core::server::{
    console_lines, CreatedServerReply, MyServer, MyServerReply, PropertyValue, Server,
    ServerProperties, ServerProperty, ServerReply, SubUser, SubUserReply, SubUserRole,
};
use reqwest::Method;
use serde::Serialize;

use crate::client::{Access, Client};
use crate::error::Result;
use crate::files::FileManager;

/// Template used by [`ServerManager::create`].
pub const DEFAULT_TEMPLATE: &str = "default";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ServerNameBody<'a> {
    server_name: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateServerBody<'a> {
    server_name: &'a str,
    template: &'a str,
}

#[derive(Debug, Serialize)]
struct PasswordBody<'a> {
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct PropertyBody<'a> {
    property: ServerProperty,
    value: &'a PropertyValue,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SubUserBody<'a> {
    user_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<SubUserRole>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InviteBody<'a> {
    email_address: &'a str,
    role: SubUserRole,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MotdBody<'a> {
    message_of_the_day: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct IconBody<'a> {
    icon_id: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PluginBody<'a> {
    plugin_id: &'a str,
}

#[derive(Debug, Clone)]
pub struct ServerManager {
    client: Client,
}

impl ServerManager {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Whether no server uses `name` yet.
    pub async fn is_name_available(&self, name: &str) -> Result<bool> {
        self.client
            .submit(
                Method::POST,
                "/server/availability",
                &ServerNameBody { server_name: name },
            )
            .await
    }

    /// Servers currently online, most players first by default.
    pub async fn online_servers(&self, options: ListOptions) -> Result<Vec<Server>> {
        Ok(self.online_servers_page(options).await?.items)
    }

    /// Like [`ServerManager::online_servers`], keeping the pagination block.
    pub async fn online_servers_page(&self, options: ListOptions) -> Result<Page<Server>> {
        let builder = self
            .client
            .request(Method::POST, "/servers/list", Access::Public)?
            .json(&ServerListBody::from(options));
        let success = self.client.send::<Vec<ServerReply>>(builder).await?;

        let servers = success.result.into_iter().map(Server::from).collect();
        Ok(Page::new(servers, success.pagination))
    }

    /// Scan the default listing for one server.
    pub async fn online_server(&self, key: &str, lookup: Lookup) -> Result<Option<Server>> {
        let servers = self.online_servers(ListOptions::default()).await?;
        Ok(find_by(servers, key, lookup))
    }

    /// Servers owned by, or shared with, the authenticated user.
    pub async fn my_servers(&self) -> Result<Vec<ManagedServer>> {
        let replies: Vec<MyServerReply> = self.client.fetch(Method::GET, "/user/servers").await?;

        Ok(replies
            .into_iter()
            .map(|reply| ManagedServer::new(self.client.clone(), reply.into()))
            .collect())
    }

    pub async fn my_server(&self, key: &str, lookup: Lookup) -> Result<Option<ManagedServer>> {
        let replies: Vec<MyServerReply> = self.client.fetch(Method::GET, "/user/servers").await?;
        let servers: Vec<MyServer> = replies.into_iter().map(MyServer::from).collect();

        Ok(find_by(servers, key, lookup).map(|server| ManagedServer::new(self.client.clone(), server)))
    }

    /// Create a server from the default template. Returns the new server id.
    pub async fn create(&self, name: &str) -> Result<String> {
        self.create_from_template(name, DEFAULT_TEMPLATE).await
    }

    pub async fn create_from_template(&self, name: &str, template: &str) -> Result<String> {
        let created: CreatedServerReply = self
            .client
            .submit(
                Method::POST,
                "/server/create",
                &CreateServerBody {
                    server_name: name,
                    template,
                },
            )
            .await?;
        debug!("created server {} ({name})", created.server_id);

        Ok(created.server_id)
    }
}

/// An owned server plus the client needed to act on it.
///
/// Dereferences to the [`MyServer`] snapshot it was fetched with. Actions
/// never refresh that snapshot; fetch the server again to observe a change.
#[derive(Debug, Clone)]
pub struct ManagedServer {
    client: Client,
    server: MyServer,
}

impl Deref for ManagedServer {
    type Target = MyServer;

    fn deref(&self) -> &Self::Target {
        &self.server
    }
}

impl Identified for ManagedServer {
    fn id(&self) -> &str {
        &self.server.id
    }

    fn name(&self) -> &str {
        &self.server.name
    }
}

impl ManagedServer {
    pub fn new(client: Client, server: MyServer) -> Self {
        Self { client, server }
    }

    pub fn info(&self) -> &MyServer {
        &self.server
    }

    pub fn into_inner(self) -> MyServer {
        self.server
    }

    /// File system of this server.
    pub fn files(&self) -> FileManager {
        FileManager::new(self.client.clone(), self.server.id.clone())
    }

    fn path(&self, suffix: &str) -> String {
        format!("/server/{}{suffix}", urlencoding::encode(&self.server.id))
    }

    async fn lifecycle(&self, action: &str) -> Result<()> {
        debug!("{action} server {}", self.server.id);
        self.client
            .action(Method::POST, &self.path(&format!("/{action}")))
            .await
    }

    /// Wake a hibernating server.
    pub async fn wakeup(&self) -> Result<()> {
        self.lifecycle("wakeup").await
    }

    pub async fn start(&self) -> Result<()> {
        self.lifecycle("start").await
    }

    pub async fn stop(&self) -> Result<()> {
        self.lifecycle("stop").await
    }

    /// Stop without saving.
    pub async fn kill(&self) -> Result<()> {
        self.lifecycle("kill").await
    }

    /// Put the server into hibernation.
    pub async fn sleep(&self) -> Result<()> {
        self.lifecycle("sleep").await
    }

    pub async fn repair(&self) -> Result<()> {
        self.lifecycle("repair").await
    }

    /// Wipe the server back to its template.
    pub async fn reset(&self) -> Result<()> {
        self.lifecycle("reset").await
    }

    /// Delete the server. Needs the account password.
    pub async fn delete(&self, password: &str) -> Result<()> {
        debug!("delete server {}", self.server.id);
        self.client
            .action_with(Method::DELETE, &self.path(""), &PasswordBody { password })
            .await
    }

    /// Console output, one entry per line.
    pub async fn console(&self) -> Result<Vec<String>> {
        let output: String = self.client.fetch(Method::GET, &self.path("/console")).await?;
        Ok(console_lines(&output))
    }

    pub async fn properties(&self) -> Result<ServerProperties> {
        self.client.fetch(Method::GET, &self.path("/properties")).await
    }

    pub async fn set_property(
        &self,
        property: ServerProperty,
        value: impl Into<PropertyValue>,
    ) -> Result<()> {
        let value = value.into();
        self.client
            .action_with(
                Method::POST,
                &self.path("/properties"),
                &PropertyBody {
                    property,
                    value: &value,
                },
            )
            .await
    }

    pub async fn sub_users(&self) -> Result<Vec<SubUser>> {
        let replies: Vec<SubUserReply> =
            self.client.fetch(Method::GET, &self.path("/subusers")).await?;
        Ok(replies.into_iter().map(SubUser::from).collect())
    }

    pub async fn update_sub_user(&self, user_id: &str, role: SubUserRole) -> Result<()> {
        self.client
            .action_with(
                Method::POST,
                &self.path("/subusers/update"),
                &SubUserBody {
                    user_id,
                    role: Some(role),
                },
            )
            .await
    }

    pub async fn delete_sub_user(&self, user_id: &str) -> Result<()> {
        self.client
            .action_with(
                Method::DELETE,
                &self.path("/subusers"),
                &SubUserBody {
                    user_id,
                    role: None,
                },
            )
            .await
    }

    pub async fn invite_sub_user(&self, email: &str, role: SubUserRole) -> Result<()> {
        self.client
            .action_with(
                Method::POST,
                &self.path("/subusers/invite"),
                &InviteBody {
                    email_address: email,
                    role,
                },
            )
            .await
    }

    pub async fn set_motd(&self, motd: &str) -> Result<()> {
        self.client
            .action_with(
                Method::POST,
                &self.path("/motd"),
                &MotdBody {
                    message_of_the_day: motd,
                },
            )
            .await
    }

    pub async fn set_name(&self, name: &str) -> Result<()> {
        self.client
            .action_with(
                Method::POST,
                &self.path("/name"),
                &ServerNameBody { server_name: name },
            )
            .await
    }

    /// Pass an id from the icon catalogue (`Icon::id`).
    pub async fn set_icon(&self, icon_id: &str) -> Result<()> {
        self.client
            .action_with(Method::POST, &self.path("/icon"), &IconBody { icon_id })
            .await
    }

    /// Pass an id from the plugin catalogue (`Plugin::id`).
    pub async fn install_plugin(&self, plugin_id: &str) -> Result<()> {
        let path = format!("/plugins/{}/install", urlencoding::encode(&self.server.id));
        self.client
            .action_with(Method::POST, &path, &PluginBody { plugin_id })
            .await
    }
}
