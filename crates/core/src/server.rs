//! Public and owned servers.
//!
//! Two shapes come back from the API: the public listing (`/servers/list`)
//! and the owner's view (`/user/servers`), which adds sub-users, usage,
//! backups, subscription and settings. Both embed an [`Icon`].

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::icon::{Icon, IconReply};

// ============================================================================
// Enumerations
// ============================================================================

/// Lifecycle state of a server, sent as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum ServerState {
    ServiceOffline,
    Uploading,
    Downloading,
    Starting,
    Online,
    Offline,
    CreatingBackup,
    RestoringBackup,
    Stopping,
    Unknown(u8),
}

impl From<u8> for ServerState {
    fn from(value: u8) -> Self {
        match value {
            0 => ServerState::ServiceOffline,
            1 => ServerState::Uploading,
            2 => ServerState::Downloading,
            3 => ServerState::Starting,
            4 => ServerState::Online,
            5 => ServerState::Offline,
            6 => ServerState::CreatingBackup,
            7 => ServerState::RestoringBackup,
            8 => ServerState::Stopping,
            other => ServerState::Unknown(other),
        }
    }
}

impl From<ServerState> for u8 {
    fn from(state: ServerState) -> Self {
        match state {
            ServerState::ServiceOffline => 0,
            ServerState::Uploading => 1,
            ServerState::Downloading => 2,
            ServerState::Starting => 3,
            ServerState::Online => 4,
            ServerState::Offline => 5,
            ServerState::CreatingBackup => 6,
            ServerState::RestoringBackup => 7,
            ServerState::Stopping => 8,
            ServerState::Unknown(other) => other,
        }
    }
}

impl std::fmt::Display for ServerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServerState::ServiceOffline => write!(f, "service offline"),
            ServerState::Uploading => write!(f, "uploading"),
            ServerState::Downloading => write!(f, "downloading"),
            ServerState::Starting => write!(f, "starting"),
            ServerState::Online => write!(f, "online"),
            ServerState::Offline => write!(f, "offline"),
            ServerState::CreatingBackup => write!(f, "creating backup"),
            ServerState::RestoringBackup => write!(f, "restoring backup"),
            ServerState::Stopping => write!(f, "stopping"),
            ServerState::Unknown(code) => write!(f, "unknown ({code})"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServerCategory {
    Default,
    Skyblock,
    Survival,
    Creative,
    Gens,
    Prison,
    Pvp,
    Adventure,
    #[serde(other)]
    Other,
}

/// Permission level of a sub-user, sent as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum SubUserRole {
    Viewer,
    Moderator,
    Admin,
    Owner,
    Unknown(u8),
}

impl From<u8> for SubUserRole {
    fn from(value: u8) -> Self {
        match value {
            0 => SubUserRole::Viewer,
            1 => SubUserRole::Moderator,
            2 => SubUserRole::Admin,
            3 => SubUserRole::Owner,
            other => SubUserRole::Unknown(other),
        }
    }
}

impl From<SubUserRole> for u8 {
    fn from(role: SubUserRole) -> Self {
        match role {
            SubUserRole::Viewer => 0,
            SubUserRole::Moderator => 1,
            SubUserRole::Admin => 2,
            SubUserRole::Owner => 3,
            SubUserRole::Unknown(code) => code,
        }
    }
}

impl std::str::FromStr for SubUserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "viewer" => Ok(SubUserRole::Viewer),
            "moderator" => Ok(SubUserRole::Moderator),
            "admin" => Ok(SubUserRole::Admin),
            "owner" => Ok(SubUserRole::Owner),
            other => Err(format!(
                "unknown role: {other}. Valid roles: viewer, moderator, admin, owner"
            )),
        }
    }
}

/// Keys accepted by the properties endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServerProperty {
    Cosmetics,
    OfflineSupport,
    BedrockSupport,
    Version,
    LobbyVisible,
    StartupCommand,
    LevelType,
    LevelName,
    GeneratorSettings,
    Gamemode,
    ForceGamemode,
    Pvp,
    SpawnMonsters,
    SpawnAnimals,
    AllowFlight,
    Difficulty,
    Hardcore,
    EnableCommandBlock,
    GenerateStructures,
    AllowNether,
    ResourcePack,
}

impl ServerProperty {
    pub const ALL: [ServerProperty; 21] = [
        ServerProperty::Cosmetics,
        ServerProperty::OfflineSupport,
        ServerProperty::BedrockSupport,
        ServerProperty::Version,
        ServerProperty::LobbyVisible,
        ServerProperty::StartupCommand,
        ServerProperty::LevelType,
        ServerProperty::LevelName,
        ServerProperty::GeneratorSettings,
        ServerProperty::Gamemode,
        ServerProperty::ForceGamemode,
        ServerProperty::Pvp,
        ServerProperty::SpawnMonsters,
        ServerProperty::SpawnAnimals,
        ServerProperty::AllowFlight,
        ServerProperty::Difficulty,
        ServerProperty::Hardcore,
        ServerProperty::EnableCommandBlock,
        ServerProperty::GenerateStructures,
        ServerProperty::AllowNether,
        ServerProperty::ResourcePack,
    ];

    /// Wire name, e.g. `offline-support`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ServerProperty::Cosmetics => "cosmetics",
            ServerProperty::OfflineSupport => "offline-support",
            ServerProperty::BedrockSupport => "bedrock-support",
            ServerProperty::Version => "version",
            ServerProperty::LobbyVisible => "lobby-visible",
            ServerProperty::StartupCommand => "startup-command",
            ServerProperty::LevelType => "level-type",
            ServerProperty::LevelName => "level-name",
            ServerProperty::GeneratorSettings => "generator-settings",
            ServerProperty::Gamemode => "gamemode",
            ServerProperty::ForceGamemode => "force-gamemode",
            ServerProperty::Pvp => "pvp",
            ServerProperty::SpawnMonsters => "spawn-monsters",
            ServerProperty::SpawnAnimals => "spawn-animals",
            ServerProperty::AllowFlight => "allow-flight",
            ServerProperty::Difficulty => "difficulty",
            ServerProperty::Hardcore => "hardcore",
            ServerProperty::EnableCommandBlock => "enable-command-block",
            ServerProperty::GenerateStructures => "generate-structures",
            ServerProperty::AllowNether => "allow-nether",
            ServerProperty::ResourcePack => "resource-pack",
        }
    }
}

impl std::str::FromStr for ServerProperty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServerProperty::ALL
            .into_iter()
            .find(|property| property.as_str() == s)
            .ok_or_else(|| format!("unknown server property: {s}"))
    }
}

/// Primitive value stored under a server property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    Null,
}

impl std::fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyValue::Bool(value) => write!(f, "{value}"),
            PropertyValue::Integer(value) => write!(f, "{value}"),
            PropertyValue::Float(value) => write!(f, "{value}"),
            PropertyValue::Text(value) => f.write_str(value),
            PropertyValue::Null => f.write_str("null"),
        }
    }
}

/// Reads command line input: booleans and canonical numbers first, text otherwise.
impl std::str::FromStr for PropertyValue {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(value) = s.parse::<bool>() {
            return Ok(PropertyValue::Bool(value));
        }
        // Numbers only when they print back exactly as typed, so "1.20" or
        // "007" reach the server unchanged.
        if let Ok(value) = s.parse::<i64>() {
            if value.to_string() == s {
                return Ok(PropertyValue::Integer(value));
            }
        }
        if let Ok(value) = s.parse::<f64>() {
            if value.is_finite() && value.to_string() == s {
                return Ok(PropertyValue::Float(value));
            }
        }
        Ok(PropertyValue::Text(s.to_string()))
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Integer(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Text(value)
    }
}

/// Property map as returned by `/server/{id}/properties`.
pub type ServerProperties = BTreeMap<String, PropertyValue>;

/// Split console output into lines.
pub fn console_lines(output: &str) -> Vec<String> {
    output.split('\n').map(str::to_string).collect()
}

// ============================================================================
// Domain Models (Input from API)
// ============================================================================

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PlayerReply {
    pub name: String,
    pub uuid: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PlayerUuidReply {
    pub uuid: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PublicPlayersReply {
    pub online: u32,
    #[serde(default)]
    pub list: Option<Vec<PlayerUuidReply>>,
    pub max: u32,
}

/// Server in the public listing.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServerReply {
    pub server_id: String,
    pub server_name: String,
    pub server_icon: IconReply,
    pub user_id: String,
    pub version: String,
    pub state: ServerState,
    pub message_of_the_day: String,
    pub players: PublicPlayersReply,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubUserReply {
    pub user_id: String,
    #[serde(default)]
    pub email: Option<String>,
    pub role: SubUserRole,
    pub accepted: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SupportReply {
    pub offline: bool,
    pub bedrock: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct UsageReply {
    pub ram: f64,
    pub disk: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BackupReply {
    pub backup_id: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionReply {
    pub current_package_id: u64,
    #[serde(default)]
    pub next_package_id: Option<u64>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SettingsReply {
    pub lobby_visible: bool,
    pub startup_command: u32,
    pub cosmetics: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OwnerPlayersReply {
    pub online: u32,
    #[serde(default)]
    pub list: Vec<PlayerReply>,
    pub max: u32,
}

/// Server as seen by its owner.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MyServerReply {
    pub server_id: String,
    pub server_name: String,
    pub server_icon: IconReply,
    pub user_id: String,
    pub version: String,
    pub category: ServerCategory,
    #[serde(default)]
    pub sub_users: Vec<SubUserReply>,
    pub state: ServerState,
    pub support: SupportReply,
    pub usage: UsageReply,
    #[serde(default)]
    pub backups: Option<Vec<BackupReply>>,
    pub subscription: SubscriptionReply,
    #[serde(default)]
    pub unlocked_icons: Vec<IconReply>,
    pub settings: SettingsReply,
    pub message_of_the_day: String,
    pub players: OwnerPlayersReply,
}

/// Result of `/server/create`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreatedServerReply {
    pub server_id: String,
}

// ============================================================================
// Output Models (Domain Model)
// ============================================================================

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PlayerCount {
    /// Number of players currently connected.
    pub count: u32,
    /// UUIDs of connected players. Empty when the API omits the list.
    pub online: Vec<String>,
    pub max: u32,
}

/// A server from the public listing.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Server {
    pub id: String,
    pub name: String,
    pub icon: Icon,
    pub owner_id: String,
    pub version: String,
    pub state: ServerState,
    pub motd: String,
    pub players: PlayerCount,
}

impl From<ServerReply> for Server {
    fn from(reply: ServerReply) -> Self {
        Server {
            id: reply.server_id,
            name: reply.server_name,
            icon: reply.server_icon.into(),
            owner_id: reply.user_id,
            version: reply.version,
            state: reply.state,
            motd: reply.message_of_the_day,
            players: PlayerCount {
                count: reply.players.online,
                online: reply
                    .players
                    .list
                    .unwrap_or_default()
                    .into_iter()
                    .map(|player| player.uuid)
                    .collect(),
                max: reply.players.max,
            },
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct SubUser {
    pub user_id: String,
    pub email: Option<String>,
    pub role: SubUserRole,
    pub accepted: bool,
}

impl From<SubUserReply> for SubUser {
    fn from(reply: SubUserReply) -> Self {
        SubUser {
            user_id: reply.user_id,
            email: reply.email,
            role: reply.role,
            accepted: reply.accepted,
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Support {
    /// Cracked (offline-mode) players may join.
    pub offline: bool,
    /// Bedrock players may join.
    pub bedrock: bool,
}

/// Resource usage in megabytes.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Usage {
    pub ram_usage: f64,
    pub disk_usage: f64,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Backup {
    pub id: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Subscription {
    pub current_package_id: u64,
    pub next_package_id: Option<u64>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Settings {
    pub lobby_visible: bool,
    pub startup_command: u32,
    pub cosmetics: bool,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Player {
    pub name: String,
    pub uuid: String,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PlayerList {
    pub count: u32,
    pub online: Vec<Player>,
    pub max: u32,
}

/// A server owned by (or shared with) the authenticated user.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct MyServer {
    pub id: String,
    pub name: String,
    pub icon: Icon,
    pub user_id: String,
    pub version: String,
    pub category: ServerCategory,
    pub sub_users: Vec<SubUser>,
    pub state: ServerState,
    pub support: Support,
    pub usage: Usage,
    pub backups: Vec<Backup>,
    pub subscription: Subscription,
    pub unlocked_icons: Vec<Icon>,
    pub settings: Settings,
    pub motd: String,
    pub players: PlayerList,
}

impl From<MyServerReply> for MyServer {
    fn from(reply: MyServerReply) -> Self {
        MyServer {
            id: reply.server_id,
            name: reply.server_name,
            icon: reply.server_icon.into(),
            user_id: reply.user_id,
            version: reply.version,
            category: reply.category,
            sub_users: reply.sub_users.into_iter().map(SubUser::from).collect(),
            state: reply.state,
            support: Support {
                offline: reply.support.offline,
                bedrock: reply.support.bedrock,
            },
            usage: Usage {
                ram_usage: reply.usage.ram,
                disk_usage: reply.usage.disk,
            },
            backups: reply
                .backups
                .unwrap_or_default()
                .into_iter()
                .map(|backup| Backup {
                    id: backup.backup_id,
                    created_at: backup.date,
                })
                .collect(),
            subscription: Subscription {
                current_package_id: reply.subscription.current_package_id,
                next_package_id: reply.subscription.next_package_id,
            },
            unlocked_icons: reply.unlocked_icons.into_iter().map(Icon::from).collect(),
            settings: Settings {
                lobby_visible: reply.settings.lobby_visible,
                startup_command: reply.settings.startup_command,
                cosmetics: reply.settings.cosmetics,
            },
            motd: reply.message_of_the_day,
            players: PlayerList {
                count: reply.players.online,
                online: reply
                    .players
                    .list
                    .into_iter()
                    .map(|player| Player {
                        name: player.name,
                        uuid: player.uuid,
                    })
                    .collect(),
                max: reply.players.max,
            },
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
