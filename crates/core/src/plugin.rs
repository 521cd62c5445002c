use serde::{Deserialize, Serialize};

/// Plugin as sent by `/plugins/browse`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PluginReply {
    pub plugin_id: String,
    pub version_id: u64,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub installable: bool,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Plugin {
    pub id: String,
    pub version_id: u64,
    pub name: String,
    pub description: String,
    /// URL of the plugin's icon.
    pub icon: String,
    pub installable: bool,
}

impl From<PluginReply> for Plugin {
    fn from(reply: PluginReply) -> Self {
        Plugin {
            id: reply.plugin_id,
            version_id: reply.version_id,
            name: reply.name,
            description: reply.description,
            icon: reply.icon,
            installable: reply.installable,
        }
    }
}
