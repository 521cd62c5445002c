//! Server icons.

use serde::{Deserialize, Serialize};

/// Icon as sent by the API.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IconReply {
    pub icon_id: String,
    pub item: String,
    pub name: String,
    pub image: String,
    #[serde(default)]
    pub credits: Option<u64>,
}

/// A purchasable server icon.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Icon {
    pub id: String,
    /// Minecraft item the icon is rendered from.
    pub item: String,
    pub name: String,
    pub image_url: String,
    /// Price in credits. Absent for icons embedded in a server.
    pub price: Option<u64>,
}

impl From<IconReply> for Icon {
    fn from(reply: IconReply) -> Self {
        Icon {
            id: reply.icon_id,
            item: reply.item,
            name: reply.name,
            image_url: reply.image,
            price: reply.credits,
        }
    }
}
