use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: u64,
    pub owner_id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
}
