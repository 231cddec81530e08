use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{Playlist, User};

use super::{StoreError, StoreResult};

/// Serialized contents of the store file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Database {
    #[serde(default)]
    pub users: BTreeMap<u64, User>,
    #[serde(default)]
    pub playlists: BTreeMap<u64, Playlist>,
}

impl Database {
    pub fn with_user(mut self, user: User) -> Self {
        self.users.insert(user.id, user);
        self
    }

    pub fn with_playlist(mut self, playlist: Playlist) -> Self {
        self.playlists.insert(playlist.id, playlist);
        self
    }

    pub fn user(&self, id: u64) -> Option<&User> {
        self.users.get(&id)
    }

    pub fn user_mut(&mut self, id: u64) -> StoreResult<&mut User> {
        self.users
            .get_mut(&id)
            .ok_or(StoreError::NotFound { kind: "user", id })
    }

    pub fn users_by_first_name(&self, first_name: &str) -> Vec<User> {
        self.users
            .values()
            .filter(|user| user.first_name.eq_ignore_ascii_case(first_name))
            .cloned()
            .collect()
    }

    pub fn playlist(&self, id: u64) -> Option<&Playlist> {
        self.playlists.get(&id)
    }

    pub fn playlist_mut(&mut self, id: u64) -> StoreResult<&mut Playlist> {
        self.playlists
            .get_mut(&id)
            .ok_or(StoreError::NotFound {
                kind: "playlist",
                id,
            })
    }
}
