pub mod database;
pub mod file_store;

use std::io;

use chrono::NaiveDate;
use thiserror::Error;

use crate::model::{Playlist, User};

pub use database::Database;
pub use file_store::FileStore;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{kind} {id} does not exist")]
    NotFound { kind: &'static str, id: u64 },
    #[error("store io failed: {0}")]
    Io(#[from] io::Error),
    #[error("store file is corrupt: {0}")]
    Json(#[from] serde_json::Error),
}

/// Per-field persistence for user profiles. Every update returns the record
/// as stored after the write.
pub trait UserStore {
    fn get_by_id(&self, id: u64) -> StoreResult<Option<User>>;
    fn find_by_first_name(&self, first_name: &str) -> StoreResult<Vec<User>>;
    fn update_first_name(&self, user: &User, first_name: &str) -> StoreResult<User>;
    fn update_last_name(&self, user: &User, last_name: &str) -> StoreResult<User>;
    fn update_email(&self, user: &User, email: &str) -> StoreResult<User>;
    fn update_avatar(&self, user: &User, avatar: &str) -> StoreResult<User>;
    fn update_bio(&self, user: &User, bio: &str) -> StoreResult<User>;
    fn update_born_date(&self, user: &User, born_date: NaiveDate) -> StoreResult<User>;
}

pub trait PlaylistStore {
    fn get_playlist(&self, id: u64) -> StoreResult<Option<Playlist>>;
    fn update_playlist_name(&self, playlist: &Playlist, name: &str) -> StoreResult<Playlist>;
    fn update_description(&self, playlist: &Playlist, description: &str)
    -> StoreResult<Playlist>;
}
