use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tempfile::NamedTempFile;

use crate::model::{Playlist, User};

use super::{Database, PlaylistStore, StoreResult, UserStore};

/// JSON-file backed store. Each update is a separate read-modify-write of the
/// whole file; there is no transaction spanning several updates.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> StoreResult<Database> {
        if !self.path.exists() {
            return Ok(Database::default());
        }

        let raw = fs::read_to_string(&self.path)?;
        let database = serde_json::from_str(&raw)?;
        Ok(database)
    }

    /// Stages the new contents in a sibling temp file and renames it over the
    /// store, so readers see either the old or the new database in full.
    pub fn save(&self, database: &Database) -> StoreResult<()> {
        let parent = self
            .path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent)?;

        let payload = serde_json::to_string_pretty(database)?;
        let mut staged = NamedTempFile::new_in(parent)?;
        staged.write_all(payload.as_bytes())?;
        staged.as_file().sync_all()?;
        staged.persist(&self.path).map_err(|err| err.error)?;
        Ok(())
    }

    fn update_user(&self, user: &User, apply: impl FnOnce(&mut User)) -> StoreResult<User> {
        let mut database = self.load()?;
        let stored = database.user_mut(user.id)?;
        apply(stored);
        let updated = stored.clone();
        self.save(&database)?;
        Ok(updated)
    }

    fn update_playlist(
        &self,
        playlist: &Playlist,
        apply: impl FnOnce(&mut Playlist),
    ) -> StoreResult<Playlist> {
        let mut database = self.load()?;
        let stored = database.playlist_mut(playlist.id)?;
        apply(stored);
        let updated = stored.clone();
        self.save(&database)?;
        Ok(updated)
    }
}

impl UserStore for FileStore {
    fn get_by_id(&self, id: u64) -> StoreResult<Option<User>> {
        Ok(self.load()?.user(id).cloned())
    }

    fn find_by_first_name(&self, first_name: &str) -> StoreResult<Vec<User>> {
        Ok(self.load()?.users_by_first_name(first_name))
    }

    fn update_first_name(&self, user: &User, first_name: &str) -> StoreResult<User> {
        self.update_user(user, |stored| stored.first_name = first_name.to_string())
    }

    fn update_last_name(&self, user: &User, last_name: &str) -> StoreResult<User> {
        self.update_user(user, |stored| stored.last_name = last_name.to_string())
    }

    fn update_email(&self, user: &User, email: &str) -> StoreResult<User> {
        self.update_user(user, |stored| stored.email = email.to_string())
    }

    fn update_avatar(&self, user: &User, avatar: &str) -> StoreResult<User> {
        self.update_user(user, |stored| stored.avatar = avatar.to_string())
    }

    fn update_bio(&self, user: &User, bio: &str) -> StoreResult<User> {
        self.update_user(user, |stored| stored.bio = bio.to_string())
    }

    fn update_born_date(&self, user: &User, born_date: NaiveDate) -> StoreResult<User> {
        self.update_user(user, |stored| stored.born_date = born_date)
    }
}

impl PlaylistStore for FileStore {
    fn get_playlist(&self, id: u64) -> StoreResult<Option<Playlist>> {
        Ok(self.load()?.playlist(id).cloned())
    }

    fn update_playlist_name(&self, playlist: &Playlist, name: &str) -> StoreResult<Playlist> {
        self.update_playlist(playlist, |stored| stored.name = name.to_string())
    }

    fn update_description(
        &self,
        playlist: &Playlist,
        description: &str,
    ) -> StoreResult<Playlist> {
        self.update_playlist(playlist, |stored| {
            stored.description = description.to_string()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;

    fn sample_user() -> User {
        User {
            id: 4,
            user_name: "jolee".to_string(),
            first_name: "Jo".to_string(),
            last_name: "Lee".to_string(),
            email: "jo@x.com".to_string(),
            avatar: "http://img/a.png".to_string(),
            bio: "hi".to_string(),
            born_date: NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid date"),
        }
    }

    #[test]
    fn missing_file_reads_as_empty_database() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::new(dir.path().join("store.json"));

        assert_eq!(store.load().expect("load"), Database::default());
        assert!(store.get_by_id(1).expect("lookup").is_none());
    }

    #[test]
    fn field_update_is_persisted_and_returned() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::new(dir.path().join("nested").join("store.json"));
        store
            .save(&Database::default().with_user(sample_user()))
            .expect("seed");

        let updated = store
            .update_bio(&sample_user(), "new bio")
            .expect("update should succeed");
        assert_eq!(updated.bio, "new bio");
        assert_eq!(updated.first_name, "Jo");

        let reloaded = store.get_by_id(4).expect("lookup").expect("user exists");
        assert_eq!(reloaded, updated);
    }

    #[test]
    fn updating_unknown_user_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::new(dir.path().join("store.json"));

        let err = store
            .update_email(&sample_user(), "a@b")
            .expect_err("user is not stored");
        assert!(matches!(err, StoreError::NotFound { kind: "user", id: 4 }));
    }

    #[cfg(unix)]
    #[test]
    fn save_replaces_file_instead_of_rewriting_it() {
        use std::io::Read;

        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("store.json");
        let store = FileStore::new(&path);
        store
            .save(&Database::default().with_user(sample_user()))
            .expect("seed");
        let before = fs::read_to_string(&path).expect("read");
        let mut reader = fs::File::open(&path).expect("open");

        store
            .update_last_name(&sample_user(), "Lee Park")
            .expect("update should succeed");

        let mut seen_by_old_handle = String::new();
        reader
            .read_to_string(&mut seen_by_old_handle)
            .expect("read old handle");
        assert_eq!(seen_by_old_handle, before);
        assert_eq!(
            store.get_by_id(4).expect("lookup").expect("user").last_name,
            "Lee Park"
        );
    }

    #[test]
    fn failed_save_keeps_previous_contents() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("store.json");
        let store = FileStore::new(&path);
        store
            .save(&Database::default().with_user(sample_user()))
            .expect("seed");
        let before = fs::read_to_string(&path).expect("read");

        let blocked = FileStore::new(path.join("nested.json"));
        assert!(blocked.save(&Database::default()).is_err());

        assert_eq!(fs::read_to_string(&path).expect("read"), before);
        let entries = fs::read_dir(dir.path()).expect("read dir").count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn corrupt_file_is_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("store.json");
        fs::write(&path, "{not json").expect("write");

        let err = FileStore::new(path).load().expect_err("corrupt file");
        assert!(matches!(err, StoreError::Json(_)));
    }
}
