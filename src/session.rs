use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::AppPaths;
use crate::error::{AppError, AppResult};
use crate::model::User;
use crate::store::UserStore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: u64,
}

pub trait SessionStore {
    fn load(&self) -> AppResult<Option<Session>>;
    fn save(&self, session: &Session) -> AppResult<()>;
    fn clear(&self) -> AppResult<()>;
}

#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(paths: &AppPaths) -> Self {
        Self {
            path: paths.session_file(),
        }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> AppResult<Option<Session>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&self.path)?;
        let session = serde_json::from_str(&raw)?;
        Ok(Some(session))
    }

    fn save(&self, session: &Session) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let payload = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, payload)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;

            let mut perms = fs::metadata(&self.path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&self.path, perms)?;
        }

        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }

        Ok(())
    }
}

/// Resolves the signed-in user. A session pointing at a user that no longer
/// exists counts as signed out.
pub fn current_user<S, U>(sessions: &S, users: &U) -> AppResult<User>
where
    S: SessionStore + ?Sized,
    U: UserStore + ?Sized,
{
    let session = sessions.load()?.ok_or(AppError::NotLoggedIn)?;
    users.get_by_id(session.user_id)?.ok_or(AppError::NotLoggedIn)
}

pub fn login<S, U>(sessions: &S, users: &U, user_id: u64) -> AppResult<User>
where
    S: SessionStore + ?Sized,
    U: UserStore + ?Sized,
{
    let user = users.get_by_id(user_id)?.ok_or(AppError::NotFound {
        kind: "user",
        id: user_id,
    })?;
    sessions.save(&Session { user_id })?;
    tracing::info!(user_id, "session started");
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_and_clears_session_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileSessionStore {
            path: dir.path().join("session.json"),
        };

        assert!(store.load().expect("load").is_none());
        store.save(&Session { user_id: 42 }).expect("save");
        assert_eq!(store.load().expect("load"), Some(Session { user_id: 42 }));

        store.clear().expect("clear");
        assert!(store.load().expect("load").is_none());
    }
}
