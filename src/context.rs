use std::path::PathBuf;
use std::time::Duration;

use crate::config::{self, AppPaths, Settings};
use crate::error::AppResult;
use crate::model::User;
use crate::output::Output;
use crate::profile::{HttpImageVerifier, ProfileValidator};
use crate::session::{self, FileSessionStore};
use crate::store::FileStore;

#[derive(Debug)]
pub struct AppContext {
    pub paths: AppPaths,
    pub settings: Settings,
    pub store: FileStore,
    pub sessions: FileSessionStore,
    pub avatar_verifier: HttpImageVerifier,
    pub avatar_timeout: Duration,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(store_override: Option<PathBuf>, json: bool) -> AppResult<Self> {
        let paths = AppPaths::discover()?;
        Self::from_paths(paths, store_override, json)
    }

    pub fn from_paths(
        paths: AppPaths,
        store_override: Option<PathBuf>,
        json: bool,
    ) -> AppResult<Self> {
        let settings = config::load_settings(&paths)?;
        let store_path = store_override.unwrap_or_else(|| settings.store_path(&paths));
        let avatar_timeout = settings.avatar_timeout()?;
        let avatar_verifier = HttpImageVerifier::new(avatar_timeout)?;
        tracing::debug!(store = %store_path.display(), "context ready");

        Ok(Self {
            store: FileStore::new(store_path),
            sessions: FileSessionStore::new(&paths),
            avatar_verifier,
            avatar_timeout,
            output: Output::new(json),
            settings,
            paths,
        })
    }

    pub fn current_user(&self) -> AppResult<User> {
        session::current_user(&self.sessions, &self.store)
    }

    pub fn profile_validator(&self) -> ProfileValidator<&HttpImageVerifier> {
        ProfileValidator::new(&self.avatar_verifier).with_avatar_timeout(self.avatar_timeout)
    }
}
