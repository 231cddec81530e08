use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::profile::avatar::DEFAULT_AVATAR_TIMEOUT_SECS;

use super::AppPaths;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub store_path: Option<PathBuf>,
    #[serde(default)]
    pub avatar_timeout_secs: Option<u64>,
}

impl Settings {
    pub fn store_path(&self, paths: &AppPaths) -> PathBuf {
        self.store_path
            .clone()
            .unwrap_or_else(|| paths.default_store_file())
    }

    pub fn avatar_timeout(&self) -> AppResult<Duration> {
        match self.avatar_timeout_secs {
            Some(0) => Err(AppError::Config(
                "avatar_timeout_secs must be greater than 0".to_string(),
            )),
            Some(secs) => Ok(Duration::from_secs(secs)),
            None => Ok(Duration::from_secs(DEFAULT_AVATAR_TIMEOUT_SECS)),
        }
    }
}

pub fn load(path: &Path) -> AppResult<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let raw = fs::read_to_string(path)?;
    let settings = serde_json::from_str(&raw)?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_file_is_missing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let settings = load(&dir.path().join("settings.json")).expect("load");

        assert!(settings.store_path.is_none());
        assert_eq!(
            settings.avatar_timeout().expect("timeout"),
            Duration::from_secs(DEFAULT_AVATAR_TIMEOUT_SECS)
        );
    }

    #[test]
    fn reads_partial_settings_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"avatar_timeout_secs": 3}"#).expect("write");

        let settings = load(&path).expect("load");
        assert_eq!(
            settings.avatar_timeout().expect("timeout"),
            Duration::from_secs(3)
        );
    }

    #[test]
    fn rejects_zero_timeout() {
        let settings = Settings {
            avatar_timeout_secs: Some(0),
            ..Settings::default()
        };
        assert!(matches!(settings.avatar_timeout(), Err(AppError::Config(_))));
    }
}
