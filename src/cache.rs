use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use chrono::{DateTime, Utc};
use crate::error::AppError;

/// Data Dragon champion table as last fetched for one locale.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChampionCache {
    pub locale: String,
    pub version: String,
    pub fetched_at: DateTime<Utc>,
    /// Champion key (numeric id as text) -> display name
    pub champions: HashMap<String, String>,
}

impl ChampionCache {
    pub fn new(locale: &str, version: &str, champions: HashMap<String, String>) -> Self {
        ChampionCache {
            locale: locale.to_string(),
            version: version.to_string(),
            fetched_at: Utc::now(),
            champions,
        }
    }

    pub fn cache_dir() -> PathBuf {
        let cache_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".lobby_scout");

        let _ = fs::create_dir_all(&cache_dir);

        cache_dir
    }

    /// One file per Data Dragon release and locale, so a new patch never
    /// reuses an older champion table.
    pub fn get_cache_path(dir: &Path, version: &str, locale: &str) -> PathBuf {
        dir.join(format!("champions-{}-{}.json", version, locale))
    }

    /// `Ok(None)` when nothing has been cached for this release and locale yet.
    pub fn load(dir: &Path, version: &str, locale: &str) -> Result<Option<Self>, AppError> {
        let path = Self::get_cache_path(dir, version, locale);

        match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content)
                .map(Some)
                .map_err(|e| AppError::CacheError(format!("Failed to parse {}: {}", path.display(), e))),
            Err(_) => Ok(None),
        }
    }

    pub fn save(&self, dir: &Path) -> Result<(), AppError> {
        let path = Self::get_cache_path(dir, &self.version, &self.locale);
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            AppError::CacheError(format!("Failed to serialize champion cache: {}", e))
        })?;

        fs::write(&path, json).map_err(|e| {
            AppError::CacheError(format!("Failed to write {}: {}", path.display(), e))
        })?;

        Ok(())
    }

    /// A cached table is reused only for the same release, while younger
    /// than `max_age_hours`, and when no refresh was requested.
    pub fn is_usable(&self, version: &str, max_age_hours: i64, refresh: bool) -> bool {
        self.is_usable_at(Utc::now(), version, max_age_hours, refresh)
    }

    fn is_usable_at(&self, now: DateTime<Utc>, version: &str, max_age_hours: i64, refresh: bool) -> bool {
        !refresh && self.version == version && !self.is_stale_at(now, max_age_hours)
    }

    fn is_stale_at(&self, now: DateTime<Utc>, max_age_hours: i64) -> bool {
        let age = now.signed_duration_since(self.fetched_at);
        age.num_hours() >= max_age_hours
    }
}
