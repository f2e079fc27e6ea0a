use crate::api::endpoints::{data_dragon_champions_endpoint, DATA_DRAGON_VERSIONS_ENDPOINT};
use crate::api::models::DataDragonChampions;
use crate::cache::ChampionCache;
use crate::config::Config;
use crate::error::AppError;
use std::collections::HashMap;

/// Maps the numeric champion key the backend reports to a display name.
pub trait ChampionResolver {
    fn champion_name(&self, champion_id: &str) -> String;
}

#[derive(Debug, Clone, Default)]
pub struct ChampionTable {
    names: HashMap<String, String>,
}

impl ChampionTable {
    pub fn new(names: HashMap<String, String>) -> Self {
        ChampionTable { names }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn from_data_dragon(champions: DataDragonChampions) -> Self {
        let names = champions
            .data
            .into_values()
            .map(|info| (info.key, info.name))
            .collect();
        ChampionTable { names }
    }
}

impl ChampionResolver for ChampionTable {
    // Unknown keys (e.g. champions newer than the table) fall back to the raw id
    fn champion_name(&self, champion_id: &str) -> String {
        self.names
            .get(champion_id)
            .cloned()
            .unwrap_or_else(|| champion_id.to_string())
    }
}

/// Loads the champion table for the latest Data Dragon release, from the
/// disk cache when one exists for that release and is still fresh.
pub fn load_champion_table(config: &Config, refresh: bool) -> Result<ChampionTable, AppError> {
    let version = latest_version()?;
    let dir = ChampionCache::cache_dir();

    let cached = match ChampionCache::load(&dir, &version, &config.locale) {
        Ok(cached) => cached,
        Err(e) => {
            log::warn!("ignoring unreadable champion cache: {}", e);
            None
        }
    };

    if let Some(cache) = cached {
        if cache.is_usable(&version, config.cache_max_age_hours, refresh) {
            log::debug!(
                "using cached champion table {} ({} champions)",
                cache.version,
                cache.champions.len()
            );
            return Ok(ChampionTable::new(cache.champions));
        }
    }

    let champions = fetch_json::<DataDragonChampions>(&data_dragon_champions_endpoint(&version, &config.locale))?;
    let table = ChampionTable::from_data_dragon(champions);
    log::debug!("fetched champion table {} ({} champions)", version, table.len());

    let cache = ChampionCache::new(&config.locale, &version, table.names.clone());
    if let Err(e) = cache.save(&dir) {
        log::warn!("could not save champion cache: {}", e);
    }

    Ok(table)
}

fn latest_version() -> Result<String, AppError> {
    let versions: Vec<String> = fetch_json(DATA_DRAGON_VERSIONS_ENDPOINT)?;
    versions
        .into_iter()
        .next()
        .ok_or_else(|| AppError::JsonError("Data Dragon returned no versions".to_string()))
}

fn fetch_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, AppError> {
    log::debug!("GET {}", url);

    let body = ureq::get(url)
        .set("User-Agent", concat!("lobby_scout/", env!("CARGO_PKG_VERSION")))
        .call()
        .map_err(|e| AppError::HttpError(e.to_string()))?
        .into_string()
        .map_err(|e| AppError::HttpError(e.to_string()))?;

    serde_json::from_str(&body).map_err(|e| {
        AppError::JsonError(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn table_is_keyed_by_numeric_champion_key() {
        let champions: DataDragonChampions = serde_json::from_value(json!({
            "type": "champion",
            "version": "10.16.1",
            "data": {
                "Lucian": { "id": "Lucian", "key": "236", "name": "Lucian" },
                "MonkeyKing": { "id": "MonkeyKing", "key": "62", "name": "Wukong" }
            }
        }))
        .unwrap();

        let table = ChampionTable::from_data_dragon(champions);
        assert_eq!(table.len(), 2);
        assert_eq!(table.champion_name("62"), "Wukong");
        assert_eq!(table.champion_name("236"), "Lucian");
    }

    #[test]
    fn unknown_key_falls_back_to_id() {
        let table = ChampionTable::default();
        assert_eq!(table.champion_name("9999"), "9999");
    }
}
