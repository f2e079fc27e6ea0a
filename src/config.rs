use crate::error::AppError;
use std::env;

const DEFAULT_LOCALE: &str = "en_US";
const DEFAULT_CACHE_MAX_AGE_HOURS: i64 = 24;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub locale: String,
    pub cache_max_age_hours: i64,
}

impl Config {
    /// Reads `.env` and the process environment. `url_override` takes the
    /// place of `LOBBY_SCOUT_API_URL` when the user passed `--url`.
    pub fn from_env(url_override: Option<String>) -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let api_url = match url_override {
            Some(url) => url,
            None => env::var("LOBBY_SCOUT_API_URL").map_err(|_| {
                AppError::ConfigError(
                    "LOBBY_SCOUT_API_URL not set (use .env or --url)".to_string(),
                )
            })?,
        };

        let locale = env::var("LOBBY_SCOUT_LOCALE").unwrap_or_else(|_| DEFAULT_LOCALE.to_string());

        let cache_max_age_hours = match env::var("LOBBY_SCOUT_CACHE_MAX_AGE_HOURS") {
            Ok(raw) => raw.trim().parse::<i64>().map_err(|_| {
                AppError::ConfigError(format!(
                    "LOBBY_SCOUT_CACHE_MAX_AGE_HOURS must be a whole number, got \"{}\"",
                    raw
                ))
            })?,
            Err(_) => DEFAULT_CACHE_MAX_AGE_HOURS,
        };

        Ok(Config {
            api_url: normalize_url(&api_url),
            locale,
            cache_max_age_hours,
        })
    }
}

fn normalize_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
