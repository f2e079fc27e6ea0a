use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid format: \"{0}\" (expected \"<name> joined the lobby\" or a bare summoner name)")]
    InvalidFormat(String),

    #[error("Expected 5 summoner names, got {0}")]
    IncompleteLobby(usize),

    #[error("No lobby roster committed; paste five summoner names first")]
    NoRoster,

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Rate limit exceeded, please try again later")]
    RateLimited,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),

    #[error("Cache error: {0}")]
    CacheError(String),
}
