use crate::config::Config;
use crate::error::AppError;
use governor::{clock::{Clock, DefaultClock}, state::{InMemoryState, NotKeyed}, Quota, RateLimiter};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::num::NonZeroU32;
use std::thread;

use super::endpoints::{MATCH_OVERVIEWS_PATH, SUMMONER_DATA_PATH};
use super::models::*;

const USER_AGENT: &str = concat!("lobby_scout/", env!("CARGO_PKG_VERSION"));

const REQUESTS_PER_SECOND: NonZeroU32 = match NonZeroU32::new(5) {
    Some(n) => n,
    None => unreachable!(),
};

/// The two backend calls a lobby lookup needs.
pub trait LobbyBackend {
    /// Stage A. A reply carrying an `error` field comes back as `AppError::Backend`.
    fn summoner_data(&self, summoner_names: &[String]) -> Result<SummonerData, AppError>;

    /// Stage B, keyed by the account ids stage A returned.
    fn match_overviews(&self, account_ids: &[String]) -> Result<MatchOverviewData, AppError>;
}

pub struct BackendClient {
    base_url: String,
    agent: ureq::Agent,
    rate_limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
}

impl BackendClient {
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new().user_agent(USER_AGENT).build();
        let rate_limiter = RateLimiter::direct(Quota::per_second(REQUESTS_PER_SECOND));
        BackendClient {
            base_url: config.api_url.clone(),
            agent,
            rate_limiter,
        }
    }

    fn wait_for_slot(&self) {
        while let Err(not_until) = self.rate_limiter.check() {
            let wait = not_until.wait_time_from(self.rate_limiter.clock().now());
            log::debug!("throttling backend request for {:?}", wait);
            thread::sleep(wait);
        }
    }

    fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, AppError> {
        self.wait_for_slot();

        let url = format!("{}{}", self.base_url, path);
        log::debug!("POST {}", url);

        let response = self
            .agent
            .post(&url)
            .set("Accept", "application/json")
            .send_json(body);

        let text = match response {
            Ok(resp) => resp.into_string().map_err(|e| AppError::HttpError(e.to_string()))?,
            Err(ureq::Error::Status(429, _)) => return Err(AppError::RateLimited),
            Err(e) => return Err(AppError::HttpError(e.to_string())),
        };

        serde_json::from_str(&text).map_err(|e| AppError::JsonError(format!("{}: {}", path, e)))
    }
}

impl LobbyBackend for BackendClient {
    fn summoner_data(&self, summoner_names: &[String]) -> Result<SummonerData, AppError> {
        let reply: SummonerDataResponse = self.post_json(
            SUMMONER_DATA_PATH,
            &SummonerDataRequest { summoner_names },
        )?;

        match reply {
            SummonerDataResponse::Found(data) => Ok(data),
            SummonerDataResponse::Failed { error } => Err(AppError::Backend(error)),
        }
    }

    fn match_overviews(&self, account_ids: &[String]) -> Result<MatchOverviewData, AppError> {
        self.post_json(
            MATCH_OVERVIEWS_PATH,
            &MatchOverviewRequest { encrypted_account_ids: account_ids },
        )
    }
}
