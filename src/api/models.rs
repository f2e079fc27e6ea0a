use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Summoner id -> summoner record, as returned by `/getSummonerData`.
pub type SummonerData = BTreeMap<String, Summoner>;

/// Summoner id -> recent matches, as returned by `/getSummonerMatchOverviews`.
pub type MatchOverviewData = BTreeMap<String, Vec<MatchOverview>>;

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct Summoner {
    pub account_id: String,
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub profile_icon_id: i64,
    #[serde(default)]
    pub puuid: String,
    #[serde(default)]
    pub revision_date: i64,
    #[serde(default)]
    pub summoner_level: i64,

    // Ranked fields, absent for unranked summoners
    pub fresh_blood: Option<bool>,
    pub hot_streak: Option<bool>,
    pub inactive: Option<bool>,
    pub league_id: Option<String>,
    pub league_points: Option<i64>,
    pub losses: Option<i64>,
    pub queue_type: Option<String>,
    pub rank: Option<String>,
    pub tier: Option<String>,
    pub veteran: Option<bool>,
    pub wins: Option<i64>,
}

impl Summoner {
    pub fn ranked_label(&self) -> String {
        match (&self.tier, &self.rank) {
            (Some(tier), Some(rank)) => {
                format!("{} {} ({} LP)", tier, rank, self.league_points.unwrap_or(0))
            }
            (Some(tier), None) => tier.clone(),
            _ => "Unranked".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct MatchOverview {
    #[serde(deserialize_with = "champion_id")]
    pub champion: String,
    #[serde(default)]
    pub game_id: i64,
    pub lane: String,
    #[serde(default)]
    pub platform_id: String,
    #[serde(default)]
    pub queue: i64,
    pub role: String,
    #[serde(default)]
    pub season: i64,
    #[serde(default)]
    pub timestamp: i64,
}

// The backend forwards Riot's numeric champion key, sometimes as a string.
fn champion_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(i64),
        Text(String),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Number(n) => n.to_string(),
        RawId::Text(s) => s,
    })
}

/// Stage A reply: either the summoner map or an `{ "error": ... }` object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SummonerDataResponse {
    Failed { error: String },
    Found(SummonerData),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummonerDataRequest<'a> {
    pub summoner_names: &'a [String],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchOverviewRequest<'a> {
    pub encrypted_account_ids: &'a [String],
}

// Data Dragon champion.json
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct DataDragonChampions {
    pub version: String,
    pub data: std::collections::HashMap<String, ChampionInfo>,
}

#[derive(Debug, Deserialize, Clone)]
#[allow(dead_code)]
pub struct ChampionInfo {
    pub id: String,
    pub name: String,
    pub key: String,
}
