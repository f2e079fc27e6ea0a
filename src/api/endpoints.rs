// Backend routes, relative to the configured base URL
pub const SUMMONER_DATA_PATH: &str = "/getSummonerData";
pub const MATCH_OVERVIEWS_PATH: &str = "/getSummonerMatchOverviews";

pub const DATA_DRAGON_VERSIONS_ENDPOINT: &str = "https://ddragon.leagueoflegends.com/api/versions.json";

pub fn data_dragon_champions_endpoint(version: &str, locale: &str) -> String {
    format!(
        "https://ddragon.leagueoflegends.com/cdn/{}/data/{}/champion.json",
        version, locale
    )
}
