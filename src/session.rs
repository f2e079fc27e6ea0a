use crate::analysis::frequency::{aggregate, Aggregation};
use crate::api::client::LobbyBackend;
use crate::api::models::{MatchOverviewData, SummonerData};
use crate::champions::ChampionResolver;
use crate::error::AppError;
use crate::lobby::parser::{parse_lobby_text, LobbyRoster};

/// State of one lobby lookup, from pasted chat to finished tallies.
#[derive(Debug)]
pub struct LobbySession {
    show_input: bool,
    is_loading: bool,
    is_loaded: bool,
    roster: Option<LobbyRoster>,
    summoner_data: SummonerData,
    match_data: MatchOverviewData,
    aggregation: Aggregation,
}

impl Default for LobbySession {
    fn default() -> Self {
        Self::new()
    }
}

impl LobbySession {
    pub fn new() -> Self {
        LobbySession {
            show_input: true,
            is_loading: false,
            is_loaded: false,
            roster: None,
            summoner_data: SummonerData::new(),
            match_data: MatchOverviewData::new(),
            aggregation: Aggregation::default(),
        }
    }

    /// Parses pasted lobby chat. Returns `true` when exactly five names were
    /// found and committed as the roster; any other count leaves the current
    /// roster untouched.
    pub fn submit_text(&mut self, text: &str) -> Result<bool, AppError> {
        let names = parse_lobby_text(text)?;
        let count = names.len();

        match LobbyRoster::from_names(names) {
            Some(roster) => {
                log::debug!("committed roster {:?}", roster.names());
                self.roster = Some(roster);
                Ok(true)
            }
            None => {
                log::debug!("discarding batch of {} names", count);
                Ok(false)
            }
        }
    }

    /// Fetches summoners, then their match overviews, then tallies them.
    ///
    /// Loading is flagged before the first request and only cleared once the
    /// tallies are in, so a failed request leaves the session loading.
    pub fn run(
        &mut self,
        backend: &dyn LobbyBackend,
        resolver: &dyn ChampionResolver,
    ) -> Result<(), AppError> {
        let names = match &self.roster {
            Some(roster) => roster.names().to_vec(),
            None => return Err(AppError::NoRoster),
        };

        self.is_loading = true;

        let summoners = backend.summoner_data(&names)?;
        self.summoner_data = summoners;

        let account_ids: Vec<String> = self
            .summoner_data
            .values()
            .map(|summoner| summoner.account_id.clone())
            .collect();

        let matches = backend.match_overviews(&account_ids)?;
        self.match_data = matches;

        if self.match_data.is_empty() {
            log::debug!("backend returned no match overviews");
            return Ok(());
        }

        self.aggregation = aggregate(&self.match_data, resolver);

        self.is_loading = false;
        self.is_loaded = true;
        self.show_input = false;

        Ok(())
    }

    pub fn roster(&self) -> Option<&LobbyRoster> {
        self.roster.as_ref()
    }

    pub fn summoner_data(&self) -> &SummonerData {
        &self.summoner_data
    }

    pub fn match_data(&self) -> &MatchOverviewData {
        &self.match_data
    }

    pub fn aggregation(&self) -> &Aggregation {
        &self.aggregation
    }

    #[allow(dead_code)]
    pub fn show_input(&self) -> bool {
        self.show_input
    }

    #[allow(dead_code)]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_loaded(&self) -> bool {
        self.is_loaded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{MatchOverview, Summoner};
    use crate::champions::ChampionTable;
    use std::cell::RefCell;
    use std::collections::HashMap;

    const LOBBY: &str = "one joined the lobby\ntwo joined the lobby\nthree joined the lobby\n\
                         four joined the lobby\nfive joined the lobby";

    struct FakeBackend {
        error: Option<String>,
        summoners: SummonerData,
        matches: MatchOverviewData,
        summoner_calls: RefCell<Vec<Vec<String>>>,
        match_calls: RefCell<Vec<Vec<String>>>,
    }

    impl FakeBackend {
        fn new() -> Self {
            let mut summoners = SummonerData::new();
            let mut matches = MatchOverviewData::new();
            for (i, name) in ["one", "two", "three", "four", "five"].iter().enumerate() {
                let id = format!("sid-{}", i);
                summoners.insert(id.clone(), summoner(&id, name));
                matches.insert(id, Vec::new());
            }
            matches.insert(
                "sid-0".to_string(),
                vec![
                    overview("103", "MIDDLE", "SOLO"),
                    overview("412", "BOTTOM", "DUO_SUPPORT"),
                ],
            );

            FakeBackend {
                error: None,
                summoners,
                matches,
                summoner_calls: RefCell::new(Vec::new()),
                match_calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl LobbyBackend for FakeBackend {
        fn summoner_data(&self, summoner_names: &[String]) -> Result<SummonerData, AppError> {
            self.summoner_calls.borrow_mut().push(summoner_names.to_vec());
            match &self.error {
                Some(message) => Err(AppError::Backend(message.clone())),
                None => Ok(self.summoners.clone()),
            }
        }

        fn match_overviews(&self, account_ids: &[String]) -> Result<MatchOverviewData, AppError> {
            self.match_calls.borrow_mut().push(account_ids.to_vec());
            Ok(self.matches.clone())
        }
    }

    fn summoner(id: &str, name: &str) -> Summoner {
        Summoner {
            account_id: format!("acc-{}", id),
            id: id.to_string(),
            name: name.to_string(),
            profile_icon_id: 1,
            puuid: format!("puuid-{}", id),
            revision_date: 0,
            summoner_level: 30,
            fresh_blood: None,
            hot_streak: None,
            inactive: None,
            league_id: None,
            league_points: None,
            losses: None,
            queue_type: None,
            rank: None,
            tier: None,
            veteran: None,
            wins: None,
        }
    }

    fn overview(champion: &str, lane: &str, role: &str) -> MatchOverview {
        MatchOverview {
            champion: champion.to_string(),
            game_id: 42,
            lane: lane.to_string(),
            platform_id: "NA1".to_string(),
            queue: 420,
            role: role.to_string(),
            season: 13,
            timestamp: 0,
        }
    }

    fn resolver() -> ChampionTable {
        let mut names = HashMap::new();
        names.insert("103".to_string(), "Ahri".to_string());
        names.insert("412".to_string(), "Thresh".to_string());
        ChampionTable::new(names)
    }

    #[test]
    fn starts_with_input_shown_and_nothing_loaded() {
        let session = LobbySession::new();
        assert!(session.show_input());
        assert!(!session.is_loading());
        assert!(!session.is_loaded());
        assert!(session.roster().is_none());
        assert!(session.summoner_data().is_empty());
    }

    #[test]
    fn only_a_full_lobby_commits() {
        let mut session = LobbySession::new();
        assert!(!session.submit_text("one\ntwo\nthree\nfour").unwrap());
        assert!(session.roster().is_none());

        assert!(session.submit_text(LOBBY).unwrap());
        assert_eq!(session.roster().unwrap().names()[2], "three");
    }

    #[test]
    fn invalid_line_keeps_previous_roster() {
        let mut session = LobbySession::new();
        session.submit_text(LOBBY).unwrap();

        let result = session.submit_text("somebody said something in chat");
        assert!(matches!(result, Err(AppError::InvalidFormat(_))));
        assert_eq!(session.roster().unwrap().names()[0], "one");
    }

    #[test]
    fn full_cycle_aggregates_and_flips_flags() {
        let backend = FakeBackend::new();
        let mut session = LobbySession::new();
        session.submit_text(LOBBY).unwrap();

        session.run(&backend, &resolver()).unwrap();

        assert_eq!(backend.summoner_calls.borrow()[0], vec!["one", "two", "three", "four", "five"]);
        let account_ids = &backend.match_calls.borrow()[0];
        assert_eq!(account_ids.len(), 5);
        assert!(account_ids.contains(&"acc-sid-3".to_string()));

        let aggregation = session.aggregation();
        assert_eq!(aggregation.lanes_for("sid-0").unwrap().get("MIDDLE"), 1);
        assert_eq!(aggregation.lanes_for("sid-0").unwrap().get("SUPPORT"), 1);
        assert_eq!(aggregation.champions_for("sid-0").unwrap().get("Ahri"), 1);
        assert_eq!(aggregation.champions_for("sid-0").unwrap().get("Thresh"), 0);
        assert!(aggregation.lanes_for("sid-4").unwrap().is_empty());

        assert!(!session.is_loading());
        assert!(session.is_loaded());
        assert!(!session.show_input());
    }

    #[test]
    fn backend_error_skips_match_stage() {
        let mut backend = FakeBackend::new();
        backend.error = Some("Summoner not found: five".to_string());
        let mut session = LobbySession::new();
        session.submit_text(LOBBY).unwrap();

        match session.run(&backend, &resolver()) {
            Err(AppError::Backend(message)) => assert_eq!(message, "Summoner not found: five"),
            other => panic!("expected Backend error, got {:?}", other),
        }

        assert!(backend.match_calls.borrow().is_empty());
        assert!(session.is_loading());
        assert!(!session.is_loaded());
        assert!(session.show_input());
    }

    #[test]
    fn running_without_roster_fetches_nothing() {
        let backend = FakeBackend::new();
        let mut session = LobbySession::new();

        assert!(matches!(
            session.run(&backend, &resolver()),
            Err(AppError::NoRoster)
        ));
        assert!(backend.summoner_calls.borrow().is_empty());
    }

    #[test]
    fn empty_match_reply_leaves_session_loading() {
        let mut backend = FakeBackend::new();
        backend.matches = MatchOverviewData::new();
        let mut session = LobbySession::new();
        session.submit_text(LOBBY).unwrap();

        session.run(&backend, &resolver()).unwrap();

        assert_eq!(backend.match_calls.borrow().len(), 1);
        assert_eq!(session.summoner_data().len(), 5);
        assert!(session.match_data().is_empty());
        assert!(session.aggregation().lanes.is_empty());
        assert!(session.is_loading());
        assert!(!session.is_loaded());
        assert!(session.show_input());
    }
}
