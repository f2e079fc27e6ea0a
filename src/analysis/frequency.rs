use std::collections::{BTreeMap, HashMap};

use super::lanes::{classify, Position};
use crate::api::models::MatchOverviewData;
use crate::champions::ChampionResolver;

/// Label -> number of matches counted under it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    counts: HashMap<String, u32>,
}

impl FrequencyMap {
    pub fn new() -> Self {
        FrequencyMap {
            counts: HashMap::new(),
        }
    }

    pub fn increment(&mut self, label: &str) {
        *self.counts.entry(label.to_string()).or_insert(0) += 1;
    }

    pub fn get(&self, label: &str) -> u32 {
        self.counts.get(label).copied().unwrap_or(0)
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(label, count)| (label.as_str(), *count))
    }
}

/// Per-summoner lane and champion tallies for a whole lobby.
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    pub lanes: BTreeMap<String, FrequencyMap>,
    pub champions: BTreeMap<String, FrequencyMap>,
}

impl Aggregation {
    pub fn lanes_for(&self, summoner_id: &str) -> Option<&FrequencyMap> {
        self.lanes.get(summoner_id)
    }

    pub fn champions_for(&self, summoner_id: &str) -> Option<&FrequencyMap> {
        self.champions.get(summoner_id)
    }
}

/// Tallies every summoner's matches.
///
/// Bottom-lane matches only feed the lane tally (as SUPPORT or ADC); they
/// never count toward champion frequency. Every summoner id in `matches`
/// gets an entry in both maps, empty if it has no matches.
pub fn aggregate(matches: &MatchOverviewData, resolver: &dyn ChampionResolver) -> Aggregation {
    let mut aggregation = Aggregation::default();

    for (summoner_id, games) in matches {
        let mut lane_freq = FrequencyMap::new();
        let mut champ_freq = FrequencyMap::new();

        for game in games {
            let champion = resolver.champion_name(&game.champion);

            match classify(&game.lane, &game.role) {
                Position::Bottom(label) => lane_freq.increment(label),
                Position::Dropped => {}
                Position::Lane(label) => {
                    lane_freq.increment(&label);
                    champ_freq.increment(&champion);
                }
            }
        }

        log::debug!(
            "{}: {} matches, {} lanes, {} champions",
            summoner_id,
            games.len(),
            lane_freq.len(),
            champ_freq.len()
        );

        aggregation.lanes.insert(summoner_id.clone(), lane_freq);
        aggregation.champions.insert(summoner_id.clone(), champ_freq);
    }

    aggregation
}
