use super::frequency::FrequencyMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub label: String,
    pub count: u32,
}

/// Most played first; equal counts are ordered by label so output is stable.
pub fn rank_frequencies(freq: &FrequencyMap, top_n: usize) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = freq
        .iter()
        .map(|(label, count)| RankedEntry {
            label: label.to_string(),
            count,
        })
        .collect();

    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    entries.truncate(top_n);

    entries
}
