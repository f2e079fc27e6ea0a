use crate::analysis::frequency::{Aggregation, FrequencyMap};
use crate::analysis::ranking::{rank_frequencies, RankedEntry};
use crate::api::models::SummonerData;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct SummonerRow {
    summoner: String,
    level: String,
    ranked: String,
    record: String,
    lanes: String,
    champions: String,
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_warning(message: &str) {
    eprintln!("{} {}", "⚠️".yellow(), message);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn loading_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.red} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Retrieving Summoner Data");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

fn format_ranked(entries: &[RankedEntry]) -> String {
    if entries.is_empty() {
        return "-".to_string();
    }

    entries
        .iter()
        .map(|e| format!("{} ({})", e.label, e.count))
        .collect::<Vec<_>>()
        .join("\n")
}

fn top(map: Option<&FrequencyMap>, top_n: usize) -> String {
    match map {
        Some(freq) => format_ranked(&rank_frequencies(freq, top_n)),
        None => "-".to_string(),
    }
}

pub fn display_lobby_report(summoners: &SummonerData, aggregation: &Aggregation, top_n: usize) {
    println!("\n{}", "🎮 LOBBY SCOUTING REPORT".bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    if summoners.is_empty() {
        println!("{}", "No summoner data returned".yellow());
        return;
    }

    let mut rows = vec![];
    for (id, summoner) in summoners {
        let record = match (summoner.wins, summoner.losses) {
            (Some(wins), Some(losses)) => {
                format!("{} W / {} L", wins.to_string().green(), losses.to_string().red())
            }
            _ => "-".to_string(),
        };

        let mut name = summoner.name.clone();
        if summoner.hot_streak == Some(true) {
            name.push_str(" 🔥");
        }

        rows.push(SummonerRow {
            summoner: name,
            level: summoner.summoner_level.to_string(),
            ranked: summoner.ranked_label(),
            record,
            lanes: top(aggregation.lanes_for(id), top_n),
            champions: top(aggregation.champions_for(id), top_n),
        });
    }

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);

    println!("\n{}", "Legend".bold().yellow());
    println!("• Lanes: most played positions (bottom lane split into ADC / SUPPORT)");
    println!("• Champions: most played champions outside bottom lane\n");
}
