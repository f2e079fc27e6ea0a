mod analysis;
mod api;
mod cache;
mod champions;
mod config;
mod display;
mod error;
mod lobby;
mod session;

use anyhow::Context;
use api::client::BackendClient;
use champions::{load_champion_table, ChampionTable};
use clap::Parser;
use config::Config;
use display::output::{
    display_error, display_info, display_lobby_report, display_success, display_warning, loading_spinner,
};
use error::AppError;
use lobby::parser::{parse_lobby_text, LOBBY_SIZE};
use session::LobbySession;
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "Lobby Scout")]
#[command(about = "Scout the five summoners of a champion select lobby", long_about = None)]
struct Args {
    /// File with the pasted lobby chat (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Backend base URL (overrides LOBBY_SCOUT_API_URL)
    #[arg(short, long)]
    url: Option<String>,

    /// Data Dragon locale for champion names (overrides LOBBY_SCOUT_LOCALE)
    #[arg(short, long)]
    locale: Option<String>,

    /// Number of lanes and champions to show per summoner
    #[arg(short, long, default_value = "3")]
    top: usize,

    /// Re-download the champion table even if the cache is fresh
    #[arg(long)]
    refresh: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn read_lobby_text(input: Option<&PathBuf>) -> anyhow::Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading lobby chat from {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading lobby chat from stdin")?;
            Ok(text)
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut config = Config::from_env(args.url)?;
    if let Some(locale) = args.locale {
        config.locale = locale;
    }

    let text = read_lobby_text(args.input.as_ref())?;

    let mut session = LobbySession::new();
    if !session.submit_text(&text)? {
        let found = parse_lobby_text(&text)?.len();
        return Err(AppError::IncompleteLobby(found).into());
    }

    if let Some(roster) = session.roster() {
        display_success(&format!("Lobby: {}", roster.names().join(", ")));
    }

    display_info("Loading champion names...");
    let champions = match load_champion_table(&config, args.refresh) {
        Ok(table) => table,
        Err(e) => {
            display_warning(&format!("Champion names unavailable, showing ids ({})", e));
            ChampionTable::default()
        }
    };

    display_info(&format!("Querying {} for {} summoners", config.api_url, LOBBY_SIZE));
    let client = BackendClient::new(&config);

    let spinner = loading_spinner();
    let result = session.run(&client, &champions);
    spinner.finish_and_clear();
    result?;

    if !session.is_loaded() {
        display_warning("Backend returned no match history for this lobby");
        return Ok(());
    }

    let games: usize = session.match_data().values().map(Vec::len).sum();
    display_success(&format!("Analyzed {} matches", games));

    display_lobby_report(session.summoner_data(), session.aggregation(), args.top);

    Ok(())
}
