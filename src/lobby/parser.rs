use crate::error::AppError;

pub const LOBBY_SIZE: usize = 5;

const JOIN_SUFFIX: [&str; 3] = ["joined", "the", "lobby"];

/// The five summoner names of a lobby, in the order they were pasted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LobbyRoster {
    names: Vec<String>,
}

impl LobbyRoster {
    /// Commits a parsed batch only when it holds exactly five names.
    pub fn from_names(names: Vec<String>) -> Option<Self> {
        if names.len() == LOBBY_SIZE {
            Some(LobbyRoster { names })
        } else {
            None
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

/// Turns pasted lobby chat into summoner names.
///
/// Every line is either `<name> joined the lobby` or, when it has three words
/// or fewer, a bare name. Any longer line without the join suffix rejects the
/// whole batch.
pub fn parse_lobby_text(text: &str) -> Result<Vec<String>, AppError> {
    if text.is_empty() {
        return Ok(Vec::new());
    }

    text.lines().map(parse_line).collect()
}

fn parse_line(line: &str) -> Result<String, AppError> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let words: Vec<&str> = line.split(' ').collect();

    if words.len() <= JOIN_SUFFIX.len() {
        return Ok(line.trim_end().to_string());
    }

    let (name_words, tail) = words.split_at(words.len() - JOIN_SUFFIX.len());
    if tail != JOIN_SUFFIX {
        return Err(AppError::InvalidFormat(line.to_string()));
    }

    Ok(name_words.join(" ").trim_end().to_string())
}
