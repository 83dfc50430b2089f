use super::{
    error::TrackerError,
    model::{Player, PlayerStatus, RosterResponse},
    render::{clip, info_card, roster_card, Reply, MESSAGE_LIMIT},
};

pub const UNREACHABLE: &str = "Could not reach the player tracker.";
pub const NO_PLAYERS: &str = "No players online right now.";
pub const EMPTY_QUERY: &str = "Please give me a player name to look up.";

const NOT_FOUND_PREFIX: &str = "No player found matching ";
const NOT_FOUND_SUFFIX: &str = ". They may be offline.";

/// The echoed query is cut so the whole message stays within Discord's message limit.
pub fn not_found(query: &str) -> String {
    let room = MESSAGE_LIMIT - NOT_FOUND_PREFIX.chars().count() - NOT_FOUND_SUFFIX.chars().count();
    format!("{NOT_FOUND_PREFIX}{}{NOT_FOUND_SUFFIX}", clip(query, room))
}

/// Trim and lowercase the `/info` argument. A blank argument is answered without a fetch.
pub fn normalize_query(raw: &str) -> Result<String, Reply> {
    let query = raw.trim();
    if query.is_empty() {
        Err(Reply::Text(EMPTY_QUERY.to_owned()))
    } else {
        Ok(query.to_lowercase())
    }
}

fn name_matches(name: Option<&str>, query: &str, exact: bool) -> bool {
    name.map(str::to_lowercase).map_or(false, |name| {
        if exact {
            name == query
        } else {
            name.contains(query)
        }
    })
}

/// First player, in roster order, whose real or in-game name equals or contains `query`.
///
/// `query` must already be lowercase. The four conditions form a single predicate, so an
/// exact match further down the roster does not beat a partial match earlier on.
pub fn find_player<'a>(players: &'a [Player], query: &str) -> Option<&'a Player> {
    players.iter().find(|player| {
        let real = player.real_name.as_deref();
        let in_game = player.in_game_name.as_deref();
        name_matches(real, query, true)
            || name_matches(in_game, query, true)
            || name_matches(real, query, false)
            || name_matches(in_game, query, false)
    })
}

pub fn list_players(roster: &RosterResponse) -> Vec<(&Player, PlayerStatus)> {
    roster
        .players()
        .iter()
        .map(|player| (player, player.status()))
        .collect()
}

fn usable_roster(result: &Result<RosterResponse, TrackerError>) -> Result<&RosterResponse, Reply> {
    match result {
        Err(TrackerError::Transport(_)) => Err(Reply::Text(UNREACHABLE.to_owned())),
        Err(e @ TrackerError::Parse { .. }) => {
            Err(Reply::Text(format!("Error fetching player data: {e}")))
        }
        Ok(roster) if !roster.success => Err(Reply::Text(UNREACHABLE.to_owned())),
        Ok(roster) if roster.players().is_empty() => Err(Reply::Text(NO_PLAYERS.to_owned())),
        Ok(roster) => Ok(roster),
    }
}

/// Turn a fetch result into the `/info` answer. `query` comes from [`normalize_query`].
pub fn evaluate_info(result: &Result<RosterResponse, TrackerError>, query: &str) -> Reply {
    let roster = match usable_roster(result) {
        Ok(roster) => roster,
        Err(reply) => return reply,
    };

    match find_player(roster.players(), query) {
        Some(player) => Reply::Card(info_card(player)),
        None => Reply::Text(not_found(query)),
    }
}

pub fn evaluate_list(result: &Result<RosterResponse, TrackerError>) -> Reply {
    match usable_roster(result) {
        Ok(roster) => Reply::Card(roster_card(&list_players(roster))),
        Err(reply) => reply,
    }
}
