use itertools::Itertools;

use super::model::{Player, PlayerStatus};

pub const ONLINE_COLOR: u32 = 0x00c853;
pub const OFFLINE_COLOR: u32 = 0xff1744;

// Discord rejects embed descriptions and plain messages longer than these.
pub const DESCRIPTION_LIMIT: usize = 4096;
pub const MESSAGE_LIMIT: usize = 2000;
// Longest single tracker field shown before it is cut.
const FIELD_LIMIT: usize = 256;
// Room kept free for the "…and N more" trailer.
const OVERFLOW_RESERVE: usize = 32;

const UNKNOWN: &str = "Unknown";

/// What a command answers with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Card(Card),
}

/// A coloured embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub description: String,
    pub color: u32,
    pub footer: Option<String>,
    pub timestamp: bool,
}

impl Reply {
    /// The user-visible text, whichever form the reply takes.
    pub fn text(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Card(card) => &card.description,
        }
    }
}

/// Scores from 1000 up are shown in thousands with one decimal, rounding halves up.
pub fn format_score(score: f64) -> String {
    if score >= 1000.0 {
        let tenths = (score / 100.0).round();
        format!("{:.1}K", tenths / 10.0)
    } else {
        score.to_string()
    }
}

const fn status_dot(status: PlayerStatus) -> &'static str {
    match status {
        PlayerStatus::Online => "🟢",
        PlayerStatus::Offline => "🔴",
    }
}

const fn status_label(status: PlayerStatus) -> &'static str {
    match status {
        PlayerStatus::Online => "Online",
        PlayerStatus::Offline => "Offline",
    }
}

const fn status_color(status: PlayerStatus) -> u32 {
    match status {
        PlayerStatus::Online => ONLINE_COLOR,
        PlayerStatus::Offline => OFFLINE_COLOR,
    }
}

/// Cut `text` to at most `limit` characters, marking the cut with an ellipsis.
pub fn clip(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_owned();
    }
    let mut clipped: String = text.chars().take(limit.saturating_sub(1)).collect();
    clipped.push('…');
    clipped
}

fn field(value: &Option<String>) -> String {
    clip(value.as_deref().unwrap_or(UNKNOWN), FIELD_LIMIT)
}

pub fn player_line(player: &Player) -> String {
    format!(
        "{} Player: {} | Server: {} | Username: {} | Team: {} | Score: {}",
        status_dot(player.status()),
        field(&player.real_name),
        field(&player.server_name),
        field(&player.in_game_name),
        field(&player.team_name),
        format_score(player.score)
    )
}

pub fn info_card(player: &Player) -> Card {
    let status = player.status();
    Card {
        description: clip(&player_line(player), DESCRIPTION_LIMIT),
        color: status_color(status),
        footer: Some(format!("Status: {}", status_label(status))),
        timestamp: true,
    }
}

fn roster_entry(player: &Player, status: PlayerStatus) -> String {
    format!(
        "{} **{}** ({})\nServer: {} | Team: {} | Score: {}",
        status_dot(status),
        field(&player.real_name),
        field(&player.in_game_name),
        field(&player.server_name),
        field(&player.team_name),
        format_score(player.score)
    )
}

fn count_header(total: usize) -> String {
    if total == 1 {
        "**1 player tracked**".to_owned()
    } else {
        format!("**{total} players tracked**")
    }
}

pub fn roster_card(players: &[(&Player, PlayerStatus)]) -> Card {
    let header = count_header(players.len());
    let entries: Vec<String> = players
        .iter()
        .map(|(player, status)| roster_entry(player, *status))
        .collect();

    let mut budget = DESCRIPTION_LIMIT - OVERFLOW_RESERVE - header.chars().count();
    let shown = entries
        .iter()
        .take_while(|entry| {
            let cost = entry.chars().count() + 2;
            if cost <= budget {
                budget -= cost;
                true
            } else {
                false
            }
        })
        .count();

    let mut description = std::iter::once(header)
        .chain(entries.into_iter().take(shown))
        .join("\n\n");
    if shown < players.len() {
        description.push_str(&format!("\n\n…and {} more", players.len() - shown));
    }

    let any_online = players.iter().any(|(_, status)| status.is_online());
    Card {
        description,
        color: if any_online { ONLINE_COLOR } else { OFFLINE_COLOR },
        footer: None,
        timestamp: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(real_name: &str, status: &str, score: f64) -> Player {
        Player {
            real_name: Some(real_name.to_owned()),
            in_game_name: Some(format!("{real_name}_ign")),
            server_name: Some("S1".to_owned()),
            team_name: Some("Red".to_owned()),
            score,
            status: Some(status.to_owned()),
        }
    }

    #[test]
    fn scores_below_a_thousand_are_plain() {
        assert_eq!(format_score(0.0), "0");
        assert_eq!(format_score(999.0), "999");
        assert_eq!(format_score(12.5), "12.5");
    }

    #[test]
    fn scores_from_a_thousand_are_in_k() {
        assert_eq!(format_score(1000.0), "1.0K");
        assert_eq!(format_score(1500.0), "1.5K");
        assert_eq!(format_score(2500.0), "2.5K");
        assert_eq!(format_score(1_000_000.0), "1000.0K");
    }

    #[test]
    fn halves_round_up() {
        assert_eq!(format_score(1250.0), "1.3K");
        assert_eq!(format_score(1050.0), "1.1K");
        assert_eq!(format_score(1249.0), "1.2K");
    }

    #[test]
    fn info_card_for_online_player() {
        let card = info_card(&player("Trinity", "online", 1500.0));
        assert_eq!(
            card.description,
            "🟢 Player: Trinity | Server: S1 | Username: Trinity_ign | Team: Red | Score: 1.5K"
        );
        assert_eq!(card.color, ONLINE_COLOR);
        assert_eq!(card.footer.as_deref(), Some("Status: Online"));
        assert!(card.timestamp);
    }

    #[test]
    fn info_card_for_offline_player_with_gaps() {
        let card = info_card(&Player {
            real_name: Some("Cypher".to_owned()),
            status: Some("banned".to_owned()),
            ..Player::default()
        });
        assert_eq!(
            card.description,
            "🔴 Player: Cypher | Server: Unknown | Username: Unknown | Team: Unknown | Score: 0"
        );
        assert_eq!(card.color, OFFLINE_COLOR);
        assert_eq!(card.footer.as_deref(), Some("Status: Offline"));
    }

    #[test]
    fn clip_marks_the_cut() {
        assert_eq!(clip("Morpheus", 8), "Morpheus");
        assert_eq!(clip("Morpheus", 5), "Morp…");
        assert_eq!(clip("ééééé", 3), "éé…");
    }

    #[test]
    fn info_card_with_huge_fields_fits_an_embed() {
        let huge = "x".repeat(5000);
        let card = info_card(&Player {
            real_name: Some(huge.clone()),
            in_game_name: Some(huge.clone()),
            server_name: Some(huge.clone()),
            team_name: Some(huge),
            score: 1500.0,
            status: Some("online".to_owned()),
        });

        assert!(card.description.chars().count() <= DESCRIPTION_LIMIT);
        assert!(card.description.starts_with("🟢 Player: xxx"));
        assert!(card.description.ends_with("Score: 1.5K"));
    }

    #[test]
    fn roster_card_keeps_order_and_counts() {
        let neo = player("Neo", "offline", 10.0);
        let tank = player("Tank", "online", 3000.0);
        let card = roster_card(&[(&neo, neo.status()), (&tank, tank.status())]);

        let paragraphs: Vec<&str> = card.description.split("\n\n").collect();
        assert_eq!(paragraphs.len(), 3);
        assert_eq!(paragraphs[0], "**2 players tracked**");
        assert!(paragraphs[1].starts_with("🔴 **Neo** (Neo_ign)"));
        assert!(paragraphs[2].starts_with("🟢 **Tank** (Tank_ign)"));
        assert!(paragraphs[2].ends_with("Score: 3.0K"));
        assert_eq!(card.color, ONLINE_COLOR);
    }

    #[test]
    fn roster_card_all_offline_is_red() {
        let neo = player("Neo", "offline", 10.0);
        let card = roster_card(&[(&neo, neo.status())]);
        assert!(card.description.starts_with("**1 player tracked**"));
        assert_eq!(card.color, OFFLINE_COLOR);
    }

    #[test]
    fn roster_card_truncates_to_discord_limit() {
        let players: Vec<Player> = (0..200)
            .map(|i| player(&format!("Player number {i}"), "online", 1234.0))
            .collect();
        let annotated: Vec<(&Player, PlayerStatus)> =
            players.iter().map(|p| (p, p.status())).collect();

        let card = roster_card(&annotated);
        assert!(card.description.chars().count() <= DESCRIPTION_LIMIT);
        assert!(card.description.starts_with("**200 players tracked**"));
        assert!(card.description.contains(" more"));
        assert!(card.description.contains("Player number 0"));
        assert!(!card.description.contains("Player number 199"));
    }
}
