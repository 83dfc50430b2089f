use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerStatus {
    Online,
    Offline,
}

impl PlayerStatus {
    pub const fn is_online(self) -> bool {
        matches!(self, Self::Online)
    }
}

/// A single entry of the tracker's roster. Only `status == "online"` counts as online.
///
/// Fields of the wrong JSON type are read as absent so one bad entry never sinks the roster.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    #[serde(default, deserialize_with = "lenient_text")]
    pub real_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub in_game_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub server_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub team_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_score")]
    pub score: f64,
    #[serde(default, deserialize_with = "lenient_text")]
    pub status: Option<String>,
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    })
}

// Numeric strings are accepted; anything else scores zero.
fn lenient_score<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let score = match Value::deserialize(deserializer)? {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    };
    Ok(score.filter(|score: &f64| score.is_finite()).unwrap_or_default())
}

impl Player {
    pub fn status(&self) -> PlayerStatus {
        match self.status.as_deref() {
            Some("online") => PlayerStatus::Online,
            _ => PlayerStatus::Offline,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RosterResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub players: Option<Vec<Player>>,
}

impl RosterResponse {
    /// Players as received, treating an absent list as empty.
    pub fn players(&self) -> &[Player] {
        self.players.as_deref().unwrap_or_default()
    }
}
