use std::{env, time::Duration};

use color_eyre::{eyre::eyre, Result};
use poise::serenity_prelude as serenity;
use tracing::{info, instrument, warn};

pub fn discord_token() -> Result<String> {
    env::var("DISCORD_TOKEN").map_err(|_| eyre!("$DISCORD_TOKEN not set"))
}

pub fn client_id() -> Result<serenity::ApplicationId> {
    let client_id = env::var("CLIENT_ID").map_err(|_| eyre!("$CLIENT_ID not set"))?;
    let client_id = client_id
        .parse::<u64>()
        .map_err(|e| eyre!("$CLIENT_ID is not a valid application id: {e}"))?;
    Ok(serenity::ApplicationId(client_id))
}

pub fn worker_url() -> Result<String> {
    let url = env::var("WORKER_URL").map_err(|_| eyre!("$WORKER_URL not set"))?;
    if url.trim().is_empty() {
        return Err(eyre!("$WORKER_URL is empty"));
    }
    Ok(url)
}

#[instrument]
pub fn testing_guild() -> Option<serenity::GuildId> {
    let guild_id = match env::var("TESTING_GUILD") {
        Ok(guild_id) => guild_id,
        Err(e) => {
            info!("$TESTING_GUILD not set ({e})");
            return None;
        }
    };

    match guild_id.parse::<u64>() {
        Ok(guild_id) => Some(serenity::GuildId(guild_id)),
        Err(e) => {
            warn!("Ignoring $TESTING_GUILD: {e}");
            None
        }
    }
}

#[instrument]
pub fn tracker_timeout() -> Option<Duration> {
    let secs = env::var("TRACKER_TIMEOUT_SECS").ok()?;
    match secs.parse::<u64>() {
        Ok(secs) => Some(Duration::from_secs(secs)),
        Err(e) => {
            warn!("Ignoring $TRACKER_TIMEOUT_SECS: {e}");
            None
        }
    }
}

/// Everything the bot needs from the environment, read once at startup.
#[derive(Clone)]
pub struct Config {
    pub token: String,
    pub client_id: serenity::ApplicationId,
    pub worker_url: String,
    pub testing_guild: Option<serenity::GuildId>,
    pub tracker_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            token: discord_token()?,
            client_id: client_id()?,
            worker_url: worker_url()?,
            testing_guild: testing_guild(),
            tracker_timeout: tracker_timeout(),
        })
    }
}
