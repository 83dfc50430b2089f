use std::time::Duration;

use tracing::{debug, instrument, warn};

use super::{error::TrackerError, model::RosterResponse};

/// Handle to the player tracker. Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct TrackerClient {
    http: reqwest::Client,
    base_url: String,
}

impl TrackerClient {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> reqwest::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    pub fn roster_url(&self) -> String {
        format!("{}/?action=list", self.base_url)
    }

    /// Fetch the current roster. A single attempt; the status code is not inspected.
    #[instrument(skip(self), fields(url = %self.roster_url()))]
    pub async fn fetch_roster(&self) -> Result<RosterResponse, TrackerError> {
        let body = self
            .http
            .get(self.roster_url())
            .send()
            .await
            .map_err(|e| {
                warn!("Tracker request failed: {e}");
                e
            })?
            .text()
            .await?;

        let roster = parse_roster(&body).map_err(|e| {
            warn!("Tracker returned an unparsable body: {e}");
            e
        })?;
        debug!(
            success = roster.success,
            players = roster.players().len(),
            "Fetched roster"
        );

        Ok(roster)
    }
}

pub fn parse_roster(body: &str) -> Result<RosterResponse, TrackerError> {
    serde_json::from_str(body).map_err(|_| TrackerError::parse(body))
}
