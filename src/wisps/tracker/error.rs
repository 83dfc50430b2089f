use thiserror::Error;

/// How many characters of an unparsable body are kept for diagnostics.
pub const SNIPPET_LEN: usize = 200;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("could not reach the player tracker: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Bad JSON: {snippet}")]
    Parse { snippet: String },
}

impl TrackerError {
    pub fn parse(body: &str) -> Self {
        Self::Parse {
            snippet: body.chars().take(SNIPPET_LEN).collect(),
        }
    }
}
