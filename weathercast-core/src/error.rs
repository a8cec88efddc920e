use thiserror::Error;

/// Everything that can go wrong while fetching, decoding or caching weather.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The request could not be sent or no response was received.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success HTTP status.
    #[error("remote returned status {status}: {body}")]
    Remote { status: u16, body: String },

    /// A JSON body (wire or cache slot) did not match the schema.
    #[error("failed to decode weather payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// The persistent key-value store rejected a read or a write.
    #[error("storage error: {0}")]
    Storage(String),
}

impl WeatherError {
    pub(crate) fn remote(status: u16, body: &str) -> Self {
        WeatherError::Remote {
            status,
            body: truncate_body(body),
        }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        // Back off to a char boundary so multibyte bodies cannot panic the cut.
        let mut cut = MAX;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}...", &body[..cut])
    } else {
        body.to_string()
    }
}
