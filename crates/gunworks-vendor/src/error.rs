use thiserror::Error;

#[derive(Debug, Error)]
pub enum VendorError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("product feed response from {url} did not include a feed URL")]
    MissingFeedUrl { url: String },

    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl VendorError {
    /// HTTP status associated with the failure, when there was one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            VendorError::UnexpectedStatus { status, .. } => Some(*status),
            VendorError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
