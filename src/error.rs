use thiserror::Error;

/// Errors reported by the underlying HTTP transport
#[derive(Error, Debug)]
pub enum TransportError {
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors that can occur when fetching embed data or playlists
#[derive(Error, Debug)]
pub enum EmbedError {
    #[error("Invalid podcast domain '{domain}': {source}")]
    InvalidDomain {
        domain: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Invalid page size {0}: must be greater than zero")]
    InvalidPageSize(i64),

    #[error("Invalid offset {0}: must not be negative")]
    InvalidOffset(i64),

    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: TransportError,
    },

    #[error("Failed to decode response from {url}: {source}")]
    DecodingFailed {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Request to {url} returned no response body")]
    Unknown { url: String },
}

/// A playlist order token that is neither `default` nor `numeric`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown playlist order '{0}', expected 'default' or 'numeric'")]
pub struct UnknownSorting(pub String);
