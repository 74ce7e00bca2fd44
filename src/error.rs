use thiserror::Error;

/// Reasons a page could not be fetched. These never leave a per-link task;
/// the caller only ever sees the absence of content.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("access denied (403) for {0}")]
    Blocked(String),

    #[error("unexpected status {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Reasons a detail page yielded no record.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("no __NEXT_DATA__ payload on page")]
    MissingPayload,

    #[error("payload has no property cache")]
    MissingCache,

    #[error("property cache is empty")]
    EmptyCache,

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
