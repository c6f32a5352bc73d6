//! Error type for API requests.

/// Errors returned by [`ApiClient`](super::ApiClient) operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-success status code.
    #[error("server returned HTTP {code} for {path}")]
    Status { code: u16, path: String },

    /// The request never completed (DNS, connect, timeout, TLS).
    #[error("request to {path} failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: Box<ureq::Transport>,
    },

    /// The response body was not the JSON we expected.
    #[error("invalid response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ApiError {
    pub(super) fn from_ureq(path: &str, err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(code, _) => ApiError::Status {
                code,
                path: path.to_string(),
            },
            ureq::Error::Transport(source) => ApiError::Transport {
                path: path.to_string(),
                source: Box::new(source),
            },
        }
    }
}
