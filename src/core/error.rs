use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum SwError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The response body was not valid JSON or did not match the expected shape.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The data received from the API was missing or empty at the expected path.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// A quote record lacked one of the two symbol fields it is keyed by.
    #[error("quote record is missing the `{field}` field")]
    MissingSymbolField {
        /// The absent field name (`symbol` or `Symbol`).
        field: &'static str,
    },
}
