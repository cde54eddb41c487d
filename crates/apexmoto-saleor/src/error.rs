use thiserror::Error;

/// Errors returned by the Saleor GraphQL client.
#[derive(Debug, Error)]
pub enum SaleorError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("unexpected HTTP status {status} for {operation}")]
    UnexpectedStatus { status: u16, operation: String },

    /// The response carried a non-empty `errors` array.
    #[error("GraphQL errors in {operation}: {}", messages.join("; "))]
    GraphQl {
        operation: String,
        messages: Vec<String>,
    },

    /// The response carried neither `data` nor `errors`.
    #[error("empty GraphQL response for {operation}")]
    MissingData { operation: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid API endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
}
