use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouteError {
    /// A precondition on the request failed before any computation ran.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("malformed input: cannot parse timestamp `{input}`: {source}")]
    MalformedInput {
        input: String,
        #[source]
        source: jiff::Error,
    },
}

impl RouteError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        RouteError::InvalidInput(message.into())
    }
}
