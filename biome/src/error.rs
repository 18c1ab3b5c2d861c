pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The invocation itself failed: transport, permissions or an unknown
    /// function.
    #[error("failed to invoke {function_name}: {message}")]
    Invoke {
        function_name: String,
        message: String,
    },

    #[error("{function_name} returned no payload")]
    EmptyPayload { function_name: String },

    #[error("invalid JSON payload: {0}")]
    Payload(#[from] serde_json::Error),
}
