use thiserror::Error;

/// Input rejected before it reaches storage.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("conversation_id must not be empty")]
    EmptyConversationId,

    #[error("conversation_id is {len} bytes, maximum is {max}")]
    ConversationIdTooLong { len: usize, max: usize },

    #[error("{field} is {len} characters, maximum is {max}")]
    TextTooLong { field: &'static str, len: usize, max: usize },
}

/// Process configuration could not be assembled from the environment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} environment variable must be set to a non-empty value")]
    Missing(&'static str),

    #[error("unsupported database url scheme: {0}")]
    UnsupportedScheme(String),
}
