/// Convenience result type used across charhash.
pub type CharhashResult<T> = Result<T, CharhashError>;

/// Top-level error taxonomy.
///
/// Every variant is produced before any generation work starts; the generator itself is
/// total over parsed seeds.
#[derive(thiserror::Error, Debug)]
pub enum CharhashError {
    /// Key is not exactly 16 hex digits after optional `0x` prefix removal.
    #[error("invalid seed: {0}")]
    InvalidSeed(String),

    /// Non-finite or out-of-range numeric option.
    #[error("invalid option: {0}")]
    InvalidOption(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CharhashError {
    /// Build a [`CharhashError::InvalidSeed`] value.
    pub fn invalid_seed(msg: impl Into<String>) -> Self {
        Self::InvalidSeed(msg.into())
    }

    /// Build a [`CharhashError::InvalidOption`] value.
    pub fn invalid_option(msg: impl Into<String>) -> Self {
        Self::InvalidOption(msg.into())
    }

    /// Build a [`CharhashError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for CharhashError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
