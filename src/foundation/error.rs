/// Convenience result type used across the crate.
pub type SpotlightResult<T> = Result<T, SpotlightError>;

/// Top-level error taxonomy used by mask and morph APIs.
#[derive(thiserror::Error, Debug)]
pub enum SpotlightError {
    /// Invalid user-provided geometry, options or tour data.
    #[error("validation error: {0}")]
    Validation(String),

    /// A path string could not be parsed or sampled into a ring.
    #[error("path error: {0}")]
    Path(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SpotlightError {
    /// Build a [`SpotlightError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SpotlightError::Path`] value.
    pub fn path(msg: impl Into<String>) -> Self {
        Self::Path(msg.into())
    }

    /// Build a [`SpotlightError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
