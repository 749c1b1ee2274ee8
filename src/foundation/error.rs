/// Convenience result type used across blobscape.
pub type BlobscapeResult<T> = Result<T, BlobscapeError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Most malformed input is normalized silently (colors, clamps, optional fields); only the
/// conditions below abort a single generation call.
#[derive(thiserror::Error, Debug)]
pub enum BlobscapeError {
    /// Invalid user-provided scene data (e.g. zero canvas dimensions).
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid blob geometry input (e.g. fewer than three vertices).
    #[error("geometry error: {0}")]
    Geometry(String),

    /// Recipe lookup or application failed.
    #[error("recipe error: {0}")]
    Recipe(String),

    /// Rasterizing or parsing emitted markup failed.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BlobscapeError {
    /// Build a [`BlobscapeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BlobscapeError::Geometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build a [`BlobscapeError::Recipe`] value.
    pub fn recipe(msg: impl Into<String>) -> Self {
        Self::Recipe(msg.into())
    }

    /// Build a [`BlobscapeError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`BlobscapeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
