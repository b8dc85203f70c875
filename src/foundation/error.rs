/// Convenience result type used across framefill.
pub type FramefillResult<T> = Result<T, FramefillError>;

/// Top-level error taxonomy used by the plugin core.
#[derive(thiserror::Error, Debug)]
pub enum FramefillError {
    /// User-visible input problems: empty dataset, no selection, no matches.
    /// These end the current dispatch early but are not faults.
    #[error("input error: {0}")]
    Input(String),

    /// Image fetch/decode or font loading failures, caught per layer.
    #[error("asset error: {0}")]
    Asset(String),

    /// Rejections from the host document API.
    #[error("host error: {0}")]
    Host(String),

    /// Errors when encoding or decoding UI messages.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FramefillError {
    /// Build a [`FramefillError::Input`] value.
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    /// Build a [`FramefillError::Asset`] value.
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Build a [`FramefillError::Host`] value.
    pub fn host(msg: impl Into<String>) -> Self {
        Self::Host(msg.into())
    }

    /// Build a [`FramefillError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
