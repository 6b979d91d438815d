/// Convenience result type used across cardfx.
pub type FxResult<T> = Result<T, FxError>;

/// Error taxonomy for the tween, timeline and configuration APIs.
///
/// Effect entry points never surface these; they are programmer-contract violations.
#[derive(thiserror::Error, Debug)]
pub enum FxError {
    /// A timeline was started a second time.
    #[error("timeline already started")]
    AlreadyStarted,

    /// An entry was added to a timeline after it started.
    #[error("timeline is sealed: entries cannot be added after start")]
    TimelineSealed,

    /// Invalid tween, timeline or geometry parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid engine configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FxError {
    /// Build a [`FxError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FxError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
