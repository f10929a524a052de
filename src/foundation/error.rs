/// Convenience result type used across Wallery.
pub type WalleryResult<T> = Result<T, WalleryError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum WalleryError {
    /// Invalid caller-provided item data or options.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An arranger was invoked on a workspace with no remaining items.
    #[error("empty workspace: nothing to arrange")]
    EmptyWorkspace,

    /// A conflict search exhausted its step budget without finding a
    /// conflict-free position. The arrangement is discarded as a whole.
    #[error("placement unresolved: {0}")]
    PlacementUnresolved(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WalleryError {
    /// Build a [`WalleryError::InvalidInput`] value.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Build a [`WalleryError::PlacementUnresolved`] value.
    pub fn placement_unresolved(msg: impl Into<String>) -> Self {
        Self::PlacementUnresolved(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
