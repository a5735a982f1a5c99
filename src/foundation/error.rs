/// Convenience result type used across reelgrid.
pub type ReelgridResult<T> = Result<T, ReelgridError>;

/// Top-level error taxonomy used by engine APIs.
///
/// All failures are local and synchronous: an insertion either fully succeeds
/// or leaves the tree unchanged, and nothing in the core retries.
#[derive(thiserror::Error, Debug)]
pub enum ReelgridError {
    /// A caller passed a value the engine cannot interpret (unknown placement
    /// policy, unknown anchor name, empty keyframe path, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The tree is not in a state that permits the requested operation
    /// (composing an empty screen, adding an empty film, ...).
    #[error("precondition failed: {0}")]
    PreconditionFailed(String),

    /// A resolved-composition query was made before `compose()` succeeded.
    #[error("not ready: {0}")]
    NotReady(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ReelgridError {
    /// Build a [`ReelgridError::InvalidArgument`] value.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Build a [`ReelgridError::PreconditionFailed`] value.
    pub fn precondition(msg: impl Into<String>) -> Self {
        Self::PreconditionFailed(msg.into())
    }

    /// Build a [`ReelgridError::NotReady`] value.
    pub fn not_ready(msg: impl Into<String>) -> Self {
        Self::NotReady(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
