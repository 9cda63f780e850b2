//! Error type shared by the geometric computations.

/// Error type for fractal generation and function sampling.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    /// The request was malformed: bad depth, non-positive step,
    /// non-finite coordinates, or a result too large to build.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl GeometryError {
    /// Shorthand for [`GeometryError::InvalidArgument`].
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Short machine-readable code, used as the `error` field on the wire.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "invalidArgument",
        }
    }
}
