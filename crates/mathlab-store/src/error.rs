//! Error type for profile storage.

/// Error type for the key-value stores and the progress store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing the backing storage failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored value could not be parsed.
    #[error("stored profile is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// The key contains characters that are not allowed in a file name.
    #[error("invalid storage key {0:?}")]
    InvalidKey(String),

    /// A user name failed the form constraints.
    #[error("invalid user name: {0}")]
    InvalidName(String),

    /// A user with this name already exists.
    #[error("user {0:?} already exists")]
    DuplicateUser(String),

    /// No user with this name exists.
    #[error("unknown user {0:?}")]
    UnknownUser(String),

    /// No topic with this id exists.
    #[error("unknown topic {0:?}")]
    UnknownTopic(String),

    /// The operation needs a selected user.
    #[error("no user selected; create or select one first")]
    NoActiveUser,
}
