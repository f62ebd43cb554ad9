use thiserror::Error;

/// Rejected user input. Reported immediately, nothing is written to storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid identity number")]
    InvalidIdentityNumber,
    #[error("Age must be a whole number")]
    InvalidAge,
    #[error("Voter must be 18 or older")]
    Underage,
    #[error("All fields are required")]
    MissingFields,
    #[error("Please select a candidate")]
    NoCandidateSelected,
    #[error("Unknown candidate: {0}")]
    UnknownCandidate(String),
}

/// Login failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Voter not found or not registered")]
    VoterNotFound,
    #[error("Authentication failed")]
    CredentialMismatch,
}

/// Failures raised by the persistence layer
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Record violates a uniqueness constraint")]
    UniqueViolation,
    #[error("Database error: {0}")]
    Sqlite(#[source] rusqlite::Error),
}

impl From<rusqlite::Error> for StorageError {
    fn from(error: rusqlite::Error) -> Self {
        match &error {
            rusqlite::Error::SqliteFailure(failure, _)
                if failure.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                    || failure.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY =>
            {
                StorageError::UniqueViolation
            }
            _ => StorageError::Sqlite(error),
        }
    }
}

/// Top-level error returned by every flow
#[derive(Debug, Error)]
pub enum VotingError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Voter already registered")]
    AlreadyRegistered,
    #[error("Voter has already voted in this election")]
    AlreadyVoted,
    #[error(transparent)]
    Authentication(#[from] AuthError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Coarse classification used by the shell to pick a dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Conflict,
    Authentication,
    Storage,
}

impl VotingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            VotingError::Validation(_) => ErrorKind::Validation,
            VotingError::AlreadyRegistered | VotingError::AlreadyVoted => ErrorKind::Conflict,
            VotingError::Authentication(_) => ErrorKind::Authentication,
            VotingError::Storage(_) => ErrorKind::Storage,
        }
    }
}

impl From<rusqlite::Error> for VotingError {
    fn from(error: rusqlite::Error) -> Self {
        VotingError::Storage(StorageError::from(error))
    }
}

pub type Result<T, E = VotingError> = std::result::Result<T, E>;
