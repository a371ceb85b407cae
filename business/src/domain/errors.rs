/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Persistence,
    #[error("repository.duplicated")]
    Duplicated,
    /// A write was blocked by a row that still references the target.
    #[error("repository.conflict")]
    Conflict,
    /// Serialization failure or deadlock. The whole operation may be resubmitted.
    #[error("repository.transient")]
    Transient,
    #[error("repository.database_error")]
    DatabaseError,
}

impl RepositoryError {
    pub fn not_found() -> Self {
        RepositoryError::NotFound
    }
    pub fn persistence() -> Self {
        RepositoryError::Persistence
    }
    pub fn duplicated() -> Self {
        RepositoryError::Duplicated
    }
    pub fn conflict() -> Self {
        RepositoryError::Conflict
    }
    pub fn transient() -> Self {
        RepositoryError::Transient
    }
    pub fn database_error() -> Self {
        RepositoryError::DatabaseError
    }
}

/// Coarse classification shared by every domain error.
///
/// The boundary layer maps a kind to a transport status without having to
/// know each domain's variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
    Validation,
    Forbidden,
    /// Safe to retry the whole operation from the caller.
    Transient,
    Internal,
}

impl From<&RepositoryError> for ErrorKind {
    fn from(err: &RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ErrorKind::NotFound,
            RepositoryError::Duplicated | RepositoryError::Conflict => ErrorKind::Conflict,
            RepositoryError::Transient => ErrorKind::Transient,
            RepositoryError::Persistence | RepositoryError::DatabaseError => ErrorKind::Internal,
        }
    }
}
