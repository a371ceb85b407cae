use crate::domain::errors::{ErrorKind, RepositoryError};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.name_empty")]
    NameEmpty,
    #[error("catalog.negative_price")]
    NegativePrice,
    #[error("catalog.product_not_found")]
    ProductNotFound,
    #[error("catalog.category_not_found")]
    CategoryNotFound,
    #[error("catalog.option_group_not_found")]
    OptionGroupNotFound,
    #[error("catalog.option_not_found")]
    OptionNotFound,
    #[error("catalog.category_name_taken")]
    CategoryNameTaken,
    #[error("catalog.category_in_use")]
    CategoryInUse { blocking: u64 },
    #[error("catalog.option_group_in_use")]
    OptionGroupInUse { blocking: u64 },
    #[error("catalog.forbidden")]
    Forbidden,
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}

impl CatalogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::NameEmpty | CatalogError::NegativePrice => ErrorKind::Validation,
            CatalogError::ProductNotFound
            | CatalogError::CategoryNotFound
            | CatalogError::OptionGroupNotFound
            | CatalogError::OptionNotFound => ErrorKind::NotFound,
            CatalogError::CategoryNameTaken
            | CatalogError::CategoryInUse { .. }
            | CatalogError::OptionGroupInUse { .. } => ErrorKind::Conflict,
            CatalogError::Forbidden => ErrorKind::Forbidden,
            CatalogError::Repository(err) => ErrorKind::from(err),
        }
    }

    /// Maps a repository miss onto the given not-found variant.
    pub(crate) fn or_not_found(err: RepositoryError, not_found: CatalogError) -> CatalogError {
        match err {
            RepositoryError::NotFound => not_found,
            other => CatalogError::Repository(other),
        }
    }
}
