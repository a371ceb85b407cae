use crate::domain::errors::{ErrorKind, RepositoryError};
use crate::domain::pricing::errors::PricingError;

#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.invalid_quantity")]
    InvalidQuantity,
    #[error("cart.product_not_found")]
    ProductNotFound,
    #[error("cart.product_unavailable")]
    ProductUnavailable,
    #[error("cart.out_of_stock")]
    OutOfStock { available: u32 },
    /// Also returned for a line owned by someone else.
    #[error("cart.line_not_found")]
    LineNotFound,
    #[error("{0}")]
    Pricing(#[from] PricingError),
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}

impl CartError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CartError::InvalidQuantity
            | CartError::ProductUnavailable
            | CartError::OutOfStock { .. } => ErrorKind::Validation,
            CartError::ProductNotFound | CartError::LineNotFound => ErrorKind::NotFound,
            CartError::Pricing(err) => err.kind(),
            CartError::Repository(err) => ErrorKind::from(err),
        }
    }
}
