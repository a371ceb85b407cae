use uuid::Uuid;

use crate::domain::errors::{ErrorKind, RepositoryError};
use crate::domain::pricing::errors::PricingError;

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("order.empty_cart")]
    EmptyCart,
    #[error("order.product_unavailable")]
    ProductUnavailable { product_id: Uuid },
    #[error("order.out_of_stock")]
    OutOfStock { product: String },
    #[error("{0}")]
    Pricing(#[from] PricingError),
    #[error("order.not_found")]
    NotFound,
    /// The checkout transaction was aborted by a conflict; resubmit to retry.
    #[error("order.could_not_place_order")]
    CouldNotPlaceOrder,
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}

impl OrderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            OrderError::EmptyCart
            | OrderError::ProductUnavailable { .. }
            | OrderError::OutOfStock { .. } => ErrorKind::Validation,
            OrderError::Pricing(err) => err.kind(),
            OrderError::NotFound => ErrorKind::NotFound,
            OrderError::CouldNotPlaceOrder => ErrorKind::Transient,
            OrderError::Repository(err) => ErrorKind::from(err),
        }
    }

    /// Errors raised inside the checkout transaction.
    pub fn from_checkout(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Transient => OrderError::CouldNotPlaceOrder,
            other => OrderError::Repository(other),
        }
    }
}
