use crate::domain::errors::{ErrorKind, RepositoryError};

use super::state_machine::OrderStatus;

#[derive(Debug, thiserror::Error)]
pub enum KitchenError {
    #[error("kitchen.order_not_found")]
    OrderNotFound,
    #[error("kitchen.invalid_transition")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },
    /// The order changed status between read and write.
    #[error("kitchen.stale_status")]
    StaleStatus,
    #[error("kitchen.forbidden")]
    Forbidden,
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}

impl KitchenError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            KitchenError::OrderNotFound => ErrorKind::NotFound,
            KitchenError::InvalidTransition { .. } => ErrorKind::Validation,
            KitchenError::StaleStatus => ErrorKind::Conflict,
            KitchenError::Forbidden => ErrorKind::Forbidden,
            KitchenError::Repository(err) => ErrorKind::from(err),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("notification.channel_closed")]
    ChannelClosed,
    #[error("notification.delivery_failed: {0}")]
    DeliveryFailed(String),
}
