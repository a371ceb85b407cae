use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::order::model::Order;

use super::state_machine::OrderStatus;

#[async_trait]
pub trait KitchenRepository: Send + Sync {
    /// Received and in-preparation orders with their items, oldest first.
    async fn get_active_orders(&self) -> Result<Vec<Order>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Order, RepositoryError>;
    /// Moves the order only if it is still in `from`. Returns whether a row changed.
    async fn update_status(
        &self,
        id: Uuid,
        from: OrderStatus,
        to: OrderStatus,
    ) -> Result<bool, RepositoryError>;
    /// Cancels the order if it is still in `from` and returns every item's
    /// quantity to stock, in one transaction.
    async fn cancel(&self, id: Uuid, from: OrderStatus) -> Result<bool, RepositoryError>;
}
