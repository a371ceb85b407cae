use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::model::CartLine;
use crate::domain::catalog::model::ProductDetail;
use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::{Order, OrderItem, OrderSummary};

/// One open checkout transaction.
///
/// Nothing written through a session is visible to other readers until
/// [`CheckoutSession::commit`] succeeds. Dropping a session without committing
/// discards every write.
#[async_trait]
pub trait CheckoutSession: Send {
    /// Reads the user's cart lines and locks them until the session ends.
    async fn lock_cart_lines(&mut self, user_id: &UserId) -> Result<Vec<CartLine>, RepositoryError>;
    /// Current catalog state of the product, read inside the transaction.
    async fn get_product_detail(
        &mut self,
        product_id: Uuid,
    ) -> Result<Option<ProductDetail>, RepositoryError>;
    /// Conditionally decrements stock. Returns `false` when not enough is left.
    async fn reserve_stock(&mut self, product_id: Uuid, quantity: u32) -> Result<bool, RepositoryError>;
    async fn insert_order(&mut self, order: &Order) -> Result<(), RepositoryError>;
    /// Inserts the item and one snapshot row per chosen option.
    async fn insert_order_item(&mut self, order_id: Uuid, item: &OrderItem) -> Result<(), RepositoryError>;
    async fn clear_cart(&mut self, user_id: &UserId) -> Result<u64, RepositoryError>;
    async fn commit(&mut self) -> Result<(), RepositoryError>;
    async fn rollback(&mut self) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait CheckoutUnitOfWork: Send + Sync {
    async fn begin(&self) -> Result<Box<dyn CheckoutSession>, RepositoryError>;
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Newest first.
    async fn get_history(&self, user_id: &UserId) -> Result<Vec<OrderSummary>, RepositoryError>;
    /// Scoped to the owner; someone else's order is `NotFound`.
    async fn get_for_user(&self, id: Uuid, user_id: &UserId) -> Result<Order, RepositoryError>;
}
