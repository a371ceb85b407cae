use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::kitchen::errors::KitchenError;
use crate::domain::kitchen::state_machine::OrderStatus;
use crate::domain::order::model::Order;
use crate::domain::shared::value_objects::Actor;

pub struct TransitionOrderParams {
    pub actor: Actor,
    pub order_id: Uuid,
    pub target: OrderStatus,
}

#[async_trait]
pub trait TransitionOrderUseCase: Send + Sync {
    /// Returns the order as it stands after the move.
    async fn execute(&self, params: TransitionOrderParams) -> Result<Order, KitchenError>;
}
