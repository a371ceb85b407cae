use async_trait::async_trait;

use crate::domain::kitchen::errors::KitchenError;
use crate::domain::order::model::Order;
use crate::domain::shared::value_objects::Actor;

pub struct GetKitchenQueueParams {
    pub actor: Actor,
}

#[async_trait]
pub trait GetKitchenQueueUseCase: Send + Sync {
    async fn execute(&self, params: GetKitchenQueueParams) -> Result<Vec<Order>, KitchenError>;
}
