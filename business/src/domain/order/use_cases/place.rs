use async_trait::async_trait;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::OrderReceipt;
use crate::domain::shared::value_objects::Actor;

pub struct PlaceOrderParams {
    pub actor: Actor,
    pub note: Option<String>,
}

#[async_trait]
pub trait PlaceOrderUseCase: Send + Sync {
    async fn execute(&self, params: PlaceOrderParams) -> Result<OrderReceipt, OrderError>;
}
