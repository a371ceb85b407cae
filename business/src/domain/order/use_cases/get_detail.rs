use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::shared::value_objects::UserId;

pub struct GetOrderDetailParams {
    pub id: Uuid,
    pub user_id: UserId,
}

#[async_trait]
pub trait GetOrderDetailUseCase: Send + Sync {
    async fn execute(&self, params: GetOrderDetailParams) -> Result<Order, OrderError>;
}
