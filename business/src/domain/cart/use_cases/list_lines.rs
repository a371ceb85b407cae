use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartView;
use crate::domain::shared::value_objects::UserId;

pub struct ListCartLinesParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait ListCartLinesUseCase: Send + Sync {
    async fn execute(&self, params: ListCartLinesParams) -> Result<CartView, CartError>;
}
