use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartLine;
use crate::domain::shared::value_objects::UserId;

pub struct AddCartLineParams {
    pub user_id: UserId,
    pub product_id: Uuid,
    pub quantity: u32,
    pub note: Option<String>,
    pub option_ids: Vec<Uuid>,
}

#[async_trait]
pub trait AddCartLineUseCase: Send + Sync {
    async fn execute(&self, params: AddCartLineParams) -> Result<CartLine, CartError>;
}
