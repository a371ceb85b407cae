use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;
use crate::domain::shared::value_objects::Actor;

pub struct SetProductSpecialParams {
    pub actor: Actor,
    pub id: Uuid,
    pub special: bool,
}

#[async_trait]
pub trait SetProductSpecialUseCase: Send + Sync {
    async fn execute(&self, params: SetProductSpecialParams) -> Result<Product, CatalogError>;
}
