use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;
use crate::domain::shared::value_objects::Actor;

pub struct SetProductActiveParams {
    pub actor: Actor,
    pub id: Uuid,
    pub active: bool,
}

#[async_trait]
pub trait SetProductActiveUseCase: Send + Sync {
    async fn execute(&self, params: SetProductActiveParams) -> Result<Product, CatalogError>;
}
