use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::shared::value_objects::Actor;

pub struct DeleteProductParams {
    pub actor: Actor,
    pub id: Uuid,
}

#[async_trait]
pub trait DeleteProductUseCase: Send + Sync {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), CatalogError>;
}
