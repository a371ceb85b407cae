use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::shared::value_objects::Actor;

pub struct DeleteCategoryParams {
    pub actor: Actor,
    pub id: Uuid,
}

#[async_trait]
pub trait DeleteCategoryUseCase: Send + Sync {
    async fn execute(&self, params: DeleteCategoryParams) -> Result<(), CatalogError>;
}
