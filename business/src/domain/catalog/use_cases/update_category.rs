use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Category;
use crate::domain::shared::value_objects::Actor;

pub struct UpdateCategoryParams {
    pub actor: Actor,
    pub id: Uuid,
    pub name: String,
}

#[async_trait]
pub trait UpdateCategoryUseCase: Send + Sync {
    async fn execute(&self, params: UpdateCategoryParams) -> Result<Category, CatalogError>;
}
