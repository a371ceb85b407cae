use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Category;
use crate::domain::shared::value_objects::Actor;

pub struct CreateCategoryParams {
    pub actor: Actor,
    pub name: String,
}

#[async_trait]
pub trait CreateCategoryUseCase: Send + Sync {
    async fn execute(&self, params: CreateCategoryParams) -> Result<Category, CatalogError>;
}
