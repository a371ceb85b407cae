use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Category;
use crate::domain::shared::value_objects::Actor;

pub struct ListCategoriesParams {
    pub actor: Actor,
}

#[async_trait]
pub trait ListCategoriesUseCase: Send + Sync {
    async fn execute(&self, params: ListCategoriesParams) -> Result<Vec<Category>, CatalogError>;
}
