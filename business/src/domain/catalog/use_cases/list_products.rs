use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;
use crate::domain::shared::value_objects::Actor;

pub struct ListProductsParams {
    pub actor: Actor,
}

#[async_trait]
pub trait ListProductsUseCase: Send + Sync {
    async fn execute(&self, params: ListProductsParams) -> Result<Vec<Product>, CatalogError>;
}
