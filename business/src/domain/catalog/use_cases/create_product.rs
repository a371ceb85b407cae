use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::{NewProductProps, Product};
use crate::domain::shared::value_objects::Actor;

pub struct CreateProductParams {
    pub actor: Actor,
    pub props: NewProductProps,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, CatalogError>;
}
