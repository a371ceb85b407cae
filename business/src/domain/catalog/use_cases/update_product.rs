use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::{NewProductProps, Product};
use crate::domain::shared::value_objects::Actor;

pub struct UpdateProductParams {
    pub actor: Actor,
    pub id: Uuid,
    pub props: NewProductProps,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, CatalogError>;
}
