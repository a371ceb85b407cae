use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::ProductDetail;
use crate::domain::shared::value_objects::Actor;

pub struct GetProductDetailParams {
    pub actor: Actor,
    pub id: Uuid,
}

#[async_trait]
pub trait GetProductDetailUseCase: Send + Sync {
    async fn execute(&self, params: GetProductDetailParams) -> Result<ProductDetail, CatalogError>;
}
