use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::ProductOption;
use crate::domain::shared::money::Money;
use crate::domain::shared::value_objects::Actor;

pub struct UpdateOptionParams {
    pub actor: Actor,
    pub id: Uuid,
    pub name: String,
    pub price_adjustment: Money,
}

#[async_trait]
pub trait UpdateOptionUseCase: Send + Sync {
    async fn execute(&self, params: UpdateOptionParams) -> Result<ProductOption, CatalogError>;
}
