use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::ProductOption;
use crate::domain::shared::money::Money;
use crate::domain::shared::value_objects::Actor;

pub struct CreateOptionParams {
    pub actor: Actor,
    pub group_id: Uuid,
    pub name: String,
    /// Defaults to zero.
    pub price_adjustment: Option<Money>,
}

#[async_trait]
pub trait CreateOptionUseCase: Send + Sync {
    async fn execute(&self, params: CreateOptionParams) -> Result<ProductOption, CatalogError>;
}
