use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::{OptionGroup, SelectionMode};
use crate::domain::shared::value_objects::Actor;

pub struct UpdateOptionGroupParams {
    pub actor: Actor,
    pub id: Uuid,
    pub name: String,
    pub selection_mode: SelectionMode,
    pub required: bool,
}

#[async_trait]
pub trait UpdateOptionGroupUseCase: Send + Sync {
    async fn execute(&self, params: UpdateOptionGroupParams) -> Result<OptionGroup, CatalogError>;
}
