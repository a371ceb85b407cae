use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::{OptionGroup, SelectionMode};
use crate::domain::shared::value_objects::Actor;

pub struct CreateOptionGroupParams {
    pub actor: Actor,
    pub name: String,
    pub selection_mode: SelectionMode,
    pub required: bool,
}

#[async_trait]
pub trait CreateOptionGroupUseCase: Send + Sync {
    async fn execute(&self, params: CreateOptionGroupParams) -> Result<OptionGroup, CatalogError>;
}
