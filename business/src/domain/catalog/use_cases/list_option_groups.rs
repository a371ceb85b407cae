use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::OptionGroup;
use crate::domain::shared::value_objects::Actor;

pub struct ListOptionGroupsParams {
    pub actor: Actor,
}

#[async_trait]
pub trait ListOptionGroupsUseCase: Send + Sync {
    async fn execute(&self, params: ListOptionGroupsParams) -> Result<Vec<OptionGroup>, CatalogError>;
}
