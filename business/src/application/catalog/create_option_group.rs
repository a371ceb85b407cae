use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::OptionGroup;
use crate::domain::catalog::repository::OptionGroupRepository;
use crate::domain::catalog::use_cases::create_option_group::{
    CreateOptionGroupParams, CreateOptionGroupUseCase,
};
use crate::domain::logger::Logger;

pub struct CreateOptionGroupUseCaseImpl {
    pub repository: Arc<dyn OptionGroupRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateOptionGroupUseCase for CreateOptionGroupUseCaseImpl {
    async fn execute(&self, params: CreateOptionGroupParams) -> Result<OptionGroup, CatalogError> {
        if !params.actor.is_admin() {
            return Err(CatalogError::Forbidden);
        }

        self.logger
            .info(&format!("Creating option group: {}", params.name));

        let group = OptionGroup::new(params.name, params.selection_mode, params.required)?;
        self.repository.save(&group).await?;

        self.logger
            .info(&format!("Option group created: {}", group.id));
        Ok(group)
    }
}
