use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::OptionGroup;
use crate::domain::catalog::repository::OptionGroupRepository;
use crate::domain::catalog::use_cases::update_option_group::{
    UpdateOptionGroupParams, UpdateOptionGroupUseCase,
};
use crate::domain::logger::Logger;

pub struct UpdateOptionGroupUseCaseImpl {
    pub repository: Arc<dyn OptionGroupRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateOptionGroupUseCase for UpdateOptionGroupUseCaseImpl {
    async fn execute(&self, params: UpdateOptionGroupParams) -> Result<OptionGroup, CatalogError> {
        if !params.actor.is_admin() {
            return Err(CatalogError::Forbidden);
        }

        self.logger
            .info(&format!("Updating option group: {}", params.id));

        let revised = OptionGroup::new(params.name, params.selection_mode, params.required)?;
        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| CatalogError::or_not_found(e, CatalogError::OptionGroupNotFound))?;

        let group = OptionGroup {
            id: existing.id,
            options: existing.options,
            ..revised
        };
        self.repository.save(&group).await?;

        self.logger
            .info(&format!("Option group updated: {}", group.id));
        Ok(group)
    }
}
