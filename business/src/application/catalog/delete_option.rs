use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::repository::OptionGroupRepository;
use crate::domain::catalog::use_cases::delete_option::{DeleteOptionParams, DeleteOptionUseCase};
use crate::domain::logger::Logger;

pub struct DeleteOptionUseCaseImpl {
    pub repository: Arc<dyn OptionGroupRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteOptionUseCase for DeleteOptionUseCaseImpl {
    async fn execute(&self, params: DeleteOptionParams) -> Result<(), CatalogError> {
        if !params.actor.is_admin() {
            return Err(CatalogError::Forbidden);
        }

        self.logger.info(&format!("Deleting option: {}", params.id));

        self.repository
            .delete_option(params.id)
            .await
            .map_err(|e| CatalogError::or_not_found(e, CatalogError::OptionNotFound))?;

        self.logger.info(&format!("Option deleted: {}", params.id));
        Ok(())
    }
}
