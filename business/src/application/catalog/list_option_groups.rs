use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::OptionGroup;
use crate::domain::catalog::repository::OptionGroupRepository;
use crate::domain::catalog::use_cases::list_option_groups::{
    ListOptionGroupsParams, ListOptionGroupsUseCase,
};
use crate::domain::logger::Logger;

pub struct ListOptionGroupsUseCaseImpl {
    pub repository: Arc<dyn OptionGroupRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListOptionGroupsUseCase for ListOptionGroupsUseCaseImpl {
    async fn execute(
        &self,
        params: ListOptionGroupsParams,
    ) -> Result<Vec<OptionGroup>, CatalogError> {
        if !params.actor.is_admin() {
            return Err(CatalogError::Forbidden);
        }

        self.logger.info("Getting option groups");

        let groups = self.repository.get_all().await?;

        self.logger
            .info(&format!("Found {} option groups", groups.len()));
        Ok(groups)
    }
}
