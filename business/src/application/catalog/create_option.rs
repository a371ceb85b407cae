use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::ProductOption;
use crate::domain::catalog::repository::OptionGroupRepository;
use crate::domain::catalog::use_cases::create_option::{CreateOptionParams, CreateOptionUseCase};
use crate::domain::logger::Logger;
use crate::domain::shared::money::Money;

pub struct CreateOptionUseCaseImpl {
    pub repository: Arc<dyn OptionGroupRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateOptionUseCase for CreateOptionUseCaseImpl {
    async fn execute(&self, params: CreateOptionParams) -> Result<ProductOption, CatalogError> {
        if !params.actor.is_admin() {
            return Err(CatalogError::Forbidden);
        }

        self.logger.info(&format!(
            "Creating option {} in group {}",
            params.name, params.group_id
        ));

        let group = self
            .repository
            .get_by_id(params.group_id)
            .await
            .map_err(|e| CatalogError::or_not_found(e, CatalogError::OptionGroupNotFound))?;

        let option = ProductOption::new(
            group.id,
            params.name,
            params.price_adjustment.unwrap_or_else(Money::zero),
        )?;
        self.repository.save_option(&option).await?;

        self.logger.info(&format!("Option created: {}", option.id));
        Ok(option)
    }
}
