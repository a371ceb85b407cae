use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::ProductOption;
use crate::domain::catalog::repository::OptionGroupRepository;
use crate::domain::catalog::use_cases::update_option::{UpdateOptionParams, UpdateOptionUseCase};
use crate::domain::logger::Logger;

pub struct UpdateOptionUseCaseImpl {
    pub repository: Arc<dyn OptionGroupRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateOptionUseCase for UpdateOptionUseCaseImpl {
    async fn execute(&self, params: UpdateOptionParams) -> Result<ProductOption, CatalogError> {
        if !params.actor.is_admin() {
            return Err(CatalogError::Forbidden);
        }

        self.logger.info(&format!("Updating option: {}", params.id));

        let existing = self
            .repository
            .get_option(params.id)
            .await
            .map_err(|e| CatalogError::or_not_found(e, CatalogError::OptionNotFound))?;

        let revised = ProductOption::new(existing.group_id, params.name, params.price_adjustment)?;
        let option = ProductOption {
            id: existing.id,
            ..revised
        };
        self.repository.save_option(&option).await?;

        self.logger.info(&format!("Option updated: {}", option.id));
        Ok(option)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::test_support::{MockOptionGroupRepo, admin, mock_logger, money, option};
    use uuid::Uuid;

    #[tokio::test]
    async fn should_reprice_option_keeping_group() {
        let group_id = Uuid::new_v4();
        let existing = option(group_id, "Grande", "10.00");
        let id = existing.id;
        let mut mock_repo = MockOptionGroupRepo::new();
        mock_repo
            .expect_get_option()
            .returning(move |_| Ok(existing.clone()));
        mock_repo.expect_save_option().times(1).returning(|_| Ok(()));

        let use_case = UpdateOptionUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let updated = use_case
            .execute(UpdateOptionParams {
                actor: admin(),
                id,
                name: "Grande".to_string(),
                price_adjustment: money("12.00"),
            })
            .await
            .unwrap();

        assert_eq!(updated.id, id);
        assert_eq!(updated.group_id, group_id);
        assert_eq!(updated.price_adjustment, money("12.00"));
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_option() {
        let mut mock_repo = MockOptionGroupRepo::new();
        mock_repo
            .expect_get_option()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = UpdateOptionUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateOptionParams {
                actor: admin(),
                id: Uuid::new_v4(),
                name: "Grande".to_string(),
                price_adjustment: money("12.00"),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CatalogError::OptionNotFound));
    }
}
