use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::clear::{ClearCartParams, ClearCartUseCase};
use crate::domain::logger::Logger;

pub struct ClearCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearCartUseCase for ClearCartUseCaseImpl {
    async fn execute(&self, params: ClearCartParams) -> Result<u64, CartError> {
        self.logger
            .info(&format!("Clearing cart of user: {}", params.user_id));

        let count = self.repository.clear(&params.user_id).await?;

        self.logger.info(&format!("Cleared {} cart lines", count));
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::UserId;
    use crate::test_support::{MockCartRepo, mock_logger};

    #[tokio::test]
    async fn should_return_number_of_cleared_lines() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_clear().times(1).returning(|_| Ok(3));

        let use_case = ClearCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let count = use_case
            .execute(ClearCartParams {
                user_id: UserId::new("customer-1"),
            })
            .await
            .unwrap();

        assert_eq!(count, 3);
    }

    #[tokio::test]
    async fn should_propagate_repository_errors() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_clear()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = ClearCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ClearCartParams {
                user_id: UserId::new("customer-1"),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            CartError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
