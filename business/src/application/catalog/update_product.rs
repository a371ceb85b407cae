use std::sync::Arc;

use async_trait::async_trait;

use super::create_product::check_references;
use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;
use crate::domain::catalog::repository::{
    CategoryRepository, OptionGroupRepository, ProductRepository,
};
use crate::domain::catalog::use_cases::update_product::{
    UpdateProductParams, UpdateProductUseCase,
};
use crate::domain::logger::Logger;

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub category_repository: Arc<dyn CategoryRepository>,
    pub option_group_repository: Arc<dyn OptionGroupRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, CatalogError> {
        if !params.actor.is_admin() {
            return Err(CatalogError::Forbidden);
        }

        self.logger.info(&format!("Updating product: {}", params.id));

        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| CatalogError::or_not_found(e, CatalogError::ProductNotFound))?;

        let mut product = existing.revise(params.props)?;
        check_references(
            self.category_repository.as_ref(),
            self.option_group_repository.as_ref(),
            &mut product,
        )
        .await?;

        self.repository.save(&product).await?;

        self.logger.info(&format!("Product updated: {}", product.id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::model::NewProductProps;
    use crate::domain::errors::RepositoryError;
    use crate::test_support::{
        MockCategoryRepo, MockOptionGroupRepo, MockProductRepo, admin, mock_logger, money,
        product,
    };
    use uuid::Uuid;

    fn props(image_path: Option<&str>) -> NewProductProps {
        NewProductProps {
            name: "Café Americano doble".to_string(),
            price: money("42.00"),
            category_id: None,
            image_path: image_path.map(str::to_string),
            stock: 7,
            option_group_ids: vec![],
        }
    }

    #[tokio::test]
    async fn should_keep_flags_and_image_when_not_replaced() {
        let mut existing = product("Café Americano", "30.00", 5);
        existing.special = true;
        existing.image_path = Some("products/americano.jpg".to_string());
        let id = existing.id;
        let created_at = existing.created_at;
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(existing.clone()));
        mock_repo.expect_save().times(1).returning(|_| Ok(()));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            category_repository: Arc::new(MockCategoryRepo::new()),
            option_group_repository: Arc::new(MockOptionGroupRepo::new()),
            logger: mock_logger(),
        };

        let updated = use_case
            .execute(UpdateProductParams {
                actor: admin(),
                id,
                props: props(None),
            })
            .await
            .unwrap();

        assert_eq!(updated.id, id);
        assert_eq!(updated.name, "Café Americano doble");
        assert_eq!(updated.price, money("42.00"));
        assert_eq!(updated.stock, 7);
        assert!(updated.special);
        assert_eq!(updated.image_path.as_deref(), Some("products/americano.jpg"));
        assert_eq!(updated.created_at, created_at);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_product() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        mock_repo.expect_save().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            category_repository: Arc::new(MockCategoryRepo::new()),
            option_group_repository: Arc::new(MockOptionGroupRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                actor: admin(),
                id: Uuid::new_v4(),
                props: props(Some("products/new.jpg")),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CatalogError::ProductNotFound));
    }
}
