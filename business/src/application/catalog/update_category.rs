use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Category;
use crate::domain::catalog::repository::CategoryRepository;
use crate::domain::catalog::use_cases::update_category::{
    UpdateCategoryParams, UpdateCategoryUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct UpdateCategoryUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCategoryUseCase for UpdateCategoryUseCaseImpl {
    async fn execute(&self, params: UpdateCategoryParams) -> Result<Category, CatalogError> {
        if !params.actor.is_admin() {
            return Err(CatalogError::Forbidden);
        }

        self.logger
            .info(&format!("Updating category: {}", params.id));

        let renamed = Category::new(params.name)?;
        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| CatalogError::or_not_found(e, CatalogError::CategoryNotFound))?;

        let category = Category {
            name: renamed.name,
            ..existing
        };

        self.repository.save(&category).await.map_err(|e| match e {
            RepositoryError::Duplicated => CatalogError::CategoryNameTaken,
            other => CatalogError::Repository(other),
        })?;

        self.logger
            .info(&format!("Category updated: {}", category.id));
        Ok(category)
    }
}
