use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Category;
use crate::domain::catalog::repository::CategoryRepository;
use crate::domain::catalog::use_cases::create_category::{
    CreateCategoryParams, CreateCategoryUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct CreateCategoryUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateCategoryUseCase for CreateCategoryUseCaseImpl {
    async fn execute(&self, params: CreateCategoryParams) -> Result<Category, CatalogError> {
        if !params.actor.is_admin() {
            return Err(CatalogError::Forbidden);
        }

        self.logger
            .info(&format!("Creating category: {}", params.name));

        let category = Category::new(params.name)?;

        self.repository.save(&category).await.map_err(|e| match e {
            RepositoryError::Duplicated => CatalogError::CategoryNameTaken,
            other => CatalogError::Repository(other),
        })?;

        self.logger
            .info(&format!("Category created: {}", category.id));
        Ok(category)
    }
}
