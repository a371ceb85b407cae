use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Category;
use crate::domain::catalog::repository::CategoryRepository;
use crate::domain::catalog::use_cases::list_categories::{
    ListCategoriesParams, ListCategoriesUseCase,
};
use crate::domain::logger::Logger;

pub struct ListCategoriesUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListCategoriesUseCase for ListCategoriesUseCaseImpl {
    async fn execute(&self, params: ListCategoriesParams) -> Result<Vec<Category>, CatalogError> {
        if !params.actor.is_admin() {
            return Err(CatalogError::Forbidden);
        }

        self.logger.info("Getting categories");
        let categories = self.repository.get_all().await?;
        Ok(categories)
    }
}
