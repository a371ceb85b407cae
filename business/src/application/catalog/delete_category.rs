use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::repository::CategoryRepository;
use crate::domain::catalog::use_cases::delete_category::{
    DeleteCategoryParams, DeleteCategoryUseCase,
};
use crate::domain::logger::Logger;

pub struct DeleteCategoryUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteCategoryUseCase for DeleteCategoryUseCaseImpl {
    async fn execute(&self, params: DeleteCategoryParams) -> Result<(), CatalogError> {
        if !params.actor.is_admin() {
            return Err(CatalogError::Forbidden);
        }

        self.logger
            .info(&format!("Deleting category: {}", params.id));

        self.repository
            .get_by_id(params.id)
            .await
            .map_err(|e| CatalogError::or_not_found(e, CatalogError::CategoryNotFound))?;

        let blocking = self.repository.count_products(params.id).await?;
        if blocking > 0 {
            self.logger.warn(&format!(
                "Category {} still used by {} products",
                params.id, blocking
            ));
            return Err(CatalogError::CategoryInUse { blocking });
        }

        self.repository
            .delete(params.id)
            .await
            .map_err(|e| CatalogError::or_not_found(e, CatalogError::CategoryNotFound))?;

        self.logger
            .info(&format!("Category deleted: {}", params.id));
        Ok(())
    }
}
