use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::repository::ProductRepository;
use crate::domain::catalog::use_cases::delete_product::{
    DeleteProductParams, DeleteProductUseCase,
};
use crate::domain::logger::Logger;

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), CatalogError> {
        if !params.actor.is_admin() {
            return Err(CatalogError::Forbidden);
        }

        self.logger.info(&format!("Deleting product: {}", params.id));

        // Group links and cart lines go with it; order items keep their snapshots
        self.repository
            .delete(params.id)
            .await
            .map_err(|e| CatalogError::or_not_found(e, CatalogError::ProductNotFound))?;

        self.logger.info(&format!("Product deleted: {}", params.id));
        Ok(())
    }
}
