use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;
use crate::domain::catalog::repository::ProductRepository;
use crate::domain::catalog::use_cases::set_product_active::{
    SetProductActiveParams, SetProductActiveUseCase,
};
use crate::domain::logger::Logger;

pub struct SetProductActiveUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SetProductActiveUseCase for SetProductActiveUseCaseImpl {
    async fn execute(&self, params: SetProductActiveParams) -> Result<Product, CatalogError> {
        if !params.actor.is_admin() {
            return Err(CatalogError::Forbidden);
        }

        self.logger.info(&format!(
            "Setting product {} active: {}",
            params.id, params.active
        ));

        let product = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| CatalogError::or_not_found(e, CatalogError::ProductNotFound))?;

        self.repository
            .set_active(params.id, params.active)
            .await
            .map_err(|e| CatalogError::or_not_found(e, CatalogError::ProductNotFound))?;

        Ok(Product {
            active: params.active,
            ..product
        })
    }
}
