use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;
use crate::domain::catalog::repository::ProductRepository;
use crate::domain::catalog::use_cases::set_product_special::{
    SetProductSpecialParams, SetProductSpecialUseCase,
};
use crate::domain::logger::Logger;

pub struct SetProductSpecialUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SetProductSpecialUseCase for SetProductSpecialUseCaseImpl {
    async fn execute(&self, params: SetProductSpecialParams) -> Result<Product, CatalogError> {
        if !params.actor.is_admin() {
            return Err(CatalogError::Forbidden);
        }

        self.logger.info(&format!(
            "Setting product {} special: {}",
            params.id, params.special
        ));

        let product = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| CatalogError::or_not_found(e, CatalogError::ProductNotFound))?;

        self.repository
            .set_special(params.id, params.special)
            .await
            .map_err(|e| CatalogError::or_not_found(e, CatalogError::ProductNotFound))?;

        Ok(Product {
            special: params.special,
            ..product
        })
    }
}
