use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::ProductDetail;
use crate::domain::catalog::repository::ProductRepository;
use crate::domain::catalog::use_cases::get_product_detail::{
    GetProductDetailParams, GetProductDetailUseCase,
};
use crate::domain::logger::Logger;

pub struct GetProductDetailUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductDetailUseCase for GetProductDetailUseCaseImpl {
    async fn execute(&self, params: GetProductDetailParams) -> Result<ProductDetail, CatalogError> {
        self.logger
            .info(&format!("Getting product detail: {}", params.id));

        let detail = self
            .repository
            .get_detail(params.id)
            .await
            .map_err(|e| CatalogError::or_not_found(e, CatalogError::ProductNotFound))?;

        // Hidden products are only visible to admins
        if !detail.product.active && !params.actor.is_admin() {
            return Err(CatalogError::ProductNotFound);
        }

        self.logger.info(&format!(
            "Product {} has {} option groups",
            detail.product.id,
            detail.groups.len()
        ));
        Ok(detail)
    }
}
