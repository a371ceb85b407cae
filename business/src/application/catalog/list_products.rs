use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;
use crate::domain::catalog::repository::ProductRepository;
use crate::domain::catalog::use_cases::list_products::{ListProductsParams, ListProductsUseCase};
use crate::domain::logger::Logger;

pub struct ListProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListProductsUseCase for ListProductsUseCaseImpl {
    async fn execute(&self, params: ListProductsParams) -> Result<Vec<Product>, CatalogError> {
        if !params.actor.is_admin() {
            return Err(CatalogError::Forbidden);
        }

        self.logger.info("Getting all products");

        let products = self.repository.get_all().await?;

        self.logger.info(&format!("Found {} products", products.len()));
        Ok(products)
    }
}
