use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;
use crate::domain::catalog::repository::ProductRepository;
use crate::domain::catalog::use_cases::list_menu::ListMenuUseCase;
use crate::domain::logger::Logger;

pub struct ListMenuUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListMenuUseCase for ListMenuUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Product>, CatalogError> {
        self.logger.info("Getting menu");

        let products = self.repository.get_active_products().await?;

        self.logger
            .info(&format!("Menu has {} products", products.len()));
        Ok(products)
    }
}
