use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;
use crate::domain::catalog::repository::{
    CategoryRepository, OptionGroupRepository, ProductRepository,
};
use crate::domain::catalog::use_cases::create_product::{
    CreateProductParams, CreateProductUseCase,
};
use crate::domain::logger::Logger;

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub category_repository: Arc<dyn CategoryRepository>,
    pub option_group_repository: Arc<dyn OptionGroupRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, CatalogError> {
        if !params.actor.is_admin() {
            return Err(CatalogError::Forbidden);
        }

        self.logger
            .info(&format!("Creating product: {}", params.props.name));

        let mut product = Product::new(params.props)?;
        check_references(
            self.category_repository.as_ref(),
            self.option_group_repository.as_ref(),
            &mut product,
        )
        .await?;

        self.repository.save(&product).await?;

        self.logger.info(&format!("Product created: {}", product.id));
        Ok(product)
    }
}

/// Verifies the category and every option group exist, filling in the
/// category name on the way.
pub(super) async fn check_references(
    categories: &dyn CategoryRepository,
    groups: &dyn OptionGroupRepository,
    product: &mut Product,
) -> Result<(), CatalogError> {
    product.category_name = match product.category_id {
        Some(category_id) => {
            let category = categories
                .get_by_id(category_id)
                .await
                .map_err(|e| CatalogError::or_not_found(e, CatalogError::CategoryNotFound))?;
            Some(category.name)
        }
        None => None,
    };

    if !product.option_group_ids.is_empty() {
        let found = groups.count_existing(&product.option_group_ids).await?;
        if found != product.option_group_ids.len() as u64 {
            return Err(CatalogError::OptionGroupNotFound);
        }
    }

    Ok(())
}
