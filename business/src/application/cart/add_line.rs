use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartLine;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::add_line::{AddCartLineParams, AddCartLineUseCase};
use crate::domain::catalog::repository::ProductRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::pricing::resolver::{ResolveMode, resolve_options};

pub struct AddCartLineUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddCartLineUseCase for AddCartLineUseCaseImpl {
    async fn execute(&self, params: AddCartLineParams) -> Result<CartLine, CartError> {
        self.logger.info(&format!(
            "Adding product {} x{} to cart of user {}",
            params.product_id, params.quantity, params.user_id
        ));

        if params.quantity < 1 {
            return Err(CartError::InvalidQuantity);
        }

        let detail = self
            .product_repository
            .get_detail(params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::ProductNotFound,
                other => CartError::Repository(other),
            })?;

        if !detail.product.active {
            return Err(CartError::ProductUnavailable);
        }

        // Availability only; stock is reserved at checkout.
        if detail.product.stock < params.quantity {
            return Err(CartError::OutOfStock {
                available: detail.product.stock,
            });
        }

        let selection = resolve_options(&detail.groups, &params.option_ids, ResolveMode::Cart)?;
        selection.payable_unit_price(&detail.product.price)?;

        let line = CartLine::new(
            params.user_id,
            params.product_id,
            params.quantity,
            params.note,
            selection.option_ids(),
        )?;

        self.repository.add_line(&line).await?;

        self.logger.info(&format!("Cart line added: {}", line.id));
        Ok(line)
    }
}
