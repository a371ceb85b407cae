use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartView;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::list_lines::{ListCartLinesParams, ListCartLinesUseCase};
use crate::domain::logger::Logger;

pub struct ListCartLinesUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListCartLinesUseCase for ListCartLinesUseCaseImpl {
    async fn execute(&self, params: ListCartLinesParams) -> Result<CartView, CartError> {
        self.logger
            .info(&format!("Listing cart of user: {}", params.user_id));

        let lines = self.repository.get_lines(&params.user_id).await?;
        let view = CartView::new(lines);

        self.logger.info(&format!(
            "Cart has {} lines, total {}",
            view.lines.len(),
            view.total
        ));
        Ok(view)
    }
}
