use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::remove_line::{RemoveCartLineParams, RemoveCartLineUseCase};
use crate::domain::logger::Logger;

pub struct RemoveCartLineUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveCartLineUseCase for RemoveCartLineUseCaseImpl {
    async fn execute(&self, params: RemoveCartLineParams) -> Result<(), CartError> {
        self.logger
            .info(&format!("Removing cart line: {}", params.line_id));

        let removed = self
            .repository
            .remove_line(params.line_id, &params.user_id)
            .await?;

        if removed == 0 {
            return Err(CartError::LineNotFound);
        }

        self.logger
            .info(&format!("Cart line removed: {}", params.line_id));
        Ok(())
    }
}
