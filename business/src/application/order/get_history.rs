use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::OrderSummary;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::get_history::{
    GetOrderHistoryParams, GetOrderHistoryUseCase,
};

pub struct GetOrderHistoryUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetOrderHistoryUseCase for GetOrderHistoryUseCaseImpl {
    async fn execute(&self, params: GetOrderHistoryParams) -> Result<Vec<OrderSummary>, OrderError> {
        self.logger
            .info(&format!("Getting order history of user: {}", params.user_id));

        let orders = self.repository.get_history(&params.user_id).await?;

        self.logger.info(&format!("Found {} orders", orders.len()));
        Ok(orders)
    }
}
