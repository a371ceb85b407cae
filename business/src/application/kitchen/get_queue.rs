use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::kitchen::errors::KitchenError;
use crate::domain::kitchen::repository::KitchenRepository;
use crate::domain::kitchen::use_cases::get_queue::{GetKitchenQueueParams, GetKitchenQueueUseCase};
use crate::domain::logger::Logger;
use crate::domain::order::model::Order;

pub struct GetKitchenQueueUseCaseImpl {
    pub repository: Arc<dyn KitchenRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetKitchenQueueUseCase for GetKitchenQueueUseCaseImpl {
    async fn execute(&self, params: GetKitchenQueueParams) -> Result<Vec<Order>, KitchenError> {
        if !params.actor.is_admin() {
            return Err(KitchenError::Forbidden);
        }

        self.logger.info("Getting kitchen queue");

        let orders = self.repository.get_active_orders().await?;

        self.logger
            .info(&format!("Kitchen queue has {} orders", orders.len()));
        Ok(orders)
    }
}
