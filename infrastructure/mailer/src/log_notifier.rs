use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use business::domain::kitchen::errors::NotificationError;
use business::domain::kitchen::services::OrderNotifier;
use business::domain::logger::Logger;

/// Stand-in used when no mail API is configured.
pub struct LogOnlyOrderNotifier {
    logger: Arc<dyn Logger>,
}

impl LogOnlyOrderNotifier {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self { logger }
    }
}

#[async_trait]
impl OrderNotifier for LogOnlyOrderNotifier {
    async fn notify_order_ready(&self, email: &str, order_id: Uuid) -> Result<(), NotificationError> {
        self.logger.info(&format!(
            "Mailer disabled, order {} ready for {}",
            order_id, email
        ));
        Ok(())
    }
}
