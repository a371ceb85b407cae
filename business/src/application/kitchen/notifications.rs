use std::sync::Arc;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

use crate::domain::kitchen::errors::NotificationError;
use crate::domain::kitchen::events::OrderEvent;
use crate::domain::kitchen::services::{OrderEventPublisher, OrderNotifier};
use crate::domain::logger::Logger;

/// Publisher backed by an unbounded channel; `publish` never waits.
pub struct ChannelOrderEventPublisher {
    sender: UnboundedSender<OrderEvent>,
}

impl ChannelOrderEventPublisher {
    pub fn new(sender: UnboundedSender<OrderEvent>) -> Self {
        Self { sender }
    }
}

impl OrderEventPublisher for ChannelOrderEventPublisher {
    fn publish(&self, event: OrderEvent) -> Result<(), NotificationError> {
        self.sender
            .send(event)
            .map_err(|_| NotificationError::ChannelClosed)
    }
}

/// Drains order events and forwards them to the notifier.
pub struct OrderNotificationWorker {
    pub notifier: Arc<dyn OrderNotifier>,
    pub logger: Arc<dyn Logger>,
}

impl OrderNotificationWorker {
    pub fn channel() -> (ChannelOrderEventPublisher, UnboundedReceiver<OrderEvent>) {
        let (sender, receiver) = unbounded_channel();
        (ChannelOrderEventPublisher::new(sender), receiver)
    }

    /// Runs until every publisher has been dropped.
    pub async fn run(self, mut receiver: UnboundedReceiver<OrderEvent>) {
        self.logger.info("Order notification worker started");
        while let Some(event) = receiver.recv().await {
            self.handle(event).await;
        }
        self.logger.info("Order notification worker stopped");
    }

    async fn handle(&self, event: OrderEvent) {
        match event {
            OrderEvent::ReadyForPickup {
                order_id,
                email: Some(email),
                ..
            } => match self.notifier.notify_order_ready(&email, order_id).await {
                Ok(()) => self
                    .logger
                    .info(&format!("Ready notification sent for order {}", order_id)),
                Err(e) => self.logger.error(&format!(
                    "Ready notification failed for order {}: {}",
                    order_id, e
                )),
            },
            OrderEvent::ReadyForPickup {
                order_id,
                user_id,
                email: None,
            } => self.logger.warn(&format!(
                "No email for user {}, skipping ready notification of order {}",
                user_id, order_id
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::UserId;
    use crate::test_support::{MockNotifier, mock_logger};
    use mockall::predicate::eq;
    use uuid::Uuid;

    fn ready(order_id: Uuid, email: Option<&str>) -> OrderEvent {
        OrderEvent::ReadyForPickup {
            order_id,
            user_id: UserId::new("customer-1"),
            email: email.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn should_notify_customer_for_each_ready_event() {
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify_order_ready()
            .with(eq("ana@example.com"), eq(first))
            .times(1)
            .returning(|_, _| Ok(()));
        notifier
            .expect_notify_order_ready()
            .with(eq("ana@example.com"), eq(second))
            .times(1)
            .returning(|_, _| Err(NotificationError::DeliveryFailed("503".to_string())));

        let (publisher, receiver) = OrderNotificationWorker::channel();
        publisher.publish(ready(first, Some("ana@example.com"))).unwrap();
        publisher.publish(ready(second, Some("ana@example.com"))).unwrap();
        drop(publisher);

        let worker = OrderNotificationWorker {
            notifier: Arc::new(notifier),
            logger: mock_logger(),
        };
        worker.run(receiver).await;
    }

    #[tokio::test]
    async fn should_skip_events_without_email() {
        let mut notifier = MockNotifier::new();
        notifier.expect_notify_order_ready().never();

        let (publisher, receiver) = OrderNotificationWorker::channel();
        publisher.publish(ready(Uuid::new_v4(), None)).unwrap();
        drop(publisher);

        let worker = OrderNotificationWorker {
            notifier: Arc::new(notifier),
            logger: mock_logger(),
        };
        worker.run(receiver).await;
    }

    #[tokio::test]
    async fn should_fail_to_publish_once_worker_is_gone() {
        let (publisher, receiver) = OrderNotificationWorker::channel();
        drop(receiver);

        let result = publisher.publish(ready(Uuid::new_v4(), None));

        assert!(matches!(result.unwrap_err(), NotificationError::ChannelClosed));
    }
}
