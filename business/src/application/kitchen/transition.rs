use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::kitchen::errors::KitchenError;
use crate::domain::kitchen::events::OrderEvent;
use crate::domain::kitchen::repository::KitchenRepository;
use crate::domain::kitchen::services::OrderEventPublisher;
use crate::domain::kitchen::state_machine::TransitionEffect;
use crate::domain::kitchen::use_cases::transition::{
    TransitionOrderParams, TransitionOrderUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::order::model::Order;

pub struct TransitionOrderUseCaseImpl {
    pub repository: Arc<dyn KitchenRepository>,
    pub publisher: Arc<dyn OrderEventPublisher>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl TransitionOrderUseCase for TransitionOrderUseCaseImpl {
    async fn execute(&self, params: TransitionOrderParams) -> Result<Order, KitchenError> {
        if !params.actor.is_admin() {
            return Err(KitchenError::Forbidden);
        }

        self.logger.info(&format!(
            "Moving order {} to {}",
            params.order_id, params.target
        ));

        let order = self
            .repository
            .get_by_id(params.order_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => KitchenError::OrderNotFound,
                other => KitchenError::Repository(other),
            })?;

        let transition = order.status.transition(params.target)?;

        let changed = match transition.effect() {
            TransitionEffect::UpdateStatus => {
                self.repository
                    .update_status(order.id, transition.from, transition.to)
                    .await?
            }
            TransitionEffect::CancelAndRestock => {
                self.repository.cancel(order.id, transition.from).await?
            }
        };

        if !changed {
            self.logger.warn(&format!(
                "Order {} left {} before the update",
                order.id, transition.from
            ));
            return Err(KitchenError::StaleStatus);
        }

        let order = Order {
            status: transition.to,
            ..order
        };

        if transition.notifies_customer() {
            let event = OrderEvent::ReadyForPickup {
                order_id: order.id,
                user_id: order.user_id.clone(),
                email: order.customer_email.clone(),
            };
            if let Err(e) = self.publisher.publish(event) {
                self.logger.error(&format!(
                    "Failed to publish ready event for order {}: {}",
                    order.id, e
                ));
            }
        }

        self.logger
            .info(&format!("Order {} is now {}", order.id, order.status));
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::kitchen::errors::NotificationError;
    use crate::domain::kitchen::state_machine::OrderStatus;
    use crate::domain::shared::value_objects::UserId;
    use crate::test_support::{
        MockKitchenRepo, MockPublisher, admin, customer, mock_logger, money,
    };
    use chrono::Utc;
    use mockall::predicate::eq;
    use uuid::Uuid;

    fn order(id: Uuid, status: OrderStatus) -> Order {
        Order::from_repository(
            id,
            UserId::new("customer-1"),
            Some("ana@example.com".to_string()),
            money("96.00"),
            status,
            None,
            Utc::now(),
            vec![],
        )
    }

    fn params(order_id: Uuid, target: OrderStatus) -> TransitionOrderParams {
        TransitionOrderParams {
            actor: admin(),
            order_id,
            target,
        }
    }

    fn silent_publisher() -> MockPublisher {
        let mut publisher = MockPublisher::new();
        publisher.expect_publish().never();
        publisher
    }

    #[tokio::test]
    async fn should_start_preparing_received_order() {
        let id = Uuid::new_v4();
        let mut mock_repo = MockKitchenRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(order(id, OrderStatus::Received)));
        mock_repo
            .expect_update_status()
            .with(
                eq(id),
                eq(OrderStatus::Received),
                eq(OrderStatus::InPreparation),
            )
            .times(1)
            .returning(|_, _, _| Ok(true));
        mock_repo.expect_cancel().never();

        let use_case = TransitionOrderUseCaseImpl {
            repository: Arc::new(mock_repo),
            publisher: Arc::new(silent_publisher()),
            logger: mock_logger(),
        };

        let updated = use_case
            .execute(params(id, OrderStatus::InPreparation))
            .await
            .unwrap();

        assert_eq!(updated.status, OrderStatus::InPreparation);
    }

    #[tokio::test]
    async fn should_publish_ready_event_with_customer_email() {
        let id = Uuid::new_v4();
        let mut mock_repo = MockKitchenRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(order(id, OrderStatus::InPreparation)));
        mock_repo
            .expect_update_status()
            .returning(|_, _, _| Ok(true));
        let mut publisher = MockPublisher::new();
        publisher
            .expect_publish()
            .with(eq(OrderEvent::ReadyForPickup {
                order_id: id,
                user_id: UserId::new("customer-1"),
                email: Some("ana@example.com".to_string()),
            }))
            .times(1)
            .returning(|_| Ok(()));

        let use_case = TransitionOrderUseCaseImpl {
            repository: Arc::new(mock_repo),
            publisher: Arc::new(publisher),
            logger: mock_logger(),
        };

        let updated = use_case
            .execute(params(id, OrderStatus::ReadyForPickup))
            .await
            .unwrap();

        assert_eq!(updated.status, OrderStatus::ReadyForPickup);
    }

    #[tokio::test]
    async fn should_succeed_even_when_publishing_fails() {
        let id = Uuid::new_v4();
        let mut mock_repo = MockKitchenRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(order(id, OrderStatus::InPreparation)));
        mock_repo
            .expect_update_status()
            .returning(|_, _, _| Ok(true));
        let mut publisher = MockPublisher::new();
        publisher
            .expect_publish()
            .returning(|_| Err(NotificationError::ChannelClosed));

        let use_case = TransitionOrderUseCaseImpl {
            repository: Arc::new(mock_repo),
            publisher: Arc::new(publisher),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(id, OrderStatus::ReadyForPickup))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_cancel_through_compensating_action() {
        let id = Uuid::new_v4();
        let mut mock_repo = MockKitchenRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(order(id, OrderStatus::InPreparation)));
        mock_repo
            .expect_cancel()
            .with(eq(id), eq(OrderStatus::InPreparation))
            .times(1)
            .returning(|_, _| Ok(true));
        mock_repo.expect_update_status().never();

        let use_case = TransitionOrderUseCaseImpl {
            repository: Arc::new(mock_repo),
            publisher: Arc::new(silent_publisher()),
            logger: mock_logger(),
        };

        let updated = use_case
            .execute(params(id, OrderStatus::Cancelled))
            .await
            .unwrap();

        assert_eq!(updated.status, OrderStatus::Cancelled);
    }

    #[tokio::test]
    async fn should_reject_moving_ready_order_back_to_received() {
        let id = Uuid::new_v4();
        let mut mock_repo = MockKitchenRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(order(id, OrderStatus::ReadyForPickup)));
        mock_repo.expect_update_status().never();
        mock_repo.expect_cancel().never();

        let use_case = TransitionOrderUseCaseImpl {
            repository: Arc::new(mock_repo),
            publisher: Arc::new(silent_publisher()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(id, OrderStatus::Received)).await;

        assert!(matches!(
            result.unwrap_err(),
            KitchenError::InvalidTransition {
                from: OrderStatus::ReadyForPickup,
                to: OrderStatus::Received
            }
        ));
    }

    #[tokio::test]
    async fn should_reject_cancelling_ready_order() {
        let id = Uuid::new_v4();
        let mut mock_repo = MockKitchenRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(order(id, OrderStatus::ReadyForPickup)));
        mock_repo.expect_cancel().never();

        let use_case = TransitionOrderUseCaseImpl {
            repository: Arc::new(mock_repo),
            publisher: Arc::new(silent_publisher()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(id, OrderStatus::Cancelled)).await;

        assert!(matches!(
            result.unwrap_err(),
            KitchenError::InvalidTransition { .. }
        ));
    }

    #[tokio::test]
    async fn should_report_stale_status_when_another_request_won() {
        let id = Uuid::new_v4();
        let mut mock_repo = MockKitchenRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(order(id, OrderStatus::Received)));
        mock_repo
            .expect_update_status()
            .returning(|_, _, _| Ok(false));

        let use_case = TransitionOrderUseCaseImpl {
            repository: Arc::new(mock_repo),
            publisher: Arc::new(silent_publisher()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(id, OrderStatus::InPreparation))
            .await;

        assert!(matches!(result.unwrap_err(), KitchenError::StaleStatus));
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_order() {
        let mut mock_repo = MockKitchenRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = TransitionOrderUseCaseImpl {
            repository: Arc::new(mock_repo),
            publisher: Arc::new(silent_publisher()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(Uuid::new_v4(), OrderStatus::InPreparation))
            .await;

        assert!(matches!(result.unwrap_err(), KitchenError::OrderNotFound));
    }

    #[tokio::test]
    async fn should_forbid_customers() {
        let mut mock_repo = MockKitchenRepo::new();
        mock_repo.expect_get_by_id().never();

        let use_case = TransitionOrderUseCaseImpl {
            repository: Arc::new(mock_repo),
            publisher: Arc::new(silent_publisher()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(TransitionOrderParams {
                actor: customer(),
                order_id: Uuid::new_v4(),
                target: OrderStatus::Cancelled,
            })
            .await;

        assert!(matches!(result.unwrap_err(), KitchenError::Forbidden));
    }
}
