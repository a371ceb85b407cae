use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::get_detail::{GetOrderDetailParams, GetOrderDetailUseCase};

pub struct GetOrderDetailUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetOrderDetailUseCase for GetOrderDetailUseCaseImpl {
    async fn execute(&self, params: GetOrderDetailParams) -> Result<Order, OrderError> {
        self.logger.info(&format!("Getting order: {}", params.id));

        let order = self
            .repository
            .get_for_user(params.id, &params.user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => OrderError::NotFound,
                other => OrderError::Repository(other),
            })?;

        self.logger.info(&format!("Order found: {}", order.id));
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::kitchen::state_machine::OrderStatus;
    use crate::domain::order::model::{OrderItem, OrderItemOption};
    use crate::domain::shared::value_objects::UserId;
    use crate::test_support::{MockOrderRepo, mock_logger, money};
    use chrono::Utc;
    use uuid::Uuid;

    fn order(id: Uuid) -> Order {
        Order::from_repository(
            id,
            UserId::new("customer-1"),
            None,
            money("96.00"),
            OrderStatus::Received,
            None,
            Utc::now(),
            vec![OrderItem::from_repository(
                Uuid::new_v4(),
                None,
                "Café Americano".to_string(),
                2,
                money("48.00"),
                money("96.00"),
                None,
                vec![OrderItemOption {
                    option_id: None,
                    name: "Grande".to_string(),
                    price_adjustment: money("10.00"),
                }],
            )],
        )
    }

    #[tokio::test]
    async fn should_return_order_with_snapshot_items() {
        let id = Uuid::new_v4();
        let mut mock_repo = MockOrderRepo::new();
        mock_repo
            .expect_get_for_user()
            .returning(move |id, _| Ok(order(id)));

        let use_case = GetOrderDetailUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let found = use_case
            .execute(GetOrderDetailParams {
                id,
                user_id: UserId::new("customer-1"),
            })
            .await
            .unwrap();

        assert_eq!(found.id, id);
        assert_eq!(found.items[0].product_name, "Café Americano");
        assert_eq!(found.items[0].option_names(), vec!["Grande"]);
    }

    #[tokio::test]
    async fn should_return_not_found_for_order_of_another_user() {
        let mut mock_repo = MockOrderRepo::new();
        // Repository scopes by owner
        mock_repo
            .expect_get_for_user()
            .returning(|_, _| Err(RepositoryError::NotFound));

        let use_case = GetOrderDetailUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetOrderDetailParams {
                id: Uuid::new_v4(),
                user_id: UserId::new("intruder"),
            })
            .await;

        assert!(matches!(result.unwrap_err(), OrderError::NotFound));
    }
}
