use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::model::normalize_note;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::{Order, OrderItem, OrderReceipt};
use crate::domain::order::repository::{CheckoutSession, CheckoutUnitOfWork};
use crate::domain::order::use_cases::place::{PlaceOrderParams, PlaceOrderUseCase};
use crate::domain::pricing::resolver::{ResolveMode, resolve_options};

/// Turns the caller's cart into an order inside a single checkout session.
///
/// Every write goes through the session, so a failure at any step leaves the
/// cart, the stock and the order tables exactly as they were.
pub struct PlaceOrderUseCaseImpl {
    pub unit_of_work: Arc<dyn CheckoutUnitOfWork>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl PlaceOrderUseCase for PlaceOrderUseCaseImpl {
    async fn execute(&self, params: PlaceOrderParams) -> Result<OrderReceipt, OrderError> {
        let user_id = params.actor.user_id.clone();
        self.logger
            .info(&format!("Placing order for user: {}", user_id));

        let mut session = self
            .unit_of_work
            .begin()
            .await
            .map_err(OrderError::from_checkout)?;

        let order = match compose(&mut *session, params).await {
            Ok(order) => order,
            Err(err) => {
                if let Err(rollback_err) = session.rollback().await {
                    self.logger
                        .error(&format!("Checkout rollback failed: {}", rollback_err));
                }
                self.logger
                    .warn(&format!("Order rejected for user {}: {}", user_id, err));
                return Err(err);
            }
        };

        session.commit().await.map_err(|e| {
            self.logger
                .warn(&format!("Checkout commit failed for user {}: {}", user_id, e));
            OrderError::from_checkout(e)
        })?;

        self.logger.info(&format!(
            "Order placed: {} ({} items, total {})",
            order.id,
            order.items.len(),
            order.total
        ));
        Ok(order.receipt())
    }
}

async fn compose(
    session: &mut dyn CheckoutSession,
    params: PlaceOrderParams,
) -> Result<Order, OrderError> {
    let actor = params.actor;

    let lines = session
        .lock_cart_lines(&actor.user_id)
        .await
        .map_err(OrderError::from_checkout)?;
    if lines.is_empty() {
        return Err(OrderError::EmptyCart);
    }

    let mut items = Vec::with_capacity(lines.len());
    for line in &lines {
        let detail = session
            .get_product_detail(line.product_id)
            .await
            .map_err(OrderError::from_checkout)?
            .filter(|detail| detail.product.active)
            .ok_or(OrderError::ProductUnavailable {
                product_id: line.product_id,
            })?;

        let selection =
            resolve_options(&detail.groups, &line.option_ids, ResolveMode::Checkout)?;
        let item = OrderItem::snapshot(line, &detail.product, &selection)?;

        let reserved = session
            .reserve_stock(line.product_id, line.quantity)
            .await
            .map_err(OrderError::from_checkout)?;
        if !reserved {
            return Err(OrderError::OutOfStock {
                product: detail.product.name.clone(),
            });
        }

        items.push(item);
    }

    let order = Order::place(
        actor.user_id.clone(),
        actor.email,
        normalize_note(params.note),
        items,
    )?;

    session
        .insert_order(&order)
        .await
        .map_err(OrderError::from_checkout)?;
    for item in &order.items {
        session
            .insert_order_item(order.id, item)
            .await
            .map_err(OrderError::from_checkout)?;
    }
    session
        .clear_cart(&actor.user_id)
        .await
        .map_err(OrderError::from_checkout)?;

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::{CartLine, CartView};
    use crate::domain::catalog::model::ProductDetail;
    use crate::domain::errors::RepositoryError;
    use crate::domain::kitchen::state_machine::OrderStatus;
    use crate::domain::pricing::errors::PricingError;
    use crate::domain::shared::value_objects::UserId;
    use crate::test_support::{
        FailPoint, InMemoryCheckoutStore, MockSession, StoreState, americano, customer,
        discounted_water, mock_logger, money, option_id, product,
    };

    struct SingleSession(std::sync::Mutex<Option<MockSession>>);

    #[async_trait]
    impl CheckoutUnitOfWork for SingleSession {
        async fn begin(&self) -> Result<Box<dyn CheckoutSession>, RepositoryError> {
            let session = self.0.lock().unwrap().take().ok_or(RepositoryError::Persistence)?;
            Ok(Box::new(session))
        }
    }

    fn cart_line(detail: &ProductDetail, quantity: u32, options: &[&str]) -> CartLine {
        CartLine::new(
            customer().user_id,
            detail.product.id,
            quantity,
            None,
            options.iter().map(|name| option_id(detail, name)).collect(),
        )
        .unwrap()
    }

    fn store_with(details: Vec<ProductDetail>, cart: Vec<CartLine>) -> InMemoryCheckoutStore {
        InMemoryCheckoutStore::with_state(StoreState {
            products: details.into_iter().map(|d| (d.product.id, d)).collect(),
            cart,
            orders: vec![],
        })
    }

    fn use_case(store: &InMemoryCheckoutStore) -> PlaceOrderUseCaseImpl {
        PlaceOrderUseCaseImpl {
            unit_of_work: Arc::new(store.clone()),
            logger: mock_logger(),
        }
    }

    fn place_params() -> PlaceOrderParams {
        PlaceOrderParams {
            actor: customer(),
            note: Some("para llevar".to_string()),
        }
    }

    #[tokio::test]
    async fn should_place_americano_order_with_frozen_prices() {
        let detail = americano(5);
        let product_id = detail.product.id;
        let line = cart_line(&detail, 2, &["Grande", "Shot"]);
        let store = store_with(vec![detail], vec![line]);

        let receipt = use_case(&store).execute(place_params()).await.unwrap();

        assert_eq!(receipt.total, money("96.00"));
        let state = store.snapshot();
        assert_eq!(state.orders.len(), 1);
        let order = &state.orders[0];
        assert_eq!(order.id, receipt.order_id);
        assert_eq!(order.status, OrderStatus::Received);
        assert_eq!(order.customer_email.as_deref(), Some("ana@example.com"));
        assert_eq!(order.note.as_deref(), Some("para llevar"));
        let item = &order.items[0];
        assert_eq!(item.unit_price, money("48.00"));
        assert_eq!(item.line_total, money("96.00"));
        assert_eq!(item.option_names(), vec!["Grande", "Shot"]);
        assert!(state.cart.is_empty());
        assert_eq!(state.products[&product_id].product.stock, 3);
    }

    #[tokio::test]
    async fn should_match_cart_view_total() {
        let americano = americano(10);
        let croissant = ProductDetail::new(product("Croissant", "25.50", 10), vec![]);
        let cart = vec![
            cart_line(&americano, 2, &["Grande", "Shot"]),
            cart_line(&americano, 1, &["Chico"]),
            cart_line(&croissant, 3, &[]),
        ];
        let store = store_with(vec![americano, croissant], cart);
        let view = CartView::new(store.snapshot().cart_details(&customer().user_id));

        let receipt = use_case(&store).execute(place_params()).await.unwrap();

        assert_eq!(receipt.total, view.total);
        assert_eq!(receipt.total, money("202.50"));
    }

    #[tokio::test]
    async fn should_reject_line_priced_below_zero_without_writes() {
        let detail = discounted_water(5);
        let product_id = detail.product.id;
        let line = cart_line(&detail, 2, &["Descuento"]);
        let store = store_with(vec![detail], vec![line]);

        let result = use_case(&store).execute(place_params()).await;

        assert!(matches!(
            result.unwrap_err(),
            OrderError::Pricing(PricingError::NegativeUnitPrice { .. })
        ));
        let state = store.snapshot();
        assert!(state.orders.is_empty());
        assert_eq!(state.cart.len(), 1);
        assert_eq!(state.products[&product_id].product.stock, 5);
    }

    #[tokio::test]
    async fn should_reject_empty_cart_with_zero_writes() {
        let detail = americano(5);
        let other_users_line = CartLine::new(
            UserId::new("someone-else"),
            detail.product.id,
            1,
            None,
            vec![option_id(&detail, "Chico")],
        )
        .unwrap();
        let store = store_with(vec![detail], vec![other_users_line]);
        let before = store.snapshot();

        let result = use_case(&store).execute(place_params()).await;

        assert!(matches!(result.unwrap_err(), OrderError::EmptyCart));
        let after = store.snapshot();
        assert!(after.orders.is_empty());
        assert_eq!(after.cart, before.cart);
        assert_eq!(after.products, before.products);
    }

    #[tokio::test]
    async fn should_leave_no_order_when_failing_after_order_insert() {
        let detail = americano(5);
        let product_id = detail.product.id;
        let line = cart_line(&detail, 2, &["Grande"]);
        let store = store_with(vec![detail], vec![line]).failing_at(FailPoint::InsertOrderItem);

        let result = use_case(&store).execute(place_params()).await;

        assert!(matches!(result.unwrap_err(), OrderError::Repository(_)));
        let state = store.snapshot();
        assert!(state.orders.is_empty());
        assert_eq!(state.cart.len(), 1);
        assert_eq!(state.products[&product_id].product.stock, 5);
    }

    #[tokio::test]
    async fn should_report_could_not_place_order_on_serialization_failure() {
        let detail = americano(5);
        let line = cart_line(&detail, 1, &["Chico"]);
        let store = store_with(vec![detail], vec![line]).failing_at(FailPoint::Commit);

        let result = use_case(&store).execute(place_params()).await;

        assert!(matches!(result.unwrap_err(), OrderError::CouldNotPlaceOrder));
        assert!(store.snapshot().orders.is_empty());
    }

    #[tokio::test]
    async fn should_reject_when_stock_ran_out_since_adding() {
        let detail = americano(1);
        let line = cart_line(&detail, 2, &["Chico"]);
        let store = store_with(vec![detail], vec![line]);

        let result = use_case(&store).execute(place_params()).await;

        assert!(matches!(
            result.unwrap_err(),
            OrderError::OutOfStock { product } if product == "Café Americano"
        ));
        assert_eq!(store.snapshot().cart.len(), 1);
    }

    #[tokio::test]
    async fn should_reject_product_deactivated_since_adding() {
        let mut detail = americano(5);
        let line = cart_line(&detail, 1, &["Chico"]);
        let product_id = detail.product.id;
        detail.product.active = false;
        let store = store_with(vec![detail], vec![line]);

        let result = use_case(&store).execute(place_params()).await;

        assert!(matches!(
            result.unwrap_err(),
            OrderError::ProductUnavailable { product_id: id } if id == product_id
        ));
    }

    #[tokio::test]
    async fn should_reject_line_whose_option_was_detached() {
        let mut detail = americano(5);
        let line = cart_line(&detail, 1, &["Grande", "Shot"]);
        detail.groups.retain(|g| g.name != "Extras");
        let store = store_with(vec![detail], vec![line]);

        let result = use_case(&store).execute(place_params()).await;

        assert!(matches!(
            result.unwrap_err(),
            OrderError::Pricing(PricingError::ForeignOption(_))
        ));
        assert!(store.snapshot().orders.is_empty());
    }

    #[tokio::test]
    async fn should_not_apply_defaults_at_checkout() {
        let detail = americano(5);
        // Line stored before the size group became required
        let line = cart_line(&detail, 1, &["Shot"]);
        let store = store_with(vec![detail], vec![line]);

        let result = use_case(&store).execute(place_params()).await;

        assert!(matches!(
            result.unwrap_err(),
            OrderError::Pricing(PricingError::MissingRequiredSelection { .. })
        ));
    }

    #[tokio::test]
    async fn should_keep_snapshot_after_product_is_deleted() {
        let detail = americano(5);
        let product_id = detail.product.id;
        let line = cart_line(&detail, 2, &["Grande", "Shot"]);
        let store = store_with(vec![detail], vec![line]);

        use_case(&store).execute(place_params()).await.unwrap();
        store.state.lock().unwrap().delete_product(product_id);

        let state = store.snapshot();
        let item = &state.orders[0].items[0];
        assert_eq!(item.product_id, None);
        assert_eq!(item.product_name, "Café Americano");
        assert_eq!(item.unit_price, money("48.00"));
        assert_eq!(item.option_names(), vec!["Grande", "Shot"]);
        assert_eq!(state.orders[0].total, money("96.00"));
    }

    #[tokio::test]
    async fn should_roll_back_and_never_commit_when_a_step_fails() {
        let detail = americano(5);
        let line = cart_line(&detail, 1, &["Chico"]);

        let mut session = MockSession::new();
        session
            .expect_lock_cart_lines()
            .returning(move |_| Ok(vec![line.clone()]));
        session
            .expect_get_product_detail()
            .returning(move |_| Ok(Some(detail.clone())));
        session.expect_reserve_stock().returning(|_, _| Ok(true));
        session.expect_insert_order().times(1).returning(|_| Ok(()));
        session
            .expect_insert_order_item()
            .returning(|_, _| Err(RepositoryError::DatabaseError));
        session.expect_clear_cart().never();
        session.expect_commit().never();
        session.expect_rollback().times(1).returning(|| Ok(()));

        let use_case = PlaceOrderUseCaseImpl {
            unit_of_work: Arc::new(SingleSession(std::sync::Mutex::new(Some(session)))),
            logger: mock_logger(),
        };

        let result = use_case.execute(place_params()).await;

        assert!(matches!(
            result.unwrap_err(),
            OrderError::Repository(RepositoryError::DatabaseError)
        ));
    }

    #[tokio::test]
    async fn should_not_write_anything_for_empty_cart() {
        let mut session = MockSession::new();
        session.expect_lock_cart_lines().returning(|_| Ok(vec![]));
        session.expect_reserve_stock().never();
        session.expect_insert_order().never();
        session.expect_clear_cart().never();
        session.expect_commit().never();
        session.expect_rollback().times(1).returning(|| Ok(()));

        let use_case = PlaceOrderUseCaseImpl {
            unit_of_work: Arc::new(SingleSession(std::sync::Mutex::new(Some(session)))),
            logger: mock_logger(),
        };

        let result = use_case.execute(place_params()).await;

        assert!(matches!(result.unwrap_err(), OrderError::EmptyCart));
    }

    #[tokio::test]
    async fn should_fail_when_transaction_cannot_start() {
        let use_case = PlaceOrderUseCaseImpl {
            unit_of_work: Arc::new(SingleSession(std::sync::Mutex::new(None))),
            logger: mock_logger(),
        };

        let result = use_case.execute(place_params()).await;

        assert!(matches!(
            result.unwrap_err(),
            OrderError::Repository(RepositoryError::Persistence)
        ));
    }
}
