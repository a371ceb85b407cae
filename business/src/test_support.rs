//! Port doubles and fixtures shared by the use-case tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;
use uuid::Uuid;

use crate::domain::cart::model::{CartLine, CartLineDetails, CartLineOption};
use crate::domain::cart::repository::CartRepository;
use crate::domain::catalog::model::{
    Category, OptionGroup, Product, ProductDetail, ProductOption, SelectionMode,
};
use crate::domain::catalog::repository::{
    CategoryRepository, OptionGroupRepository, ProductRepository,
};
use crate::domain::errors::RepositoryError;
use crate::domain::kitchen::errors::NotificationError;
use crate::domain::kitchen::events::OrderEvent;
use crate::domain::kitchen::repository::KitchenRepository;
use crate::domain::kitchen::services::{OrderEventPublisher, OrderNotifier};
use crate::domain::kitchen::state_machine::OrderStatus;
use crate::domain::logger::Logger;
use crate::domain::order::model::{Order, OrderItem, OrderSummary};
use crate::domain::order::repository::{CheckoutSession, CheckoutUnitOfWork, OrderRepository};
use crate::domain::shared::money::Money;
use crate::domain::shared::value_objects::{Actor, Role, UserId};

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
        async fn get_active_products(&self) -> Result<Vec<Product>, RepositoryError>;
        async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
        async fn get_detail(&self, id: Uuid) -> Result<ProductDetail, RepositoryError>;
        async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
        async fn set_active(&self, id: Uuid, active: bool) -> Result<(), RepositoryError>;
        async fn set_special(&self, id: Uuid, special: bool) -> Result<(), RepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub CategoryRepo {}

    #[async_trait]
    impl CategoryRepository for CategoryRepo {
        async fn get_all(&self) -> Result<Vec<Category>, RepositoryError>;
        async fn get_by_id(&self, id: Uuid) -> Result<Category, RepositoryError>;
        async fn save(&self, category: &Category) -> Result<(), RepositoryError>;
        async fn count_products(&self, id: Uuid) -> Result<u64, RepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub OptionGroupRepo {}

    #[async_trait]
    impl OptionGroupRepository for OptionGroupRepo {
        async fn get_all(&self) -> Result<Vec<OptionGroup>, RepositoryError>;
        async fn get_by_id(&self, id: Uuid) -> Result<OptionGroup, RepositoryError>;
        async fn count_existing(&self, ids: &[Uuid]) -> Result<u64, RepositoryError>;
        async fn save(&self, group: &OptionGroup) -> Result<(), RepositoryError>;
        async fn count_product_links(&self, id: Uuid) -> Result<u64, RepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
        async fn get_option(&self, id: Uuid) -> Result<ProductOption, RepositoryError>;
        async fn save_option(&self, option: &ProductOption) -> Result<(), RepositoryError>;
        async fn delete_option(&self, id: Uuid) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub CartRepo {}

    #[async_trait]
    impl CartRepository for CartRepo {
        async fn add_line(&self, line: &CartLine) -> Result<(), RepositoryError>;
        async fn get_lines(&self, user_id: &UserId) -> Result<Vec<CartLineDetails>, RepositoryError>;
        async fn remove_line(&self, id: Uuid, user_id: &UserId) -> Result<u64, RepositoryError>;
        async fn clear(&self, user_id: &UserId) -> Result<u64, RepositoryError>;
    }
}

mock! {
    pub OrderRepo {}

    #[async_trait]
    impl OrderRepository for OrderRepo {
        async fn get_history(&self, user_id: &UserId) -> Result<Vec<OrderSummary>, RepositoryError>;
        async fn get_for_user(&self, id: Uuid, user_id: &UserId) -> Result<Order, RepositoryError>;
    }
}

mock! {
    pub KitchenRepo {}

    #[async_trait]
    impl KitchenRepository for KitchenRepo {
        async fn get_active_orders(&self) -> Result<Vec<Order>, RepositoryError>;
        async fn get_by_id(&self, id: Uuid) -> Result<Order, RepositoryError>;
        async fn update_status(&self, id: Uuid, from: OrderStatus, to: OrderStatus) -> Result<bool, RepositoryError>;
        async fn cancel(&self, id: Uuid, from: OrderStatus) -> Result<bool, RepositoryError>;
    }
}

mock! {
    pub Session {}

    #[async_trait]
    impl CheckoutSession for Session {
        async fn lock_cart_lines(&mut self, user_id: &UserId) -> Result<Vec<CartLine>, RepositoryError>;
        async fn get_product_detail(&mut self, product_id: Uuid) -> Result<Option<ProductDetail>, RepositoryError>;
        async fn reserve_stock(&mut self, product_id: Uuid, quantity: u32) -> Result<bool, RepositoryError>;
        async fn insert_order(&mut self, order: &Order) -> Result<(), RepositoryError>;
        async fn insert_order_item(&mut self, order_id: Uuid, item: &OrderItem) -> Result<(), RepositoryError>;
        async fn clear_cart(&mut self, user_id: &UserId) -> Result<u64, RepositoryError>;
        async fn commit(&mut self) -> Result<(), RepositoryError>;
        async fn rollback(&mut self) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub Publisher {}

    impl OrderEventPublisher for Publisher {
        fn publish(&self, event: OrderEvent) -> Result<(), NotificationError>;
    }
}

mock! {
    pub Notifier {}

    #[async_trait]
    impl OrderNotifier for Notifier {
        async fn notify_order_ready(&self, email: &str, order_id: Uuid) -> Result<(), NotificationError>;
    }
}

pub fn money(value: &str) -> Money {
    value.parse().unwrap()
}

pub fn customer() -> Actor {
    Actor::new(
        "customer-1",
        Role::Customer,
        Some("ana@example.com".to_string()),
    )
}

pub fn admin() -> Actor {
    Actor::new("admin-1", Role::Admin, Some("barra@example.com".to_string()))
}

pub fn product(name: &str, price: &str, stock: u32) -> Product {
    let now = Utc::now();
    Product::from_repository(
        Uuid::new_v4(),
        name.to_string(),
        money(price),
        None,
        None,
        None,
        true,
        false,
        stock,
        vec![],
        now,
        now,
    )
}

pub fn option(group_id: Uuid, name: &str, adjustment: &str) -> ProductOption {
    ProductOption::from_repository(Uuid::new_v4(), group_id, name.to_string(), money(adjustment))
}

pub fn group(
    name: &str,
    mode: SelectionMode,
    required: bool,
    options: &[(&str, &str)],
) -> OptionGroup {
    let id = Uuid::new_v4();
    OptionGroup::from_repository(
        id,
        name.to_string(),
        mode,
        required,
        options
            .iter()
            .map(|(option_name, adjustment)| option(id, option_name, adjustment))
            .collect(),
    )
}

/// Café Americano at 30.00 with a required size group
/// (Chico 0.00, Grande +10.00) and an optional "Extras" group (Shot +8.00).
pub fn americano(stock: u32) -> ProductDetail {
    let mut product = product("Café Americano", "30.00", stock);
    let size = group(
        "Tamaño",
        SelectionMode::Single,
        true,
        &[("Chico", "0.00"), ("Grande", "10.00")],
    );
    let extras = group("Extras", SelectionMode::Multiple, false, &[("Shot", "8.00")]);
    product.option_group_ids = vec![size.id, extras.id];
    ProductDetail::new(product, vec![size, extras])
}

/// Agua at 1.00 with an optional "Descuento" of -2.50, which prices below zero.
pub fn discounted_water(stock: u32) -> ProductDetail {
    let mut product = product("Agua", "1.00", stock);
    let promo = group("Promo", SelectionMode::Multiple, false, &[("Descuento", "-2.50")]);
    product.option_group_ids = vec![promo.id];
    ProductDetail::new(product, vec![promo])
}

pub fn option_id(detail: &ProductDetail, name: &str) -> Uuid {
    detail
        .groups
        .iter()
        .flat_map(|g| g.options.iter())
        .find(|o| o.name == name)
        .map(|o| o.id)
        .unwrap()
}

#[derive(Debug, Clone, Default)]
pub struct StoreState {
    pub products: HashMap<Uuid, ProductDetail>,
    pub cart: Vec<CartLine>,
    pub orders: Vec<Order>,
}

impl StoreState {
    /// What the cart listing would return for the user right now.
    pub fn cart_details(&self, user_id: &UserId) -> Vec<CartLineDetails> {
        self.cart
            .iter()
            .filter(|line| &line.user_id == user_id)
            .filter_map(|line| {
                let detail = self.products.get(&line.product_id)?;
                let options = detail
                    .groups
                    .iter()
                    .flat_map(|g| g.options.iter())
                    .filter(|o| line.option_ids.contains(&o.id))
                    .map(|o| CartLineOption {
                        id: o.id,
                        name: o.name.clone(),
                        price_adjustment: o.price_adjustment.clone(),
                    })
                    .collect();
                Some(CartLineDetails {
                    line_id: line.id,
                    product_id: line.product_id,
                    product_name: detail.product.name.clone(),
                    image_path: detail.product.image_path.clone(),
                    base_price: detail.product.price.clone(),
                    quantity: line.quantity,
                    note: line.note.clone(),
                    options,
                    created_at: line.created_at,
                })
            })
            .collect()
    }

    /// Mirrors `ON DELETE SET NULL` on order items.
    pub fn delete_product(&mut self, id: Uuid) {
        self.products.remove(&id);
        self.cart.retain(|line| line.product_id != id);
        for item in self.orders.iter_mut().flat_map(|o| o.items.iter_mut()) {
            if item.product_id == Some(id) {
                item.product_id = None;
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailPoint {
    InsertOrderItem,
    Commit,
}

/// Checkout store whose sessions stage every write on a private copy and
/// publish it only on commit.
#[derive(Clone, Default)]
pub struct InMemoryCheckoutStore {
    pub state: Arc<Mutex<StoreState>>,
    pub fail_at: Option<FailPoint>,
}

impl InMemoryCheckoutStore {
    pub fn with_state(state: StoreState) -> Self {
        Self {
            state: Arc::new(Mutex::new(state)),
            fail_at: None,
        }
    }

    pub fn failing_at(mut self, point: FailPoint) -> Self {
        self.fail_at = Some(point);
        self
    }

    pub fn snapshot(&self) -> StoreState {
        self.state.lock().unwrap().clone()
    }
}

#[async_trait]
impl CheckoutUnitOfWork for InMemoryCheckoutStore {
    async fn begin(&self) -> Result<Box<dyn CheckoutSession>, RepositoryError> {
        let staged = self.state.lock().unwrap().clone();
        Ok(Box::new(InMemorySession {
            shared: Arc::clone(&self.state),
            staged,
            fail_at: self.fail_at,
        }))
    }
}

pub struct InMemorySession {
    shared: Arc<Mutex<StoreState>>,
    staged: StoreState,
    fail_at: Option<FailPoint>,
}

#[async_trait]
impl CheckoutSession for InMemorySession {
    async fn lock_cart_lines(&mut self, user_id: &UserId) -> Result<Vec<CartLine>, RepositoryError> {
        Ok(self
            .staged
            .cart
            .iter()
            .filter(|line| &line.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn get_product_detail(
        &mut self,
        product_id: Uuid,
    ) -> Result<Option<ProductDetail>, RepositoryError> {
        Ok(self.staged.products.get(&product_id).cloned())
    }

    async fn reserve_stock(&mut self, product_id: Uuid, quantity: u32) -> Result<bool, RepositoryError> {
        match self.staged.products.get_mut(&product_id) {
            Some(detail) if detail.product.stock >= quantity => {
                detail.product.stock -= quantity;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn insert_order(&mut self, order: &Order) -> Result<(), RepositoryError> {
        self.staged.orders.push(Order {
            items: vec![],
            ..order.clone()
        });
        Ok(())
    }

    async fn insert_order_item(&mut self, order_id: Uuid, item: &OrderItem) -> Result<(), RepositoryError> {
        if self.fail_at == Some(FailPoint::InsertOrderItem) {
            return Err(RepositoryError::Persistence);
        }
        let order = self
            .staged
            .orders
            .iter_mut()
            .find(|o| o.id == order_id)
            .ok_or(RepositoryError::Conflict)?;
        order.items.push(item.clone());
        Ok(())
    }

    async fn clear_cart(&mut self, user_id: &UserId) -> Result<u64, RepositoryError> {
        let before = self.staged.cart.len();
        self.staged.cart.retain(|line| &line.user_id != user_id);
        Ok((before - self.staged.cart.len()) as u64)
    }

    async fn commit(&mut self) -> Result<(), RepositoryError> {
        if self.fail_at == Some(FailPoint::Commit) {
            return Err(RepositoryError::Transient);
        }
        *self.shared.lock().unwrap() = std::mem::take(&mut self.staged);
        Ok(())
    }

    async fn rollback(&mut self) -> Result<(), RepositoryError> {
        self.staged = StoreState::default();
        Ok(())
    }
}
