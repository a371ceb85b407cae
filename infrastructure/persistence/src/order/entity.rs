use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::kitchen::state_machine::OrderStatus;
use business::domain::order::model::{Order, OrderItem, OrderItemOption, OrderSummary};
use business::domain::shared::money::Money;
use business::domain::shared::value_objects::UserId;

use crate::db::from_db_int;

#[derive(Debug, FromRow)]
pub struct OrderEntity {
    pub id: Uuid,
    pub user_id: String,
    pub customer_email: Option<String>,
    pub total: BigDecimal,
    pub status: String,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl OrderEntity {
    fn status(&self) -> OrderStatus {
        self.status
            .parse::<OrderStatus>()
            .unwrap_or(OrderStatus::Received)
    }

    pub fn into_domain(self, items: Vec<OrderItem>) -> Order {
        let status = self.status();
        Order::from_repository(
            self.id,
            UserId::new(self.user_id),
            self.customer_email,
            Money::new(self.total),
            status,
            self.note,
            self.created_at,
            items,
        )
    }

    pub fn into_summary(self) -> OrderSummary {
        let status = self.status();
        OrderSummary {
            id: self.id,
            total: Money::new(self.total),
            status,
            note: self.note,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct OrderItemEntity {
    pub id: Uuid,
    pub order_id: Uuid,
    pub product_id: Option<Uuid>,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: BigDecimal,
    pub line_total: BigDecimal,
    pub note: Option<String>,
}

impl OrderItemEntity {
    pub fn into_domain(self, options: Vec<OrderItemOption>) -> OrderItem {
        OrderItem::from_repository(
            self.id,
            self.product_id,
            self.product_name,
            from_db_int(self.quantity),
            Money::new(self.unit_price),
            Money::new(self.line_total),
            self.note,
            options,
        )
    }
}

#[derive(Debug, FromRow)]
pub struct OrderItemOptionEntity {
    pub order_item_id: Uuid,
    pub option_id: Option<Uuid>,
    pub name: String,
    pub price_adjustment: BigDecimal,
}

impl OrderItemOptionEntity {
    pub fn into_domain(self) -> OrderItemOption {
        OrderItemOption {
            option_id: self.option_id,
            name: self.name,
            price_adjustment: Money::new(self.price_adjustment),
        }
    }
}
