use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::OrderError;
use crate::domain::cart::model::CartLine;
use crate::domain::catalog::model::Product;
use crate::domain::kitchen::state_machine::OrderStatus;
use crate::domain::pricing::errors::PricingError;
use crate::domain::pricing::resolver::{ResolvedSelection, line_total};
use crate::domain::shared::money::Money;
use crate::domain::shared::value_objects::UserId;

/// Snapshot of a chosen option. The live option may be renamed or deleted later.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItemOption {
    pub option_id: Option<Uuid>,
    pub name: String,
    pub price_adjustment: Money,
}

/// Price-frozen copy of a cart line taken at checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub id: Uuid,
    /// `None` once the product has been deleted.
    pub product_id: Option<Uuid>,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: Money,
    pub line_total: Money,
    pub note: Option<String>,
    pub options: Vec<OrderItemOption>,
}

impl OrderItem {
    pub fn snapshot(
        line: &CartLine,
        product: &Product,
        selection: &ResolvedSelection,
    ) -> Result<Self, PricingError> {
        let unit_price = selection.payable_unit_price(&product.price)?;
        let line_total = line_total(&unit_price, line.quantity);

        Ok(Self {
            id: Uuid::new_v4(),
            product_id: Some(product.id),
            product_name: product.name.clone(),
            quantity: line.quantity,
            unit_price,
            line_total,
            note: line.note.clone(),
            options: selection
                .options
                .iter()
                .map(|o| OrderItemOption {
                    option_id: Some(o.id),
                    name: o.name.clone(),
                    price_adjustment: o.price_adjustment.clone(),
                })
                .collect(),
        })
    }

    pub fn option_names(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.name.as_str()).collect()
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        product_id: Option<Uuid>,
        product_name: String,
        quantity: u32,
        unit_price: Money,
        line_total: Money,
        note: Option<String>,
        options: Vec<OrderItemOption>,
    ) -> Self {
        Self {
            id,
            product_id,
            product_name,
            quantity,
            unit_price,
            line_total,
            note,
            options,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: Uuid,
    pub user_id: UserId,
    pub customer_email: Option<String>,
    pub total: Money,
    pub status: OrderStatus,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Builds a new order in its initial status. The total is always the sum
    /// of the item line totals.
    pub fn place(
        user_id: UserId,
        customer_email: Option<String>,
        note: Option<String>,
        items: Vec<OrderItem>,
    ) -> Result<Self, OrderError> {
        if items.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        let total: Money = items.iter().map(|i| &i.line_total).sum();

        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            customer_email,
            total,
            status: OrderStatus::Received,
            note,
            created_at: Utc::now(),
            items,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        customer_email: Option<String>,
        total: Money,
        status: OrderStatus,
        note: Option<String>,
        created_at: DateTime<Utc>,
        items: Vec<OrderItem>,
    ) -> Self {
        Self {
            id,
            user_id,
            customer_email,
            total,
            status,
            note,
            created_at,
            items,
        }
    }

    pub fn receipt(&self) -> OrderReceipt {
        OrderReceipt {
            order_id: self.id,
            total: self.total.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderReceipt {
    pub order_id: Uuid,
    pub total: Money,
}

/// One row of a customer's order history.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary {
    pub id: Uuid,
    pub total: Money,
    pub status: OrderStatus,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}
