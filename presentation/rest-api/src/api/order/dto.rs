use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use uuid::Uuid;

use business::domain::kitchen::state_machine::OrderStatus;
use business::domain::order::model::{
    Order, OrderItem, OrderItemOption, OrderReceipt, OrderSummary,
};

/// Order status as shown to customers and staff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum OrderStatusDto {
    #[oai(rename = "Recibido")]
    Received,
    #[oai(rename = "En preparación")]
    InPreparation,
    #[oai(rename = "Listo para recoger")]
    ReadyForPickup,
    #[oai(rename = "Cancelado")]
    Cancelled,
}

impl From<OrderStatus> for OrderStatusDto {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Received => OrderStatusDto::Received,
            OrderStatus::InPreparation => OrderStatusDto::InPreparation,
            OrderStatus::ReadyForPickup => OrderStatusDto::ReadyForPickup,
            OrderStatus::Cancelled => OrderStatusDto::Cancelled,
        }
    }
}

impl From<OrderStatusDto> for OrderStatus {
    fn from(dto: OrderStatusDto) -> Self {
        match dto {
            OrderStatusDto::Received => OrderStatus::Received,
            OrderStatusDto::InPreparation => OrderStatus::InPreparation,
            OrderStatusDto::ReadyForPickup => OrderStatus::ReadyForPickup,
            OrderStatusDto::Cancelled => OrderStatus::Cancelled,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CheckoutRequest {
    /// Note for the whole order
    pub note: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct OrderReceiptResponse {
    pub order_id: Uuid,
    pub total: String,
}

impl From<OrderReceipt> for OrderReceiptResponse {
    fn from(receipt: OrderReceipt) -> Self {
        Self {
            order_id: receipt.order_id,
            total: receipt.total.to_string(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct OrderSummaryResponse {
    pub id: Uuid,
    pub total: String,
    pub status: OrderStatusDto,
    #[oai(skip_serializing_if_is_none)]
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<OrderSummary> for OrderSummaryResponse {
    fn from(summary: OrderSummary) -> Self {
        Self {
            id: summary.id,
            total: summary.total.to_string(),
            status: summary.status.into(),
            note: summary.note,
            created_at: summary.created_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct OrderItemOptionResponse {
    /// Empty once the option has been deleted from the catalog
    #[oai(skip_serializing_if_is_none)]
    pub option_id: Option<Uuid>,
    pub name: String,
    pub price_adjustment: String,
}

impl From<OrderItemOption> for OrderItemOptionResponse {
    fn from(option: OrderItemOption) -> Self {
        Self {
            option_id: option.option_id,
            name: option.name,
            price_adjustment: option.price_adjustment.to_string(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct OrderItemResponse {
    pub id: Uuid,
    /// Empty once the product has been deleted from the catalog
    #[oai(skip_serializing_if_is_none)]
    pub product_id: Option<Uuid>,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_total: String,
    #[oai(skip_serializing_if_is_none)]
    pub note: Option<String>,
    pub options: Vec<OrderItemOptionResponse>,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        Self {
            id: item.id,
            product_id: item.product_id,
            product_name: item.product_name,
            quantity: item.quantity,
            unit_price: item.unit_price.to_string(),
            line_total: item.line_total.to_string(),
            note: item.note,
            options: item.options.into_iter().map(|o| o.into()).collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct OrderResponse {
    pub id: Uuid,
    pub user_id: String,
    #[oai(skip_serializing_if_is_none)]
    pub customer_email: Option<String>,
    pub total: String,
    pub status: OrderStatusDto,
    #[oai(skip_serializing_if_is_none)]
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderItemResponse>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            user_id: order.user_id.to_string(),
            customer_email: order.customer_email,
            total: order.total.to_string(),
            status: order.status.into(),
            note: order.note,
            created_at: order.created_at,
            items: order.items.into_iter().map(|i| i.into()).collect(),
        }
    }
}
