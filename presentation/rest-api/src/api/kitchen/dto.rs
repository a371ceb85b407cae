use poem_openapi::Object;

use crate::api::order::dto::OrderStatusDto;

#[derive(Debug, Clone, Object)]
pub struct TransitionOrderRequest {
    /// Target status
    pub status: OrderStatusDto,
}
