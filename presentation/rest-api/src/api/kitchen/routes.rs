use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::kitchen::use_cases::get_queue::{
    GetKitchenQueueParams, GetKitchenQueueUseCase,
};
use business::domain::kitchen::use_cases::transition::{
    TransitionOrderParams, TransitionOrderUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse, impl_error_variants};
use crate::api::kitchen::dto::TransitionOrderRequest;
use crate::api::order::dto::OrderResponse;
use crate::api::security::JwtBearer;
use crate::api::tags::ApiTags;

pub struct KitchenApi {
    get_queue_use_case: Arc<dyn GetKitchenQueueUseCase>,
    transition_use_case: Arc<dyn TransitionOrderUseCase>,
}

impl KitchenApi {
    pub fn new(
        get_queue_use_case: Arc<dyn GetKitchenQueueUseCase>,
        transition_use_case: Arc<dyn TransitionOrderUseCase>,
    ) -> Self {
        Self {
            get_queue_use_case,
            transition_use_case,
        }
    }
}

/// Kitchen API
///
/// Admin only.
#[OpenApi]
impl KitchenApi {
    /// Received and in-preparation orders, oldest first
    #[oai(path = "/kitchen/queue", method = "get", tag = "ApiTags::Kitchen")]
    async fn get_queue(&self, auth: JwtBearer) -> KitchenQueueResponse {
        match self
            .get_queue_use_case
            .execute(GetKitchenQueueParams { actor: auth.0 })
            .await
        {
            Ok(orders) => {
                KitchenQueueResponse::Ok(Json(orders.into_iter().map(|o| o.into()).collect()))
            }
            Err(err) => err.into_error_response().into(),
        }
    }

    /// Move an order to another status
    ///
    /// Moving to "Listo para recoger" e-mails the customer in the background.
    /// Cancelling returns the ordered quantities to stock.
    #[oai(path = "/kitchen/orders/:id/status", method = "put", tag = "ApiTags::Kitchen")]
    async fn transition(
        &self,
        auth: JwtBearer,
        id: Path<Uuid>,
        body: Json<TransitionOrderRequest>,
    ) -> TransitionOrderResponse {
        match self
            .transition_use_case
            .execute(TransitionOrderParams {
                actor: auth.0,
                order_id: id.0,
                target: body.0.status.into(),
            })
            .await
        {
            Ok(order) => TransitionOrderResponse::Ok(Json(order.into())),
            Err(err) => err.into_error_response().into(),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum KitchenQueueResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<OrderResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    Unavailable(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum TransitionOrderResponse {
    #[oai(status = 200)]
    Ok(Json<OrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    Unavailable(Json<ErrorResponse>),
}

impl_error_variants!(KitchenQueueResponse, TransitionOrderResponse);
