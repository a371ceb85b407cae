use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::order::use_cases::get_detail::{
    GetOrderDetailParams, GetOrderDetailUseCase,
};
use business::domain::order::use_cases::get_history::{
    GetOrderHistoryParams, GetOrderHistoryUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse, impl_error_variants};
use crate::api::order::dto::{OrderResponse, OrderSummaryResponse};
use crate::api::security::JwtBearer;
use crate::api::tags::ApiTags;

pub struct OrderApi {
    get_history_use_case: Arc<dyn GetOrderHistoryUseCase>,
    get_detail_use_case: Arc<dyn GetOrderDetailUseCase>,
}

impl OrderApi {
    pub fn new(
        get_history_use_case: Arc<dyn GetOrderHistoryUseCase>,
        get_detail_use_case: Arc<dyn GetOrderDetailUseCase>,
    ) -> Self {
        Self {
            get_history_use_case,
            get_detail_use_case,
        }
    }
}

/// Order history API
///
/// A customer only ever sees their own orders.
#[OpenApi]
impl OrderApi {
    /// List my orders, newest first
    #[oai(path = "/orders", method = "get", tag = "ApiTags::Orders")]
    async fn get_history(&self, auth: JwtBearer) -> OrderHistoryResponse {
        match self
            .get_history_use_case
            .execute(GetOrderHistoryParams {
                user_id: auth.0.user_id,
            })
            .await
        {
            Ok(orders) => {
                OrderHistoryResponse::Ok(Json(orders.into_iter().map(|o| o.into()).collect()))
            }
            Err(err) => err.into_error_response().into(),
        }
    }

    /// Get one of my orders with its items
    #[oai(path = "/orders/:id", method = "get", tag = "ApiTags::Orders")]
    async fn get_detail(&self, auth: JwtBearer, id: Path<Uuid>) -> OrderDetailResponse {
        match self
            .get_detail_use_case
            .execute(GetOrderDetailParams {
                id: id.0,
                user_id: auth.0.user_id,
            })
            .await
        {
            Ok(order) => OrderDetailResponse::Ok(Json(order.into())),
            Err(err) => err.into_error_response().into(),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum OrderHistoryResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<OrderSummaryResponse>>),
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
pub enum OrderDetailResponse {
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

impl_error_variants!(OrderHistoryResponse, OrderDetailResponse);
