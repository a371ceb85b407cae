use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::cart::use_cases::add_line::{AddCartLineParams, AddCartLineUseCase};
use business::domain::cart::use_cases::clear::{ClearCartParams, ClearCartUseCase};
use business::domain::cart::use_cases::list_lines::{ListCartLinesParams, ListCartLinesUseCase};
use business::domain::cart::use_cases::remove_line::{
    RemoveCartLineParams, RemoveCartLineUseCase,
};
use business::domain::order::use_cases::place::{PlaceOrderParams, PlaceOrderUseCase};

use crate::api::cart::dto::{AddCartLineRequest, CartLineResponse, CartResponse, ClearCartResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse, impl_error_variants};
use crate::api::order::dto::{CheckoutRequest, OrderReceiptResponse};
use crate::api::security::JwtBearer;
use crate::api::tags::ApiTags;

pub struct CartApi {
    list_use_case: Arc<dyn ListCartLinesUseCase>,
    add_use_case: Arc<dyn AddCartLineUseCase>,
    remove_use_case: Arc<dyn RemoveCartLineUseCase>,
    clear_use_case: Arc<dyn ClearCartUseCase>,
    place_order_use_case: Arc<dyn PlaceOrderUseCase>,
}

impl CartApi {
    pub fn new(
        list_use_case: Arc<dyn ListCartLinesUseCase>,
        add_use_case: Arc<dyn AddCartLineUseCase>,
        remove_use_case: Arc<dyn RemoveCartLineUseCase>,
        clear_use_case: Arc<dyn ClearCartUseCase>,
        place_order_use_case: Arc<dyn PlaceOrderUseCase>,
    ) -> Self {
        Self {
            list_use_case,
            add_use_case,
            remove_use_case,
            clear_use_case,
            place_order_use_case,
        }
    }
}

/// Cart API
///
/// The caller's own cart and checkout.
#[OpenApi]
impl CartApi {
    /// Show my cart with current prices
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get_cart(&self, auth: JwtBearer) -> GetCartResponse {
        match self
            .list_use_case
            .execute(ListCartLinesParams {
                user_id: auth.0.user_id,
            })
            .await
        {
            Ok(view) => GetCartResponse::Ok(Json(view.into())),
            Err(err) => err.into_error_response().into(),
        }
    }

    /// Add a product with its options
    #[oai(path = "/cart", method = "post", tag = "ApiTags::Cart")]
    async fn add_line(&self, auth: JwtBearer, body: Json<AddCartLineRequest>) -> AddCartLineResponse {
        let params = AddCartLineParams {
            user_id: auth.0.user_id,
            product_id: body.0.product_id,
            quantity: body.0.quantity,
            note: body.0.note,
            option_ids: body.0.option_ids,
        };

        match self.add_use_case.execute(params).await {
            Ok(line) => AddCartLineResponse::Created(Json(line.into())),
            Err(err) => err.into_error_response().into(),
        }
    }

    /// Remove one line from my cart
    #[oai(path = "/cart/:line_id", method = "delete", tag = "ApiTags::Cart")]
    async fn remove_line(&self, auth: JwtBearer, line_id: Path<Uuid>) -> RemoveCartLineResponse {
        match self
            .remove_use_case
            .execute(RemoveCartLineParams {
                line_id: line_id.0,
                user_id: auth.0.user_id,
            })
            .await
        {
            Ok(()) => RemoveCartLineResponse::NoContent,
            Err(err) => err.into_error_response().into(),
        }
    }

    /// Empty my cart
    #[oai(path = "/cart", method = "delete", tag = "ApiTags::Cart")]
    async fn clear(&self, auth: JwtBearer) -> ClearCartResult {
        match self
            .clear_use_case
            .execute(ClearCartParams {
                user_id: auth.0.user_id,
            })
            .await
        {
            Ok(removed) => ClearCartResult::Ok(Json(ClearCartResponse { removed })),
            Err(err) => err.into_error_response().into(),
        }
    }

    /// Turn my cart into an order
    ///
    /// All or nothing: on any failure the cart, stock and orders are left as they were.
    /// A 503 means the checkout raced another one and can be retried.
    #[oai(path = "/cart/checkout", method = "post", tag = "ApiTags::Cart")]
    async fn checkout(&self, auth: JwtBearer, body: Json<CheckoutRequest>) -> CheckoutResponse {
        match self
            .place_order_use_case
            .execute(PlaceOrderParams {
                actor: auth.0,
                note: body.0.note,
            })
            .await
        {
            Ok(receipt) => CheckoutResponse::Created(Json(receipt.into())),
            Err(err) => err.into_error_response().into(),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
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
pub enum AddCartLineResponse {
    #[oai(status = 201)]
    Created(Json<CartLineResponse>),
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
pub enum RemoveCartLineResponse {
    #[oai(status = 204)]
    NoContent,
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
pub enum ClearCartResult {
    #[oai(status = 200)]
    Ok(Json<ClearCartResponse>),
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
pub enum CheckoutResponse {
    #[oai(status = 201)]
    Created(Json<OrderReceiptResponse>),
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

impl_error_variants!(
    GetCartResponse,
    AddCartLineResponse,
    RemoveCartLineResponse,
    ClearCartResult,
    CheckoutResponse,
);
