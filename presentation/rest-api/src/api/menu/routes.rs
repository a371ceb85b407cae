use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::catalog::use_cases::get_product_detail::{
    GetProductDetailParams, GetProductDetailUseCase,
};
use business::domain::catalog::use_cases::list_menu::ListMenuUseCase;

use crate::api::catalog::dto::{ProductDetailResponse, ProductResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse, impl_error_variants};
use crate::api::security::JwtBearer;
use crate::api::tags::ApiTags;

pub struct MenuApi {
    list_menu_use_case: Arc<dyn ListMenuUseCase>,
    get_detail_use_case: Arc<dyn GetProductDetailUseCase>,
}

impl MenuApi {
    pub fn new(
        list_menu_use_case: Arc<dyn ListMenuUseCase>,
        get_detail_use_case: Arc<dyn GetProductDetailUseCase>,
    ) -> Self {
        Self {
            list_menu_use_case,
            get_detail_use_case,
        }
    }
}

/// Menu API
///
/// What customers can order right now.
#[OpenApi]
impl MenuApi {
    /// List active products by name
    #[oai(path = "/menu/products", method = "get", tag = "ApiTags::Menu")]
    async fn list_menu(&self, _auth: JwtBearer) -> MenuListResponse {
        match self.list_menu_use_case.execute().await {
            Ok(products) => {
                MenuListResponse::Ok(Json(products.into_iter().map(|p| p.into()).collect()))
            }
            Err(err) => err.into_error_response().into(),
        }
    }

    /// Get a product with its option groups
    ///
    /// Inactive products are only visible to admins.
    #[oai(path = "/menu/products/:id", method = "get", tag = "ApiTags::Menu")]
    async fn get_product(&self, auth: JwtBearer, id: Path<Uuid>) -> MenuProductResponse {
        match self
            .get_detail_use_case
            .execute(GetProductDetailParams {
                actor: auth.0,
                id: id.0,
            })
            .await
        {
            Ok(detail) => MenuProductResponse::Ok(Json(detail.into())),
            Err(err) => err.into_error_response().into(),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum MenuListResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
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
pub enum MenuProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductDetailResponse>),
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

impl_error_variants!(MenuListResponse, MenuProductResponse);
