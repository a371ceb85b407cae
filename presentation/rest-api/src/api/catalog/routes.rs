use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::catalog::use_cases::create_product::{
    CreateProductParams, CreateProductUseCase,
};
use business::domain::catalog::use_cases::delete_product::{
    DeleteProductParams, DeleteProductUseCase,
};
use business::domain::catalog::use_cases::list_products::{
    ListProductsParams, ListProductsUseCase,
};
use business::domain::catalog::use_cases::set_product_active::{
    SetProductActiveParams, SetProductActiveUseCase,
};
use business::domain::catalog::use_cases::set_product_special::{
    SetProductSpecialParams, SetProductSpecialUseCase,
};
use business::domain::catalog::use_cases::update_product::{
    UpdateProductParams, UpdateProductUseCase,
};

use crate::api::catalog::dto::{
    ProductRequest, ProductResponse, SetActiveRequest, SetSpecialRequest,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse, impl_error_variants};
use crate::api::security::JwtBearer;
use crate::api::tags::ApiTags;

pub struct ProductAdminApi {
    list_use_case: Arc<dyn ListProductsUseCase>,
    create_use_case: Arc<dyn CreateProductUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    set_active_use_case: Arc<dyn SetProductActiveUseCase>,
    set_special_use_case: Arc<dyn SetProductSpecialUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductAdminApi {
    pub fn new(
        list_use_case: Arc<dyn ListProductsUseCase>,
        create_use_case: Arc<dyn CreateProductUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        set_active_use_case: Arc<dyn SetProductActiveUseCase>,
        set_special_use_case: Arc<dyn SetProductSpecialUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            list_use_case,
            create_use_case,
            update_use_case,
            set_active_use_case,
            set_special_use_case,
            delete_use_case,
        }
    }
}

/// Product administration API
///
/// Every endpoint requires an admin token.
#[OpenApi]
impl ProductAdminApi {
    /// List every product, including inactive ones
    #[oai(path = "/admin/products", method = "get", tag = "ApiTags::Catalog")]
    async fn list_products(&self, auth: JwtBearer) -> ProductListResponse {
        match self
            .list_use_case
            .execute(ListProductsParams { actor: auth.0 })
            .await
        {
            Ok(products) => {
                ProductListResponse::Ok(Json(products.into_iter().map(|p| p.into()).collect()))
            }
            Err(err) => err.into_error_response().into(),
        }
    }

    /// Create a product
    #[oai(path = "/admin/products", method = "post", tag = "ApiTags::Catalog")]
    async fn create_product(&self, auth: JwtBearer, body: Json<ProductRequest>) -> ProductResult {
        let props = match body.0.into_props() {
            Ok(props) => props,
            Err(err) => return err.into(),
        };

        match self
            .create_use_case
            .execute(CreateProductParams {
                actor: auth.0,
                props,
            })
            .await
        {
            Ok(product) => ProductResult::Created(Json(product.into())),
            Err(err) => err.into_error_response().into(),
        }
    }

    /// Replace a product's fields and option group links
    #[oai(path = "/admin/products/:id", method = "put", tag = "ApiTags::Catalog")]
    async fn update_product(
        &self,
        auth: JwtBearer,
        id: Path<Uuid>,
        body: Json<ProductRequest>,
    ) -> ProductResult {
        let props = match body.0.into_props() {
            Ok(props) => props,
            Err(err) => return err.into(),
        };

        match self
            .update_use_case
            .execute(UpdateProductParams {
                actor: auth.0,
                id: id.0,
                props,
            })
            .await
        {
            Ok(product) => ProductResult::Ok(Json(product.into())),
            Err(err) => err.into_error_response().into(),
        }
    }

    /// Show or hide a product on the menu
    #[oai(path = "/admin/products/:id/active", method = "put", tag = "ApiTags::Catalog")]
    async fn set_active(
        &self,
        auth: JwtBearer,
        id: Path<Uuid>,
        body: Json<SetActiveRequest>,
    ) -> ProductResult {
        match self
            .set_active_use_case
            .execute(SetProductActiveParams {
                actor: auth.0,
                id: id.0,
                active: body.0.active,
            })
            .await
        {
            Ok(product) => ProductResult::Ok(Json(product.into())),
            Err(err) => err.into_error_response().into(),
        }
    }

    /// Mark or unmark a product as special
    #[oai(path = "/admin/products/:id/special", method = "put", tag = "ApiTags::Catalog")]
    async fn set_special(
        &self,
        auth: JwtBearer,
        id: Path<Uuid>,
        body: Json<SetSpecialRequest>,
    ) -> ProductResult {
        match self
            .set_special_use_case
            .execute(SetProductSpecialParams {
                actor: auth.0,
                id: id.0,
                special: body.0.special,
            })
            .await
        {
            Ok(product) => ProductResult::Ok(Json(product.into())),
            Err(err) => err.into_error_response().into(),
        }
    }

    /// Delete a product
    ///
    /// Past orders keep their item snapshots.
    #[oai(path = "/admin/products/:id", method = "delete", tag = "ApiTags::Catalog")]
    async fn delete_product(&self, auth: JwtBearer, id: Path<Uuid>) -> DeleteResult {
        match self
            .delete_use_case
            .execute(DeleteProductParams {
                actor: auth.0,
                id: id.0,
            })
            .await
        {
            Ok(()) => DeleteResult::NoContent,
            Err(err) => err.into_error_response().into(),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ProductListResponse {
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
pub enum ProductResult {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
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

/// Shared by every admin delete endpoint.
#[derive(poem_openapi::ApiResponse)]
pub enum DeleteResult {
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

impl_error_variants!(ProductListResponse, ProductResult, DeleteResult);
