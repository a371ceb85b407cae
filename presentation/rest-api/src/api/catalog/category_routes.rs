use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::catalog::use_cases::create_category::{
    CreateCategoryParams, CreateCategoryUseCase,
};
use business::domain::catalog::use_cases::delete_category::{
    DeleteCategoryParams, DeleteCategoryUseCase,
};
use business::domain::catalog::use_cases::list_categories::{
    ListCategoriesParams, ListCategoriesUseCase,
};
use business::domain::catalog::use_cases::update_category::{
    UpdateCategoryParams, UpdateCategoryUseCase,
};

use crate::api::catalog::dto::{CategoryRequest, CategoryResponse};
use crate::api::catalog::routes::DeleteResult;
use crate::api::error::{ErrorResponse, IntoErrorResponse, impl_error_variants};
use crate::api::security::JwtBearer;
use crate::api::tags::ApiTags;

pub struct CategoryApi {
    list_use_case: Arc<dyn ListCategoriesUseCase>,
    create_use_case: Arc<dyn CreateCategoryUseCase>,
    update_use_case: Arc<dyn UpdateCategoryUseCase>,
    delete_use_case: Arc<dyn DeleteCategoryUseCase>,
}

impl CategoryApi {
    pub fn new(
        list_use_case: Arc<dyn ListCategoriesUseCase>,
        create_use_case: Arc<dyn CreateCategoryUseCase>,
        update_use_case: Arc<dyn UpdateCategoryUseCase>,
        delete_use_case: Arc<dyn DeleteCategoryUseCase>,
    ) -> Self {
        Self {
            list_use_case,
            create_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

#[OpenApi]
impl CategoryApi {
    /// List categories by name
    #[oai(path = "/admin/categories", method = "get", tag = "ApiTags::Catalog")]
    async fn list_categories(&self, auth: JwtBearer) -> CategoryListResponse {
        match self
            .list_use_case
            .execute(ListCategoriesParams { actor: auth.0 })
            .await
        {
            Ok(categories) => CategoryListResponse::Ok(Json(
                categories.into_iter().map(|c| c.into()).collect(),
            )),
            Err(err) => err.into_error_response().into(),
        }
    }

    /// Create a category
    ///
    /// Names are unique.
    #[oai(path = "/admin/categories", method = "post", tag = "ApiTags::Catalog")]
    async fn create_category(
        &self,
        auth: JwtBearer,
        body: Json<CategoryRequest>,
    ) -> CategoryResult {
        match self
            .create_use_case
            .execute(CreateCategoryParams {
                actor: auth.0,
                name: body.0.name,
            })
            .await
        {
            Ok(category) => CategoryResult::Created(Json(category.into())),
            Err(err) => err.into_error_response().into(),
        }
    }

    /// Rename a category
    #[oai(path = "/admin/categories/:id", method = "put", tag = "ApiTags::Catalog")]
    async fn update_category(
        &self,
        auth: JwtBearer,
        id: Path<Uuid>,
        body: Json<CategoryRequest>,
    ) -> CategoryResult {
        match self
            .update_use_case
            .execute(UpdateCategoryParams {
                actor: auth.0,
                id: id.0,
                name: body.0.name,
            })
            .await
        {
            Ok(category) => CategoryResult::Ok(Json(category.into())),
            Err(err) => err.into_error_response().into(),
        }
    }

    /// Delete a category
    ///
    /// Fails with 409 while products still reference it.
    #[oai(path = "/admin/categories/:id", method = "delete", tag = "ApiTags::Catalog")]
    async fn delete_category(&self, auth: JwtBearer, id: Path<Uuid>) -> DeleteResult {
        match self
            .delete_use_case
            .execute(DeleteCategoryParams {
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
pub enum CategoryListResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CategoryResponse>>),
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
pub enum CategoryResult {
    #[oai(status = 200)]
    Ok(Json<CategoryResponse>),
    #[oai(status = 201)]
    Created(Json<CategoryResponse>),
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

impl_error_variants!(CategoryListResponse, CategoryResult);
