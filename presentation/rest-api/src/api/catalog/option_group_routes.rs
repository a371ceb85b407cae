use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::catalog::use_cases::create_option::{
    CreateOptionParams, CreateOptionUseCase,
};
use business::domain::catalog::use_cases::create_option_group::{
    CreateOptionGroupParams, CreateOptionGroupUseCase,
};
use business::domain::catalog::use_cases::delete_option::{
    DeleteOptionParams, DeleteOptionUseCase,
};
use business::domain::catalog::use_cases::delete_option_group::{
    DeleteOptionGroupParams, DeleteOptionGroupUseCase,
};
use business::domain::catalog::use_cases::list_option_groups::{
    ListOptionGroupsParams, ListOptionGroupsUseCase,
};
use business::domain::catalog::use_cases::update_option::{
    UpdateOptionParams, UpdateOptionUseCase,
};
use business::domain::catalog::use_cases::update_option_group::{
    UpdateOptionGroupParams, UpdateOptionGroupUseCase,
};

use crate::api::catalog::dto::{
    CreateOptionRequest, OptionGroupRequest, OptionGroupResponse, ProductOptionResponse,
    UpdateOptionRequest, parse_money,
};
use crate::api::catalog::routes::DeleteResult;
use crate::api::error::{ErrorResponse, IntoErrorResponse, impl_error_variants};
use crate::api::security::JwtBearer;
use crate::api::tags::ApiTags;

pub struct OptionGroupUseCases {
    pub list: Arc<dyn ListOptionGroupsUseCase>,
    pub create: Arc<dyn CreateOptionGroupUseCase>,
    pub update: Arc<dyn UpdateOptionGroupUseCase>,
    pub delete: Arc<dyn DeleteOptionGroupUseCase>,
    pub create_option: Arc<dyn CreateOptionUseCase>,
    pub update_option: Arc<dyn UpdateOptionUseCase>,
    pub delete_option: Arc<dyn DeleteOptionUseCase>,
}

pub struct OptionGroupApi {
    use_cases: OptionGroupUseCases,
}

impl OptionGroupApi {
    pub fn new(use_cases: OptionGroupUseCases) -> Self {
        Self { use_cases }
    }
}

/// Option groups and their options
#[OpenApi]
impl OptionGroupApi {
    /// List option groups with their options
    #[oai(path = "/admin/option-groups", method = "get", tag = "ApiTags::Catalog")]
    async fn list_option_groups(&self, auth: JwtBearer) -> OptionGroupListResponse {
        match self
            .use_cases
            .list
            .execute(ListOptionGroupsParams { actor: auth.0 })
            .await
        {
            Ok(groups) => {
                OptionGroupListResponse::Ok(Json(groups.into_iter().map(|g| g.into()).collect()))
            }
            Err(err) => err.into_error_response().into(),
        }
    }

    /// Create an option group
    #[oai(path = "/admin/option-groups", method = "post", tag = "ApiTags::Catalog")]
    async fn create_option_group(
        &self,
        auth: JwtBearer,
        body: Json<OptionGroupRequest>,
    ) -> OptionGroupResult {
        match self
            .use_cases
            .create
            .execute(CreateOptionGroupParams {
                actor: auth.0,
                name: body.0.name,
                selection_mode: body.0.selection_mode.into(),
                required: body.0.required,
            })
            .await
        {
            Ok(group) => OptionGroupResult::Created(Json(group.into())),
            Err(err) => err.into_error_response().into(),
        }
    }

    /// Update an option group's name, mode and required flag
    #[oai(path = "/admin/option-groups/:id", method = "put", tag = "ApiTags::Catalog")]
    async fn update_option_group(
        &self,
        auth: JwtBearer,
        id: Path<Uuid>,
        body: Json<OptionGroupRequest>,
    ) -> OptionGroupResult {
        match self
            .use_cases
            .update
            .execute(UpdateOptionGroupParams {
                actor: auth.0,
                id: id.0,
                name: body.0.name,
                selection_mode: body.0.selection_mode.into(),
                required: body.0.required,
            })
            .await
        {
            Ok(group) => OptionGroupResult::Ok(Json(group.into())),
            Err(err) => err.into_error_response().into(),
        }
    }

    /// Delete an option group and its options
    ///
    /// Fails with 409 while a product still links the group.
    #[oai(path = "/admin/option-groups/:id", method = "delete", tag = "ApiTags::Catalog")]
    async fn delete_option_group(&self, auth: JwtBearer, id: Path<Uuid>) -> DeleteResult {
        match self
            .use_cases
            .delete
            .execute(DeleteOptionGroupParams {
                actor: auth.0,
                id: id.0,
            })
            .await
        {
            Ok(()) => DeleteResult::NoContent,
            Err(err) => err.into_error_response().into(),
        }
    }

    /// Add an option to a group
    #[oai(
        path = "/admin/option-groups/:id/options",
        method = "post",
        tag = "ApiTags::Catalog"
    )]
    async fn create_option(
        &self,
        auth: JwtBearer,
        id: Path<Uuid>,
        body: Json<CreateOptionRequest>,
    ) -> OptionResult {
        let price_adjustment = match body.0.price_adjustment.as_deref().map(parse_money) {
            Some(Err(err)) => return err.into(),
            Some(Ok(amount)) => Some(amount),
            None => None,
        };

        match self
            .use_cases
            .create_option
            .execute(CreateOptionParams {
                actor: auth.0,
                group_id: id.0,
                name: body.0.name,
                price_adjustment,
            })
            .await
        {
            Ok(option) => OptionResult::Created(Json(option.into())),
            Err(err) => err.into_error_response().into(),
        }
    }

    /// Rename an option or change its price adjustment
    #[oai(path = "/admin/options/:id", method = "put", tag = "ApiTags::Catalog")]
    async fn update_option(
        &self,
        auth: JwtBearer,
        id: Path<Uuid>,
        body: Json<UpdateOptionRequest>,
    ) -> OptionResult {
        let price_adjustment = match parse_money(&body.0.price_adjustment) {
            Ok(amount) => amount,
            Err(err) => return err.into(),
        };

        match self
            .use_cases
            .update_option
            .execute(UpdateOptionParams {
                actor: auth.0,
                id: id.0,
                name: body.0.name,
                price_adjustment,
            })
            .await
        {
            Ok(option) => OptionResult::Ok(Json(option.into())),
            Err(err) => err.into_error_response().into(),
        }
    }

    /// Delete an option
    #[oai(path = "/admin/options/:id", method = "delete", tag = "ApiTags::Catalog")]
    async fn delete_option(&self, auth: JwtBearer, id: Path<Uuid>) -> DeleteResult {
        match self
            .use_cases
            .delete_option
            .execute(DeleteOptionParams {
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
pub enum OptionGroupListResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<OptionGroupResponse>>),
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
pub enum OptionGroupResult {
    #[oai(status = 200)]
    Ok(Json<OptionGroupResponse>),
    #[oai(status = 201)]
    Created(Json<OptionGroupResponse>),
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
pub enum OptionResult {
    #[oai(status = 200)]
    Ok(Json<ProductOptionResponse>),
    #[oai(status = 201)]
    Created(Json<ProductOptionResponse>),
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

impl_error_variants!(OptionGroupListResponse, OptionGroupResult, OptionResult);
