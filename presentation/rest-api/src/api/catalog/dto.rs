use chrono::{DateTime, Utc};
use poem::http::StatusCode;
use poem_openapi::{Enum, Object, payload::Json};
use uuid::Uuid;

use business::domain::catalog::model::{
    Category, NewProductProps, OptionGroup, Product, ProductDetail, ProductOption, SelectionMode,
};
use business::domain::shared::money::Money;

use crate::api::error::{ErrorResponse, validation_error};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum SelectionModeDto {
    #[oai(rename = "single")]
    Single,
    #[oai(rename = "multiple")]
    Multiple,
}

impl From<SelectionMode> for SelectionModeDto {
    fn from(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Single => SelectionModeDto::Single,
            SelectionMode::Multiple => SelectionModeDto::Multiple,
        }
    }
}

impl From<SelectionModeDto> for SelectionMode {
    fn from(dto: SelectionModeDto) -> Self {
        match dto {
            SelectionModeDto::Single => SelectionMode::Single,
            SelectionModeDto::Multiple => SelectionMode::Multiple,
        }
    }
}

/// Parses a decimal amount such as `"12.50"`.
pub fn parse_money(value: &str) -> Result<Money, (StatusCode, Json<ErrorResponse>)> {
    value
        .parse::<Money>()
        .map_err(|_| validation_error("catalog.invalid_amount"))
}

#[derive(Debug, Clone, Object)]
pub struct ProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Base price with up to two decimals, e.g. "30.00"
    pub price: String,
    pub category_id: Option<Uuid>,
    /// Opaque path returned by the image storage
    pub image_path: Option<String>,
    #[oai(default)]
    pub stock: u32,
    /// Option groups offered with this product
    #[oai(default)]
    pub option_group_ids: Vec<Uuid>,
}

impl ProductRequest {
    pub fn into_props(self) -> Result<NewProductProps, (StatusCode, Json<ErrorResponse>)> {
        Ok(NewProductProps {
            name: self.name,
            price: parse_money(&self.price)?,
            category_id: self.category_id,
            image_path: self.image_path,
            stock: self.stock,
            option_group_ids: self.option_group_ids,
        })
    }
}

#[derive(Debug, Clone, Object)]
pub struct SetActiveRequest {
    pub active: bool,
}

#[derive(Debug, Clone, Object)]
pub struct SetSpecialRequest {
    pub special: bool,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub price: String,
    #[oai(skip_serializing_if_is_none)]
    pub category_id: Option<Uuid>,
    #[oai(skip_serializing_if_is_none)]
    pub category_name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub image_path: Option<String>,
    pub active: bool,
    /// Featured on the menu
    pub special: bool,
    pub stock: u32,
    pub option_group_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price.to_string(),
            category_id: product.category_id,
            category_name: product.category_name,
            image_path: product.image_path,
            active: product.active,
            special: product.special,
            stock: product.stock,
            option_group_ids: product.option_group_ids,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductOptionResponse {
    pub id: Uuid,
    pub group_id: Uuid,
    pub name: String,
    /// Signed amount added to the base price
    pub price_adjustment: String,
}

impl From<ProductOption> for ProductOptionResponse {
    fn from(option: ProductOption) -> Self {
        Self {
            id: option.id,
            group_id: option.group_id,
            name: option.name,
            price_adjustment: option.price_adjustment.to_string(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct OptionGroupResponse {
    pub id: Uuid,
    pub name: String,
    pub selection_mode: SelectionModeDto,
    pub required: bool,
    pub options: Vec<ProductOptionResponse>,
}

impl From<OptionGroup> for OptionGroupResponse {
    fn from(group: OptionGroup) -> Self {
        Self {
            id: group.id,
            name: group.name,
            selection_mode: group.selection_mode.into(),
            required: group.required,
            options: group.options.into_iter().map(|o| o.into()).collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductDetailResponse {
    pub product: ProductResponse,
    pub groups: Vec<OptionGroupResponse>,
}

impl From<ProductDetail> for ProductDetailResponse {
    fn from(detail: ProductDetail) -> Self {
        Self {
            product: detail.product.into(),
            groups: detail.groups.into_iter().map(|g| g.into()).collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CategoryRequest {
    pub name: String,
}

#[derive(Debug, Clone, Object)]
pub struct CategoryResponse {
    pub id: Uuid,
    pub name: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct OptionGroupRequest {
    pub name: String,
    pub selection_mode: SelectionModeDto,
    #[oai(default)]
    pub required: bool,
}

#[derive(Debug, Clone, Object)]
pub struct CreateOptionRequest {
    pub name: String,
    /// Defaults to "0.00"
    pub price_adjustment: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateOptionRequest {
    pub name: String,
    pub price_adjustment: String,
}
