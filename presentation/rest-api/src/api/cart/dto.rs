use chrono::{DateTime, Utc};
use poem_openapi::Object;
use uuid::Uuid;

use business::domain::cart::model::{CartLine, CartLineView, CartView};

#[derive(Debug, Clone, Object)]
pub struct AddCartLineRequest {
    pub product_id: Uuid,
    /// At least 1
    pub quantity: u32,
    #[oai(skip_serializing_if_is_none)]
    pub note: Option<String>,
    /// Chosen options; required single-choice groups fall back to their default
    #[oai(default)]
    pub option_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, Object)]
pub struct CartLineResponse {
    pub id: Uuid,
    pub product_id: Uuid,
    pub quantity: u32,
    #[oai(skip_serializing_if_is_none)]
    pub note: Option<String>,
    /// Options stored with the line, defaults included
    pub option_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<CartLine> for CartLineResponse {
    fn from(line: CartLine) -> Self {
        Self {
            id: line.id,
            product_id: line.product_id,
            quantity: line.quantity,
            note: line.note,
            option_ids: line.option_ids,
            created_at: line.created_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartLineViewResponse {
    pub line_id: Uuid,
    pub product_id: Uuid,
    pub product_name: String,
    #[oai(skip_serializing_if_is_none)]
    pub image_path: Option<String>,
    pub base_price: String,
    pub quantity: u32,
    #[oai(skip_serializing_if_is_none)]
    pub note: Option<String>,
    pub option_names: Vec<String>,
    pub options_adjustment: String,
    pub unit_price: String,
    pub subtotal: String,
}

impl From<CartLineView> for CartLineViewResponse {
    fn from(line: CartLineView) -> Self {
        Self {
            line_id: line.line_id,
            product_id: line.product_id,
            product_name: line.product_name,
            image_path: line.image_path,
            base_price: line.base_price.to_string(),
            quantity: line.quantity,
            note: line.note,
            option_names: line.option_names,
            options_adjustment: line.options_adjustment.to_string(),
            unit_price: line.unit_price.to_string(),
            subtotal: line.subtotal.to_string(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    pub lines: Vec<CartLineViewResponse>,
    pub total: String,
}

impl From<CartView> for CartResponse {
    fn from(view: CartView) -> Self {
        Self {
            lines: view.lines.into_iter().map(|l| l.into()).collect(),
            total: view.total.to_string(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ClearCartResponse {
    /// Number of lines removed
    pub removed: u64,
}
