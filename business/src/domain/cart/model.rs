use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::CartError;
use crate::domain::pricing::resolver::{line_total, unit_price};
use crate::domain::shared::money::Money;
use crate::domain::shared::value_objects::UserId;

/// A pending basket entry. Priced on read, never stored with a price.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub id: Uuid,
    pub user_id: UserId,
    pub product_id: Uuid,
    pub quantity: u32,
    pub note: Option<String>,
    pub option_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl CartLine {
    pub fn new(
        user_id: UserId,
        product_id: Uuid,
        quantity: u32,
        note: Option<String>,
        option_ids: Vec<Uuid>,
    ) -> Result<Self, CartError> {
        if quantity < 1 {
            return Err(CartError::InvalidQuantity);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            product_id,
            quantity,
            note: normalize_note(note),
            option_ids,
            created_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        product_id: Uuid,
        quantity: u32,
        note: Option<String>,
        option_ids: Vec<Uuid>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            product_id,
            quantity,
            note,
            option_ids,
            created_at,
        }
    }
}

/// Blank notes are dropped rather than stored.
pub fn normalize_note(note: Option<String>) -> Option<String> {
    note.map(|n| n.trim().to_string()).filter(|n| !n.is_empty())
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartLineOption {
    pub id: Uuid,
    pub name: String,
    pub price_adjustment: Money,
}

/// A cart line joined with the live product and option rows.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLineDetails {
    pub line_id: Uuid,
    pub product_id: Uuid,
    pub product_name: String,
    pub image_path: Option<String>,
    pub base_price: Money,
    pub quantity: u32,
    pub note: Option<String>,
    pub options: Vec<CartLineOption>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartLineView {
    pub line_id: Uuid,
    pub product_id: Uuid,
    pub product_name: String,
    pub image_path: Option<String>,
    pub base_price: Money,
    pub quantity: u32,
    pub note: Option<String>,
    pub option_names: Vec<String>,
    pub options_adjustment: Money,
    pub unit_price: Money,
    pub subtotal: Money,
}

impl From<CartLineDetails> for CartLineView {
    fn from(details: CartLineDetails) -> Self {
        let unit = unit_price(
            &details.base_price,
            details.options.iter().map(|o| &o.price_adjustment),
        );
        let subtotal = line_total(&unit, details.quantity);
        let options_adjustment: Money = details.options.iter().map(|o| &o.price_adjustment).sum();

        Self {
            line_id: details.line_id,
            product_id: details.product_id,
            product_name: details.product_name,
            image_path: details.image_path,
            base_price: details.base_price,
            quantity: details.quantity,
            note: details.note,
            option_names: details.options.into_iter().map(|o| o.name).collect(),
            options_adjustment,
            unit_price: unit,
            subtotal,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub total: Money,
}

impl CartView {
    pub fn new(details: Vec<CartLineDetails>) -> Self {
        let lines: Vec<CartLineView> = details.into_iter().map(CartLineView::from).collect();
        let total: Money = lines.iter().map(|l| &l.subtotal).sum();
        Self { lines, total }
    }
}
