use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::cart::model::{CartLine, CartLineDetails, CartLineOption};
use business::domain::catalog::model::{group_position, option_position};
use business::domain::shared::money::Money;
use business::domain::shared::value_objects::UserId;

use crate::db::from_db_int;

#[derive(Debug, FromRow)]
pub struct CartLineEntity {
    pub id: Uuid,
    pub user_id: String,
    pub product_id: Uuid,
    pub quantity: i32,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl CartLineEntity {
    pub fn into_domain(self, option_ids: Vec<Uuid>) -> CartLine {
        CartLine::from_repository(
            self.id,
            UserId::new(self.user_id),
            self.product_id,
            from_db_int(self.quantity),
            self.note,
            option_ids,
            self.created_at,
        )
    }
}

/// A cart line joined with the product row it points at.
#[derive(Debug, FromRow)]
pub struct CartLineDetailsEntity {
    pub id: Uuid,
    pub product_id: Uuid,
    pub product_name: String,
    pub image_path: Option<String>,
    pub price: BigDecimal,
    pub quantity: i32,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl CartLineDetailsEntity {
    pub fn into_domain(self, options: Vec<CartLineOption>) -> CartLineDetails {
        CartLineDetails {
            line_id: self.id,
            product_id: self.product_id,
            product_name: self.product_name,
            image_path: self.image_path,
            base_price: Money::new(self.price),
            quantity: from_db_int(self.quantity),
            note: self.note,
            options,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct CartLineOptionEntity {
    pub line_id: Uuid,
    pub id: Uuid,
    pub name: String,
    pub price_adjustment: BigDecimal,
    pub group_id: Uuid,
    pub group_name: String,
    pub group_required: bool,
}

impl CartLineOptionEntity {
    /// Puts rows in the order checkout snapshots them.
    pub fn sort(rows: &mut [CartLineOptionEntity]) {
        rows.sort_by(|a, b| {
            group_position(a.group_required, &a.group_name, a.group_id)
                .cmp(&group_position(b.group_required, &b.group_name, b.group_id))
                .then_with(|| option_position(&a.name, a.id).cmp(&option_position(&b.name, b.id)))
        });
    }

    pub fn into_domain(self) -> CartLineOption {
        CartLineOption {
            id: self.id,
            name: self.name,
            price_adjustment: Money::new(self.price_adjustment),
        }
    }
}

#[derive(Debug, FromRow)]
pub struct CartLineOptionLinkEntity {
    pub line_id: Uuid,
    pub option_id: Uuid,
}
