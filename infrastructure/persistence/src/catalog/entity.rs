use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::catalog::model::{
    Category, OptionGroup, Product, ProductOption, SelectionMode,
};
use business::domain::shared::money::Money;

use crate::db::from_db_int;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub name: String,
    pub price: BigDecimal,
    pub category_id: Option<Uuid>,
    pub category_name: Option<String>,
    pub image_path: Option<String>,
    pub active: bool,
    pub special: bool,
    pub stock: i32,
    pub option_group_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            self.name,
            Money::new(self.price),
            self.category_id,
            self.category_name,
            self.image_path,
            self.active,
            self.special,
            from_db_int(self.stock),
            self.option_group_ids,
            self.created_at,
            self.updated_at,
        )
    }
}

#[derive(Debug, FromRow)]
pub struct CategoryEntity {
    pub id: Uuid,
    pub name: String,
}

impl CategoryEntity {
    pub fn into_domain(self) -> Category {
        Category::from_repository(self.id, self.name)
    }
}

#[derive(Debug, FromRow)]
pub struct OptionGroupEntity {
    pub id: Uuid,
    pub name: String,
    pub selection_mode: String,
    pub required: bool,
}

impl OptionGroupEntity {
    pub fn into_domain(self, options: Vec<ProductOption>) -> OptionGroup {
        OptionGroup::from_repository(
            self.id,
            self.name,
            self.selection_mode
                .parse::<SelectionMode>()
                .unwrap_or(SelectionMode::Single),
            self.required,
            options,
        )
    }
}

#[derive(Debug, FromRow)]
pub struct OptionEntity {
    pub id: Uuid,
    pub group_id: Uuid,
    pub name: String,
    pub price_adjustment: BigDecimal,
}

impl OptionEntity {
    pub fn into_domain(self) -> ProductOption {
        ProductOption::from_repository(
            self.id,
            self.group_id,
            self.name,
            Money::new(self.price_adjustment),
        )
    }
}
