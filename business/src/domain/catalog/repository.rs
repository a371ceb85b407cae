use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::{Category, OptionGroup, Product, ProductDetail, ProductOption};

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    /// Active products only, sorted by name.
    async fn get_active_products(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
    async fn get_detail(&self, id: Uuid) -> Result<ProductDetail, RepositoryError>;
    /// Upserts the product and replaces its option group links in one transaction.
    async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
    async fn set_active(&self, id: Uuid, active: bool) -> Result<(), RepositoryError>;
    async fn set_special(&self, id: Uuid, special: bool) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Category>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Category, RepositoryError>;
    /// Fails with `Duplicated` when another category already uses the name.
    async fn save(&self, category: &Category) -> Result<(), RepositoryError>;
    async fn count_products(&self, id: Uuid) -> Result<u64, RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait OptionGroupRepository: Send + Sync {
    /// Every group with its options, sorted by name.
    async fn get_all(&self) -> Result<Vec<OptionGroup>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<OptionGroup, RepositoryError>;
    /// Number of the given ids that name an existing group.
    async fn count_existing(&self, ids: &[Uuid]) -> Result<u64, RepositoryError>;
    async fn save(&self, group: &OptionGroup) -> Result<(), RepositoryError>;
    async fn count_product_links(&self, id: Uuid) -> Result<u64, RepositoryError>;
    /// Deletes the group and, by cascade, its options.
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    async fn get_option(&self, id: Uuid) -> Result<ProductOption, RepositoryError>;
    async fn save_option(&self, option: &ProductOption) -> Result<(), RepositoryError>;
    async fn delete_option(&self, id: Uuid) -> Result<(), RepositoryError>;
}
