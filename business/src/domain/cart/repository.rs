use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::{CartLine, CartLineDetails};

#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Inserts the line and its option links atomically.
    async fn add_line(&self, line: &CartLine) -> Result<(), RepositoryError>;
    /// Lines of one user, oldest first, joined with product and option rows.
    async fn get_lines(&self, user_id: &UserId) -> Result<Vec<CartLineDetails>, RepositoryError>;
    /// Returns the number of deleted rows; zero when the line is not the user's.
    async fn remove_line(&self, id: Uuid, user_id: &UserId) -> Result<u64, RepositoryError>;
    async fn clear(&self, user_id: &UserId) -> Result<u64, RepositoryError>;
}
