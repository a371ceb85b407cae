use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::catalog::model::Category;
use business::domain::catalog::repository::CategoryRepository;
use business::domain::errors::RepositoryError;

use super::entity::CategoryEntity;
use crate::db::{map_db_error, to_count};

pub struct CategoryRepositoryPostgres {
    pool: PgPool,
}

impl CategoryRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for CategoryRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Category>, RepositoryError> {
        let entities =
            sqlx::query_as::<_, CategoryEntity>("SELECT id, name FROM categories ORDER BY name")
                .fetch_all(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Category, RepositoryError> {
        let entity =
            sqlx::query_as::<_, CategoryEntity>("SELECT id, name FROM categories WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_db_error)?
                .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn save(&self, category: &Category) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO categories (id, name) VALUES ($1, $2)
            ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name"#,
        )
        .bind(category.id)
        .bind(&category.name)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    async fn count_products(&self, id: Uuid) -> Result<u64, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE category_id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(to_count(count))
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
