use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::catalog::model::{OptionGroup, ProductOption};
use business::domain::catalog::repository::OptionGroupRepository;
use business::domain::errors::RepositoryError;

use super::entity::OptionEntity;
use super::queries::fetch_groups;
use crate::db::{map_db_error, to_count};

pub struct OptionGroupRepositoryPostgres {
    pool: PgPool,
}

impl OptionGroupRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OptionGroupRepository for OptionGroupRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<OptionGroup>, RepositoryError> {
        let mut conn = self.pool.acquire().await.map_err(map_db_error)?;
        fetch_groups(&mut conn, None).await
    }

    async fn get_by_id(&self, id: Uuid) -> Result<OptionGroup, RepositoryError> {
        let mut conn = self.pool.acquire().await.map_err(map_db_error)?;
        fetch_groups(&mut conn, Some(std::slice::from_ref(&id)))
            .await?
            .pop()
            .ok_or(RepositoryError::NotFound)
    }

    async fn count_existing(&self, ids: &[Uuid]) -> Result<u64, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM option_groups WHERE id = ANY($1)")
            .bind(ids.to_vec())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(to_count(count))
    }

    async fn save(&self, group: &OptionGroup) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO option_groups (id, name, selection_mode, required)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                selection_mode = EXCLUDED.selection_mode,
                required = EXCLUDED.required"#,
        )
        .bind(group.id)
        .bind(&group.name)
        .bind(group.selection_mode.to_string())
        .bind(group.required)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    async fn count_product_links(&self, id: Uuid) -> Result<u64, RepositoryError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM product_option_groups WHERE group_id = $1")
                .bind(id)
                .fetch_one(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(to_count(count))
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM option_groups WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn get_option(&self, id: Uuid) -> Result<ProductOption, RepositoryError> {
        let entity = sqlx::query_as::<_, OptionEntity>(
            "SELECT id, group_id, name, price_adjustment FROM options WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn save_option(&self, option: &ProductOption) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO options (id, group_id, name, price_adjustment)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                price_adjustment = EXCLUDED.price_adjustment"#,
        )
        .bind(option.id)
        .bind(option.group_id)
        .bind(&option.name)
        .bind(option.price_adjustment.as_decimal())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    async fn delete_option(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM options WHERE id = $1")
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
