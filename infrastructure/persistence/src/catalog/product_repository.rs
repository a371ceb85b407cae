use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::catalog::model::{Product, ProductDetail};
use business::domain::catalog::repository::ProductRepository;
use business::domain::errors::RepositoryError;

use super::entity::ProductEntity;
use super::queries::{PRODUCT_SELECT, fetch_product, fetch_product_detail};
use crate::db::{map_db_error, to_db_int};

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn set_flag(&self, sql: &str, id: Uuid, value: bool) -> Result<(), RepositoryError> {
        let result = sqlx::query(sql)
            .bind(id)
            .bind(value)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "{} ORDER BY p.name, p.id",
            PRODUCT_SELECT
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_active_products(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "{} WHERE p.active ORDER BY p.name, p.id",
            PRODUCT_SELECT
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        let mut conn = self.pool.acquire().await.map_err(map_db_error)?;
        fetch_product(&mut conn, id)
            .await?
            .ok_or(RepositoryError::NotFound)
    }

    async fn get_detail(&self, id: Uuid) -> Result<ProductDetail, RepositoryError> {
        let mut conn = self.pool.acquire().await.map_err(map_db_error)?;
        fetch_product_detail(&mut conn, id)
            .await?
            .ok_or(RepositoryError::NotFound)
    }

    async fn save(&self, product: &Product) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r#"INSERT INTO products (id, name, price, category_id, image_path, active, special, stock, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                price = EXCLUDED.price,
                category_id = EXCLUDED.category_id,
                image_path = EXCLUDED.image_path,
                active = EXCLUDED.active,
                special = EXCLUDED.special,
                stock = EXCLUDED.stock,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(product.price.as_decimal())
        .bind(product.category_id)
        .bind(&product.image_path)
        .bind(product.active)
        .bind(product.special)
        .bind(to_db_int(product.stock)?)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query("DELETE FROM product_option_groups WHERE product_id = $1")
            .bind(product.id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        for group_id in &product.option_group_ids {
            sqlx::query("INSERT INTO product_option_groups (product_id, group_id) VALUES ($1, $2)")
                .bind(product.id)
                .bind(group_id)
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    async fn set_active(&self, id: Uuid, active: bool) -> Result<(), RepositoryError> {
        self.set_flag(
            "UPDATE products SET active = $2, updated_at = now() WHERE id = $1",
            id,
            active,
        )
        .await
    }

    async fn set_special(&self, id: Uuid, special: bool) -> Result<(), RepositoryError> {
        self.set_flag(
            "UPDATE products SET special = $2, updated_at = now() WHERE id = $1",
            id,
            special,
        )
        .await
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
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
