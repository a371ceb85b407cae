use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::kitchen::repository::KitchenRepository;
use business::domain::kitchen::state_machine::OrderStatus;
use business::domain::order::model::{Order, OrderSummary};
use business::domain::order::repository::OrderRepository;
use business::domain::shared::value_objects::UserId;

use super::entity::OrderEntity;
use super::queries::{ORDER_COLUMNS, attach_items};
use crate::db::map_db_error;

/// Reads order history for customers and drives the kitchen queue.
pub struct OrderRepositoryPostgres {
    pool: PgPool,
}

impl OrderRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for OrderRepositoryPostgres {
    async fn get_history(&self, user_id: &UserId) -> Result<Vec<OrderSummary>, RepositoryError> {
        let entities = sqlx::query_as::<_, OrderEntity>(&format!(
            "SELECT {} FROM orders WHERE user_id = $1 ORDER BY created_at DESC, id",
            ORDER_COLUMNS
        ))
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(entities.into_iter().map(|e| e.into_summary()).collect())
    }

    async fn get_for_user(&self, id: Uuid, user_id: &UserId) -> Result<Order, RepositoryError> {
        let mut conn = self.pool.acquire().await.map_err(map_db_error)?;
        let entity = sqlx::query_as::<_, OrderEntity>(&format!(
            "SELECT {} FROM orders WHERE id = $1 AND user_id = $2",
            ORDER_COLUMNS
        ))
        .bind(id)
        .bind(user_id.as_str())
        .fetch_optional(&mut *conn)
        .await
        .map_err(map_db_error)?
        .ok_or(RepositoryError::NotFound)?;

        attach_items(&mut conn, vec![entity])
            .await?
            .pop()
            .ok_or(RepositoryError::NotFound)
    }
}

#[async_trait]
impl KitchenRepository for OrderRepositoryPostgres {
    async fn get_active_orders(&self) -> Result<Vec<Order>, RepositoryError> {
        let active: Vec<&str> = OrderStatus::ALL
            .into_iter()
            .filter(|s| s.is_active())
            .map(|s| s.as_str())
            .collect();

        let mut conn = self.pool.acquire().await.map_err(map_db_error)?;
        let entities = sqlx::query_as::<_, OrderEntity>(&format!(
            "SELECT {} FROM orders WHERE status = ANY($1) ORDER BY created_at, id",
            ORDER_COLUMNS
        ))
        .bind(active)
        .fetch_all(&mut *conn)
        .await
        .map_err(map_db_error)?;

        attach_items(&mut conn, entities).await
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Order, RepositoryError> {
        let mut conn = self.pool.acquire().await.map_err(map_db_error)?;
        let entity = sqlx::query_as::<_, OrderEntity>(&format!(
            "SELECT {} FROM orders WHERE id = $1",
            ORDER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(map_db_error)?
        .ok_or(RepositoryError::NotFound)?;

        attach_items(&mut conn, vec![entity])
            .await?
            .pop()
            .ok_or(RepositoryError::NotFound)
    }

    async fn update_status(
        &self,
        id: Uuid,
        from: OrderStatus,
        to: OrderStatus,
    ) -> Result<bool, RepositoryError> {
        let result = sqlx::query("UPDATE orders SET status = $3 WHERE id = $1 AND status = $2")
            .bind(id)
            .bind(from.as_str())
            .bind(to.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() == 1)
    }

    async fn cancel(&self, id: Uuid, from: OrderStatus) -> Result<bool, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query("UPDATE orders SET status = $3 WHERE id = $1 AND status = $2")
            .bind(id)
            .bind(from.as_str())
            .bind(OrderStatus::Cancelled.as_str())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() != 1 {
            tx.rollback().await.map_err(map_db_error)?;
            return Ok(false);
        }

        // Items whose product was deleted have nothing to restock.
        sqlx::query(
            r#"UPDATE products p
            SET stock = p.stock + returned.quantity, updated_at = now()
            FROM (
                SELECT product_id, SUM(quantity)::INTEGER AS quantity
                FROM order_items
                WHERE order_id = $1 AND product_id IS NOT NULL
                GROUP BY product_id
            ) returned
            WHERE p.id = returned.product_id"#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(true)
    }
}
