use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use business::domain::cart::model::CartLine;
use business::domain::catalog::model::ProductDetail;
use business::domain::errors::RepositoryError;
use business::domain::order::model::{Order, OrderItem};
use business::domain::order::repository::{CheckoutSession, CheckoutUnitOfWork};
use business::domain::shared::value_objects::UserId;

use super::queries;
use crate::cart::repository::{delete_user_lines, lock_user_lines};
use crate::catalog::queries::fetch_product_detail;
use crate::db::{map_db_error, to_db_int};

/// Opens one serializable transaction per checkout.
pub struct PgCheckoutUnitOfWork {
    pool: PgPool,
}

impl PgCheckoutUnitOfWork {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CheckoutUnitOfWork for PgCheckoutUnitOfWork {
    async fn begin(&self) -> Result<Box<dyn CheckoutSession>, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        Ok(Box::new(PgCheckoutSession { tx: Some(tx) }))
    }
}

/// Dropping the session with an open transaction rolls it back.
pub struct PgCheckoutSession {
    tx: Option<Transaction<'static, Postgres>>,
}

impl PgCheckoutSession {
    fn tx(&mut self) -> Result<&mut Transaction<'static, Postgres>, RepositoryError> {
        self.tx.as_mut().ok_or(RepositoryError::Persistence)
    }
}

#[async_trait]
impl CheckoutSession for PgCheckoutSession {
    async fn lock_cart_lines(&mut self, user_id: &UserId) -> Result<Vec<CartLine>, RepositoryError> {
        let tx = self.tx()?;
        lock_user_lines(tx, user_id).await
    }

    async fn get_product_detail(
        &mut self,
        product_id: Uuid,
    ) -> Result<Option<ProductDetail>, RepositoryError> {
        let tx = self.tx()?;
        fetch_product_detail(tx, product_id).await
    }

    async fn reserve_stock(&mut self, product_id: Uuid, quantity: u32) -> Result<bool, RepositoryError> {
        let quantity = to_db_int(quantity)?;
        let tx = self.tx()?;

        let result = sqlx::query(
            "UPDATE products SET stock = stock - $2, updated_at = now() WHERE id = $1 AND stock >= $2",
        )
        .bind(product_id)
        .bind(quantity)
        .execute(&mut **tx)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() == 1)
    }

    async fn insert_order(&mut self, order: &Order) -> Result<(), RepositoryError> {
        let tx = self.tx()?;
        queries::insert_order(tx, order).await
    }

    async fn insert_order_item(&mut self, order_id: Uuid, item: &OrderItem) -> Result<(), RepositoryError> {
        let tx = self.tx()?;
        queries::insert_order_item(tx, order_id, item).await
    }

    async fn clear_cart(&mut self, user_id: &UserId) -> Result<u64, RepositoryError> {
        let tx = self.tx()?;
        delete_user_lines(tx, user_id).await
    }

    async fn commit(&mut self) -> Result<(), RepositoryError> {
        let tx = self.tx.take().ok_or(RepositoryError::Persistence)?;
        tx.commit().await.map_err(map_db_error)
    }

    async fn rollback(&mut self) -> Result<(), RepositoryError> {
        match self.tx.take() {
            Some(tx) => tx.rollback().await.map_err(map_db_error),
            None => Ok(()),
        }
    }
}
