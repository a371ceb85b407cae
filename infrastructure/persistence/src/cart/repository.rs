use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use business::domain::cart::model::{CartLine, CartLineDetails};
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

use super::entity::{
    CartLineDetailsEntity, CartLineEntity, CartLineOptionEntity, CartLineOptionLinkEntity,
};
use crate::db::{map_db_error, to_db_int};

pub struct CartRepositoryPostgres {
    pool: PgPool,
}

impl CartRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartRepository for CartRepositoryPostgres {
    async fn add_line(&self, line: &CartLine) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r#"INSERT INTO cart_lines (id, user_id, product_id, quantity, note, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)"#,
        )
        .bind(line.id)
        .bind(line.user_id.as_str())
        .bind(line.product_id)
        .bind(to_db_int(line.quantity)?)
        .bind(&line.note)
        .bind(line.created_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        for option_id in &line.option_ids {
            sqlx::query("INSERT INTO cart_line_options (line_id, option_id) VALUES ($1, $2)")
                .bind(line.id)
                .bind(option_id)
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    async fn get_lines(&self, user_id: &UserId) -> Result<Vec<CartLineDetails>, RepositoryError> {
        let lines = sqlx::query_as::<_, CartLineDetailsEntity>(
            r#"SELECT cl.id, cl.product_id, p.name AS product_name, p.image_path, p.price,
                cl.quantity, cl.note, cl.created_at
            FROM cart_lines cl
            JOIN products p ON p.id = cl.product_id
            WHERE cl.user_id = $1
            ORDER BY cl.created_at, cl.id"#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        if lines.is_empty() {
            return Ok(Vec::new());
        }

        let line_ids: Vec<Uuid> = lines.iter().map(|l| l.id).collect();
        let mut options = sqlx::query_as::<_, CartLineOptionEntity>(
            r#"SELECT clo.line_id, o.id, o.name, o.price_adjustment,
                g.id AS group_id, g.name AS group_name, g.required AS group_required
            FROM cart_line_options clo
            JOIN options o ON o.id = clo.option_id
            JOIN option_groups g ON g.id = o.group_id
            WHERE clo.line_id = ANY($1)"#,
        )
        .bind(line_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;
        CartLineOptionEntity::sort(&mut options);

        let mut by_line: HashMap<Uuid, Vec<_>> = HashMap::new();
        for option in options {
            by_line
                .entry(option.line_id)
                .or_default()
                .push(option.into_domain());
        }

        Ok(lines
            .into_iter()
            .map(|l| {
                let options = by_line.remove(&l.id).unwrap_or_default();
                l.into_domain(options)
            })
            .collect())
    }

    async fn remove_line(&self, id: Uuid, user_id: &UserId) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM cart_lines WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    async fn clear(&self, user_id: &UserId) -> Result<u64, RepositoryError> {
        let mut conn = self.pool.acquire().await.map_err(map_db_error)?;
        delete_user_lines(&mut conn, user_id).await
    }
}

/// Reads a user's lines with `FOR UPDATE`; the locks last until the caller's
/// transaction ends.
pub(crate) async fn lock_user_lines(
    conn: &mut PgConnection,
    user_id: &UserId,
) -> Result<Vec<CartLine>, RepositoryError> {
    let lines = sqlx::query_as::<_, CartLineEntity>(
        r#"SELECT id, user_id, product_id, quantity, note, created_at
        FROM cart_lines
        WHERE user_id = $1
        ORDER BY created_at, id
        FOR UPDATE"#,
    )
    .bind(user_id.as_str())
    .fetch_all(&mut *conn)
    .await
    .map_err(map_db_error)?;

    if lines.is_empty() {
        return Ok(Vec::new());
    }

    let line_ids: Vec<Uuid> = lines.iter().map(|l| l.id).collect();
    let links = sqlx::query_as::<_, CartLineOptionLinkEntity>(
        "SELECT line_id, option_id FROM cart_line_options WHERE line_id = ANY($1)",
    )
    .bind(line_ids)
    .fetch_all(&mut *conn)
    .await
    .map_err(map_db_error)?;

    let mut by_line: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
    for link in links {
        by_line.entry(link.line_id).or_default().push(link.option_id);
    }

    Ok(lines
        .into_iter()
        .map(|l| {
            let option_ids = by_line.remove(&l.id).unwrap_or_default();
            l.into_domain(option_ids)
        })
        .collect())
}

pub(crate) async fn delete_user_lines(
    conn: &mut PgConnection,
    user_id: &UserId,
) -> Result<u64, RepositoryError> {
    let result = sqlx::query("DELETE FROM cart_lines WHERE user_id = $1")
        .bind(user_id.as_str())
        .execute(&mut *conn)
        .await
        .map_err(map_db_error)?;

    Ok(result.rows_affected())
}
