use std::collections::HashMap;

use sqlx::PgConnection;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::order::model::{Order, OrderItem};

use super::entity::{OrderEntity, OrderItemEntity, OrderItemOptionEntity};
use crate::db::{map_db_error, to_db_int};

pub(crate) const ORDER_COLUMNS: &str =
    "id, user_id, customer_email, total, status, note, created_at";

/// Attaches items and their option snapshots, in insertion order.
pub(crate) async fn attach_items(
    conn: &mut PgConnection,
    orders: Vec<OrderEntity>,
) -> Result<Vec<Order>, RepositoryError> {
    if orders.is_empty() {
        return Ok(Vec::new());
    }

    let order_ids: Vec<Uuid> = orders.iter().map(|o| o.id).collect();
    let items = sqlx::query_as::<_, OrderItemEntity>(
        r#"SELECT id, order_id, product_id, product_name, quantity, unit_price, line_total, note
        FROM order_items
        WHERE order_id = ANY($1)
        ORDER BY seq"#,
    )
    .bind(order_ids)
    .fetch_all(&mut *conn)
    .await
    .map_err(map_db_error)?;

    let item_ids: Vec<Uuid> = items.iter().map(|i| i.id).collect();
    let options = if item_ids.is_empty() {
        Vec::new()
    } else {
        sqlx::query_as::<_, OrderItemOptionEntity>(
            r#"SELECT order_item_id, option_id, name, price_adjustment
            FROM order_item_options
            WHERE order_item_id = ANY($1)
            ORDER BY seq"#,
        )
        .bind(item_ids)
        .fetch_all(&mut *conn)
        .await
        .map_err(map_db_error)?
    };

    let mut options_by_item: HashMap<Uuid, Vec<_>> = HashMap::new();
    for option in options {
        options_by_item
            .entry(option.order_item_id)
            .or_default()
            .push(option.into_domain());
    }

    let mut items_by_order: HashMap<Uuid, Vec<OrderItem>> = HashMap::new();
    for item in items {
        let options = options_by_item.remove(&item.id).unwrap_or_default();
        items_by_order
            .entry(item.order_id)
            .or_default()
            .push(item.into_domain(options));
    }

    Ok(orders
        .into_iter()
        .map(|o| {
            let items = items_by_order.remove(&o.id).unwrap_or_default();
            o.into_domain(items)
        })
        .collect())
}

pub(crate) async fn insert_order(
    conn: &mut PgConnection,
    order: &Order,
) -> Result<(), RepositoryError> {
    sqlx::query(
        r#"INSERT INTO orders (id, user_id, customer_email, total, status, note, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)"#,
    )
    .bind(order.id)
    .bind(order.user_id.as_str())
    .bind(&order.customer_email)
    .bind(order.total.as_decimal())
    .bind(order.status.as_str())
    .bind(&order.note)
    .bind(order.created_at)
    .execute(&mut *conn)
    .await
    .map_err(map_db_error)?;

    Ok(())
}

pub(crate) async fn insert_order_item(
    conn: &mut PgConnection,
    order_id: Uuid,
    item: &OrderItem,
) -> Result<(), RepositoryError> {
    sqlx::query(
        r#"INSERT INTO order_items (id, order_id, product_id, product_name, quantity, unit_price, line_total, note)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)"#,
    )
    .bind(item.id)
    .bind(order_id)
    .bind(item.product_id)
    .bind(&item.product_name)
    .bind(to_db_int(item.quantity)?)
    .bind(item.unit_price.as_decimal())
    .bind(item.line_total.as_decimal())
    .bind(&item.note)
    .execute(&mut *conn)
    .await
    .map_err(map_db_error)?;

    for option in &item.options {
        sqlx::query(
            r#"INSERT INTO order_item_options (order_item_id, option_id, name, price_adjustment)
            VALUES ($1, $2, $3, $4)"#,
        )
        .bind(item.id)
        .bind(option.option_id)
        .bind(&option.name)
        .bind(option.price_adjustment.as_decimal())
        .execute(&mut *conn)
        .await
        .map_err(map_db_error)?;
    }

    Ok(())
}
